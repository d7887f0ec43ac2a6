//! # User Interface
//!
//! Colored terminal output with clickable book links.

pub mod log;

pub use log::{book_link, debug, error, header, info, print_logo, stars, success, warn, Log};
