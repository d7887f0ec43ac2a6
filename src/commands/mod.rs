//! # Command Implementations
//!
//! Each submodule handles one CLI command (search, review, recommend, etc.).

pub mod recommend;
pub mod review;
pub mod search;
pub mod show;
pub mod trending;
