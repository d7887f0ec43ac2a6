//! # Shelf Library
//!
//! Book reviews and bag-of-words recommendations.
//! Provides catalog access, a local review store, and a ranker that scores
//! catalog books against a user's highest-rated reviews.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod recommend;
pub mod storage;
pub mod text;
pub mod ui;
