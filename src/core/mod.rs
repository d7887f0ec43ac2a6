//! Core domain types

pub mod book;
pub mod review;

pub use book::Book;
pub use review::{Rating, RatingError, Review, ReviewId};
