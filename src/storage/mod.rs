//! Review storage

pub mod file;
pub mod memory;

use thiserror::Error;

use crate::core::{Rating, Review, ReviewId};

pub use file::FileReviewStore;
pub use memory::ReviewLog;

#[derive(Debug, Error)]
pub enum ReviewError {
	#[error("you already reviewed book {0}")]
	AlreadyReviewed(String),
	#[error("review text cannot be empty")]
	EmptyText,
	#[error("no review with id {0}")]
	NotFound(ReviewId),
	#[error("review id {0} matches more than one review, use more digits")]
	Ambiguous(ReviewId),
	#[error("review {0} belongs to another user")]
	NotOwner(ReviewId),
	#[error(transparent)]
	Storage(#[from] anyhow::Error),
}

pub trait ReviewStore {
	/// Reviews by `user`, highest rating first, newest first among equal ratings
	fn reviews_by_user(&self, user: &str) -> Result<Vec<Review>, ReviewError>;

	/// Reviews of `book_id`, the viewer's own first, then newest first
	fn reviews_for_book(&self, book_id: &str, viewer: Option<&str>) -> Result<Vec<Review>, ReviewError>;

	/// One review per user and book
	fn add(&mut self, user: &str, book_id: &str, rating: Rating, text: &str) -> Result<Review, ReviewError>;

	/// Only the author can delete a review. `id` may be a unique prefix,
	/// such as [`ReviewId::short`].
	fn delete(&mut self, user: &str, id: &ReviewId) -> Result<Review, ReviewError>;
}

/// Mean rating, 0.0 when there are no reviews
pub fn average_rating(reviews: &[Review]) -> f32 {
	if reviews.is_empty() {
		return 0.0;
	}
	reviews.iter().map(|r| r.rating.value()).sum::<f32>() / reviews.len() as f32
}
