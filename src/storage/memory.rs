//! In-memory review log

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{ReviewError, ReviewStore};
use crate::core::{Rating, Review, ReviewId};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLog {
	version: String,
	reviews: Vec<Review>,
}

impl Default for ReviewLog {
	fn default() -> Self {
		Self {
			version: VERSION.to_string(),
			reviews: Vec::new(),
		}
	}
}

impl ReviewLog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a fully-formed review, keeping the one-per-book rule
	pub fn insert(&mut self, review: Review) -> Result<Review, ReviewError> {
		if review.text.trim().is_empty() {
			return Err(ReviewError::EmptyText);
		}
		if self.reviews.iter().any(|r| r.user == review.user && r.book_id == review.book_id) {
			return Err(ReviewError::AlreadyReviewed(review.book_id));
		}
		self.reviews.push(review.clone());
		Ok(review)
	}

	pub fn len(&self) -> usize {
		self.reviews.len()
	}

	pub fn is_empty(&self) -> bool {
		self.reviews.is_empty()
	}

	pub fn is_current_version(&self) -> bool {
		self.version == VERSION
	}

	/// Position of the review whose id is `id` or starts with it
	fn resolve(&self, id: &ReviewId) -> Result<usize, ReviewError> {
		if let Some(pos) = self.reviews.iter().position(|r| &r.id == id) {
			return Ok(pos);
		}

		let prefix = id.as_str();
		let mut matches = self
			.reviews
			.iter()
			.enumerate()
			.filter(|(_, r)| !prefix.is_empty() && r.id.as_str().starts_with(prefix))
			.map(|(pos, _)| pos);

		match (matches.next(), matches.next()) {
			(Some(pos), None) => Ok(pos),
			(Some(_), Some(_)) => Err(ReviewError::Ambiguous(id.clone())),
			(None, _) => Err(ReviewError::NotFound(id.clone())),
		}
	}
}

impl ReviewStore for ReviewLog {
	fn reviews_by_user(&self, user: &str) -> Result<Vec<Review>, ReviewError> {
		let mut reviews: Vec<Review> = self.reviews.iter().filter(|r| r.user == user).cloned().collect();
		reviews.sort_by(|a, b| {
			b.rating
				.partial_cmp(&a.rating)
				.unwrap_or(Ordering::Equal)
				.then_with(|| b.created_at.cmp(&a.created_at))
		});
		Ok(reviews)
	}

	fn reviews_for_book(&self, book_id: &str, viewer: Option<&str>) -> Result<Vec<Review>, ReviewError> {
		let mut reviews: Vec<Review> = self.reviews.iter().filter(|r| r.book_id == book_id).cloned().collect();
		reviews.sort_by(|a, b| {
			let own_a = viewer == Some(a.user.as_str());
			let own_b = viewer == Some(b.user.as_str());
			own_b.cmp(&own_a).then_with(|| b.created_at.cmp(&a.created_at))
		});
		Ok(reviews)
	}

	fn add(&mut self, user: &str, book_id: &str, rating: Rating, text: &str) -> Result<Review, ReviewError> {
		self.insert(Review::new(user, book_id, rating, text, Utc::now()))
	}

	fn delete(&mut self, user: &str, id: &ReviewId) -> Result<Review, ReviewError> {
		let pos = self.resolve(id)?;

		if self.reviews[pos].user != user {
			return Err(ReviewError::NotOwner(id.clone()));
		}

		Ok(self.reviews.remove(pos))
	}
}
