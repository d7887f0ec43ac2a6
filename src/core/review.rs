//! Reviews, ratings and review identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Error, PartialEq)]
pub enum RatingError {
	#[error("rating must be between 0 and 5, got {0}")]
	OutOfRange(f32),
	#[error("rating must be a multiple of 0.5, got {0}")]
	NotHalfStep(f32),
}

/// Star rating from 0 to 5 in half-point increments
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
	pub fn new(value: f32) -> Result<Self, RatingError> {
		if !(0.0..=MAX_RATING).contains(&value) {
			return Err(RatingError::OutOfRange(value));
		}
		if (value * 2.0).fract() != 0.0 {
			return Err(RatingError::NotHalfStep(value));
		}
		Ok(Self(value))
	}

	pub fn value(&self) -> f32 {
		self.0
	}
}

impl TryFrom<f32> for Rating {
	type Error = RatingError;

	fn try_from(value: f32) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<Rating> for f32 {
	fn from(rating: Rating) -> Self {
		rating.0
	}
}

impl std::str::FromStr for Rating {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
		Self::new(value).map_err(|e| e.to_string())
	}
}

impl std::fmt::Display for Rating {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:.1}", self.0)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(String);

impl ReviewId {
	/// Digest of author, book and creation instant
	pub fn compute(user: &str, book_id: &str, created_at: &DateTime<Utc>) -> Self {
		let key = format!("{}\0{}\0{}", user, book_id, created_at.timestamp_nanos_opt().unwrap_or_default());
		Self(format!("{:016x}", xxh3_64(key.as_bytes())))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn short(&self) -> &str {
		&self.0[..8.min(self.0.len())]
	}
}

impl From<&str> for ReviewId {
	fn from(id: &str) -> Self {
		Self(id.trim().to_lowercase())
	}
}

impl std::fmt::Display for ReviewId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
	pub id: ReviewId,
	pub user: String,
	pub book_id: String,
	pub rating: Rating,
	pub text: String,
	pub created_at: DateTime<Utc>,
}

impl Review {
	pub fn new(user: &str, book_id: &str, rating: Rating, text: &str, created_at: DateTime<Utc>) -> Self {
		Self {
			id: ReviewId::compute(user, book_id, &created_at),
			user: user.to_string(),
			book_id: book_id.to_string(),
			rating,
			text: text.trim().to_string(),
			created_at,
		}
	}
}
