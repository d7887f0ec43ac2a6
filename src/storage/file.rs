//! MessagePack-backed review store

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{ReviewError, ReviewLog, ReviewStore};
use crate::core::{Rating, Review, ReviewId};
use crate::ui;

pub struct FileReviewStore {
	path: PathBuf,
	log: ReviewLog,
}

impl FileReviewStore {
	/// Open the store at `path`; a missing file is an empty store
	pub fn open(path: &Path) -> Result<Self> {
		let log = if path.exists() {
			load(path)?
		} else {
			ui::debug(&format!("No review store at {}, starting empty", path.display()));
			ReviewLog::new()
		};

		if !log.is_current_version() {
			ui::debug("Review store was written by another version, it will be rewritten on save");
		}

		Ok(Self {
			path: path.to_path_buf(),
			log,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn save(&self) -> Result<()> {
		save(&self.log, &self.path)
	}
}

impl ReviewStore for FileReviewStore {
	fn reviews_by_user(&self, user: &str) -> Result<Vec<Review>, ReviewError> {
		self.log.reviews_by_user(user)
	}

	fn reviews_for_book(&self, book_id: &str, viewer: Option<&str>) -> Result<Vec<Review>, ReviewError> {
		self.log.reviews_for_book(book_id, viewer)
	}

	fn add(&mut self, user: &str, book_id: &str, rating: Rating, text: &str) -> Result<Review, ReviewError> {
		let review = self.log.add(user, book_id, rating, text)?;
		self.save()?;
		Ok(review)
	}

	fn delete(&mut self, user: &str, id: &ReviewId) -> Result<Review, ReviewError> {
		let review = self.log.delete(user, id)?;
		self.save()?;
		Ok(review)
	}
}

fn save(log: &ReviewLog, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).context("Failed to create data directory")?;
	}

	let bytes = rmp_serde::to_vec_named(log).context("Failed to serialize reviews")?;
	fs::write(path, bytes).context("Failed to write review store")?;

	Ok(())
}

fn load(path: &Path) -> Result<ReviewLog> {
	let bytes = fs::read(path).context("Failed to read review store")?;
	rmp_serde::from_slice(&bytes).context("Failed to deserialize review store")
}
