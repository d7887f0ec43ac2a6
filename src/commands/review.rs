//! Review commands - add, delete and list reviews

use anyhow::Result;
use colored::*;

use crate::catalog::{lookup_or_empty, Catalog};
use crate::core::{Rating, ReviewId};
use crate::storage::{ReviewError, ReviewStore};
use crate::ui;

pub fn add(
	catalog: &dyn Catalog,
	store: &mut dyn ReviewStore,
	user: &str,
	book_id: &str,
	rating: Rating,
	text: &str,
) -> Result<()> {
	let Some(book) = catalog.lookup(book_id)? else {
		ui::warn(&format!("No book with id {}", book_id));
		return Ok(());
	};

	match store.add(user, &book.id, rating, text) {
		Ok(review) => {
			ui::success(&format!(
				"Rated {} {} ({})",
				book.title.bright_white().bold(),
				ui::stars(review.rating.value()).bright_yellow(),
				review.id.short().dimmed()
			));
			Ok(())
		}
		Err(ReviewError::AlreadyReviewed(_)) => {
			ui::warn("You can only leave one review per book");
			Ok(())
		}
		Err(ReviewError::EmptyText) => {
			ui::warn("Write something about the book first");
			Ok(())
		}
		Err(e) => Err(e.into()),
	}
}

pub fn delete(store: &mut dyn ReviewStore, user: &str, review_id: &str) -> Result<()> {
	let id = ReviewId::from(review_id);

	match store.delete(user, &id) {
		Ok(review) => {
			ui::success(&format!("Deleted review {} of {}", review.id.short(), review.book_id));
			Ok(())
		}
		Err(e @ (ReviewError::NotFound(_) | ReviewError::NotOwner(_) | ReviewError::Ambiguous(_))) => {
			ui::warn(&e.to_string());
			Ok(())
		}
		Err(e) => Err(e.into()),
	}
}

/// The user's reviews, newest first
pub fn list(catalog: &dyn Catalog, store: &dyn ReviewStore, user: &str) -> Result<()> {
	let mut reviews = store.reviews_by_user(user)?;

	if reviews.is_empty() {
		ui::info("You haven't reviewed any books yet");
		return Ok(());
	}

	reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

	ui::header(&format!("Reviews by {}", user));

	for review in &reviews {
		let book = lookup_or_empty(catalog, &review.book_id);
		let title = if book.title.is_empty() { review.book_id.clone() } else { book.title.clone() };

		println!(
			"  {} {} {}",
			ui::book_link(&title, &book.page_url(), 50).bright_white(),
			review.rating.to_string().bright_yellow(),
			review.created_at.format("%Y-%m-%d").to_string().dimmed()
		);
		println!("    {}", review.text);
		println!("    {}", format!("id: {}", review.id).dimmed());
	}

	println!();
	ui::success(&format!("{} reviews", reviews.len()));

	Ok(())
}
