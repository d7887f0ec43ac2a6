//! Show command - book details and reviews

use anyhow::Result;
use colored::*;

use crate::catalog::Catalog;
use crate::storage::{average_rating, ReviewStore};
use crate::ui;

pub fn run(
	catalog: &dyn Catalog,
	store: &dyn ReviewStore,
	book_id: &str,
	viewer: Option<&str>,
	open_page: bool,
) -> Result<()> {
	let Some(book) = catalog.lookup(book_id)? else {
		ui::warn(&format!("No book with id {}", book_id));
		return Ok(());
	};

	let reviews = store.reviews_for_book(&book.id, viewer)?;

	ui::header(&book.title);
	println!("  {}", book.authors_line().dimmed());
	if !book.categories.is_empty() {
		println!("  {}", book.categories.join(" · ").yellow());
	}
	if let Some(thumb) = &book.thumbnail {
		ui::debug(&format!("Cover: {}", thumb));
	}
	println!();

	if book.description.is_empty() {
		println!("  {}", "No description available.".dimmed());
	} else {
		println!("  {}", book.description);
	}

	ui::header("Reviews");

	if reviews.is_empty() {
		println!("  {}", "No reviews yet. Be the first to leave one!".dimmed());
	} else {
		let average = average_rating(&reviews);
		println!(
			"  {} {:.1} {}",
			ui::stars(average).bright_yellow(),
			average,
			format!("({} reviews)", reviews.len()).dimmed()
		);
		println!();

		for review in &reviews {
			let own = viewer == Some(review.user.as_str());
			let author = if own {
				format!("{} (you)", review.user).bright_green().bold()
			} else {
				review.user.bright_white().bold()
			};

			println!(
				"  {} rated {} {}",
				author,
				review.rating.to_string().bright_yellow(),
				review.created_at.format("%Y-%m-%d").to_string().dimmed()
			);
			println!("    {}", review.text);
			if own {
				println!("    {}", format!("id: {}", review.id).dimmed());
			}
		}
	}

	println!();

	if open_page {
		if let Err(e) = open::that(book.page_url()) {
			ui::warn(&format!("Failed to open: {}", e));
		}
	}

	Ok(())
}
