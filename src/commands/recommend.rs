//! Recommend command - ranked picks or the favorite-title fallback

use anyhow::Result;
use colored::*;

use crate::catalog::Catalog;
use crate::recommend::{recommend, recommend_from_favorite, RankedBook, Recommendation};
use crate::storage::ReviewStore;
use crate::ui;

pub fn run(
	catalog: &dyn Catalog,
	store: &dyn ReviewStore,
	user: &str,
	favorite: Option<&str>,
	limit: usize,
	open_first: bool,
) -> Result<()> {
	let start = std::time::Instant::now();

	let mut outcome = recommend(catalog, store, user)?;

	if let Recommendation::NeedsFavorite = outcome {
		match favorite {
			Some(title) => {
				ui::info(&format!("Finding one book like \"{}\"", title));
				outcome = recommend_from_favorite(catalog, title)?;
			}
			None => {
				ui::warn("You need at least 2 reviews so we can understand your taste");
				println!();
				println!("  {} Either:", "💡".bright_blue().bold());
				println!("     • Review 2 or more books with 'shelf review'");
				println!("     • Or run 'shelf recommend --favorite \"<title>\"' for 1 recommendation");
				println!();
				return Ok(());
			}
		}
	}

	let picks: Vec<&RankedBook> = match &outcome {
		Recommendation::SeedNotFound => {
			ui::warn("Couldn't find that book. Try another.");
			return Ok(());
		}
		Recommendation::NoCandidates => {
			ui::warn("Found your book, but nothing similar to recommend");
			return Ok(());
		}
		other => other.books().iter().take(limit).collect(),
	};

	if picks.is_empty() {
		ui::warn("No recommendations found");
		return Ok(());
	}

	ui::header(if picks.len() == 1 { "Here's a book you might enjoy" } else { "Recommended for you" });

	for (i, pick) in picks.iter().enumerate() {
		let book = &pick.book;
		let link = ui::book_link(&book.title, &book.page_url(), 50);
		let score = if pick.score.is_nan() { "n/a".to_string() } else { format!("{:.0}%", pick.score * 100.0) };

		let mut reasons = Vec::new();
		if pick.author_match {
			reasons.push("same author");
		}
		if pick.category_match {
			reasons.push("same genre");
		}

		println!(
			"{}. {} {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			link.bright_white(),
			book.authors_line().dimmed(),
			score.dimmed(),
			reasons.join(", ").bright_green()
		);
	}

	println!();
	ui::success(&format!(
		"{} recommendations in {}ms",
		picks.len(),
		start.elapsed().as_millis()
	));

	if open_first {
		if let Err(e) = open::that(picks[0].book.page_url()) {
			ui::warn(&format!("Failed to open: {}", e));
		}
	}

	Ok(())
}
