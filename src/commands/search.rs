//! Search command - find books in the catalog

use anyhow::Result;
use colored::*;

use crate::catalog::Catalog;
use crate::core::Book;
use crate::ui;

pub fn run(catalog: &dyn Catalog, query: &str, limit: usize) -> Result<()> {
	let query = query.trim();
	if query.is_empty() {
		ui::warn("Empty query, nothing to search");
		return Ok(());
	}

	let search_start = std::time::Instant::now();
	ui::info(&format!("Searching for: \"{}\"", query));

	let books = catalog.search(query, limit)?;

	if books.is_empty() {
		ui::warn("No books found");
		return Ok(());
	}

	ui::header("Results");
	print_books(&books);
	println!();

	ui::success(&format!(
		"Found {} books in {}ms",
		books.len(),
		search_start.elapsed().as_millis()
	));

	Ok(())
}

/// Numbered list of books with their ids
pub fn print_books(books: &[Book]) {
	for (i, book) in books.iter().enumerate() {
		let link = ui::book_link(&book.title, &book.page_url(), 60);
		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			link.bright_white(),
			book.authors_line().dimmed(),
			format!("[{}]", book.id).yellow()
		);
	}
}
