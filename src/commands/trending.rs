//! Trending command - featured books

use anyhow::Result;

use crate::catalog::{trending, Catalog};
use crate::ui;

pub fn run(catalog: &dyn Catalog) -> Result<()> {
	let books = trending(catalog);

	if books.is_empty() {
		ui::warn("Catalog is unreachable, try again later");
		return Ok(());
	}

	ui::header("Top books");
	super::search::print_books(&books);
	println!();

	Ok(())
}
