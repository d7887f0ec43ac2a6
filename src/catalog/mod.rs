//! Book catalog access

pub mod google_books;

use anyhow::Result;
use rayon::prelude::*;

use crate::config::TRENDING_QUERIES;
use crate::core::Book;
use crate::ui;

pub use google_books::GoogleBooks;

/// Read-only catalog of book summaries.
///
/// `Sync` so lookups can fan out across the rayon pool.
pub trait Catalog: Sync {
	/// Free-text search, best matches first
	fn search(&self, query: &str, max_results: usize) -> Result<Vec<Book>>;

	/// Direct lookup; `Ok(None)` when the id is unknown
	fn lookup(&self, id: &str) -> Result<Option<Book>>;
}

/// Lookup that never fails: errors and unknown ids become [`Book::empty`]
pub fn lookup_or_empty<C: Catalog + ?Sized>(catalog: &C, id: &str) -> Book {
	match catalog.lookup(id) {
		Ok(Some(book)) => book,
		Ok(None) => {
			ui::debug(&format!("Book {} not found in catalog", id));
			Book::empty(id)
		}
		Err(e) => {
			ui::debug(&format!("Lookup failed for {}: {:#}", id, e));
			Book::empty(id)
		}
	}
}

/// First hit of each featured query, fetched in parallel
pub fn trending<C: Catalog + ?Sized>(catalog: &C) -> Vec<Book> {
	TRENDING_QUERIES
		.par_iter()
		.map(|query| match catalog.search(query, 1) {
			Ok(books) => books.into_iter().next(),
			Err(e) => {
				ui::debug(&format!("Trending query '{}' failed: {:#}", query, e));
				None
			}
		})
		.collect::<Vec<_>>()
		.into_iter()
		.flatten()
		.collect()
}
