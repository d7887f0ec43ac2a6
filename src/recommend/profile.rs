//! Reference profile built from a user's top-rated books

use rayon::prelude::*;

use crate::catalog::{lookup_or_empty, Catalog};
use crate::config::{FALLBACK_QUERY, PROFILE_SIZE};
use crate::core::{Book, Review};

/// Insertion-ordered set of lowercased names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameSet(Vec<String>);

impl NameSet {
	pub fn insert(&mut self, name: &str) {
		let name = name.to_lowercase();
		if !self.0.contains(&name) {
			self.0.push(name);
		}
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.iter().any(|n| *n == name.to_lowercase())
	}

	/// True if any of `names` is in the set, case-insensitively
	pub fn shares_any(&self, names: &[String]) -> bool {
		names.iter().any(|n| self.contains(n))
	}

	pub fn first(&self) -> Option<&str> {
		self.0.first().map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceProfile {
	pub books: Vec<Book>,
	pub text: String,
	pub authors: NameSet,
	pub categories: NameSet,
}

impl ReferenceProfile {
	/// Profile from the first [`PROFILE_SIZE`] of `reviews`, which must already
	/// be ordered by rating then recency. `None` when the history is too short.
	///
	/// Lookups run in parallel; a failed lookup contributes an empty book.
	pub fn build<C: Catalog + ?Sized>(catalog: &C, reviews: &[Review]) -> Option<Self> {
		if reviews.len() < PROFILE_SIZE {
			return None;
		}

		let books: Vec<Book> = reviews[..PROFILE_SIZE]
			.par_iter()
			.map(|r| lookup_or_empty(catalog, &r.book_id))
			.collect();

		Some(Self::from_books(books))
	}

	pub fn from_books(books: Vec<Book>) -> Self {
		let mut profile = Self::default();

		for book in &books {
			for author in &book.authors {
				profile.authors.insert(author);
			}
			for category in &book.categories {
				profile.categories.insert(category);
			}
			profile.text.push_str(&format!(" {} {}", book.title, book.description));
		}

		profile.books = books;
		profile
	}

	/// Single-book profile for the favorite-title flow
	pub fn from_seed(seed: Book) -> Self {
		let description = if seed.description.is_empty() {
			seed.title.clone()
		} else {
			seed.description.clone()
		};

		let mut profile = Self::from_books(vec![seed]);
		profile.text = format!("{} {}", profile.books[0].title, description);
		profile
	}

	/// Most specific signal for the candidate query
	pub fn query_term(&self) -> &str {
		self.categories
			.first()
			.or_else(|| self.authors.first())
			.unwrap_or(FALLBACK_QUERY)
	}

	pub fn contains_book(&self, id: &str) -> bool {
		self.books.iter().any(|b| b.id == id)
	}
}
