//! Candidate pool and composite scoring

use std::collections::HashSet;

use super::profile::ReferenceProfile;
use crate::config::{AUTHOR_WEIGHT, CATEGORY_WEIGHT, SIMILARITY_WEIGHT};
use crate::core::Book;
use crate::text::{cosine_similarity, rank_order, vectorize};

/// How a candidate's score is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
	/// Weighted cosine similarity plus author and category overlap
	Composite,
	/// Cosine similarity alone
	SimilarityOnly,
}

#[derive(Debug, Clone)]
pub struct RankedBook {
	pub book: Book,
	pub score: f32,
	pub author_match: bool,
	pub category_match: bool,
}

/// Catalog hits reduced to scoreable candidates, in encounter order
#[derive(Debug, Default)]
pub struct CandidatePool {
	books: Vec<Book>,
}

impl CandidatePool {
	/// Drop blank and repeated titles (case-insensitive) and the profile's own books
	pub fn dedup(profile: &ReferenceProfile, hits: Vec<Book>) -> Self {
		let mut seen = HashSet::new();
		let mut books = Vec::new();

		for book in hits {
			let title = book.title.to_lowercase();
			if title.is_empty() || seen.contains(&title) {
				continue;
			}
			if profile.contains_book(&book.id) {
				continue;
			}
			seen.insert(title);
			books.push(book);
		}

		Self { books }
	}

	/// Drop the seed itself and every hit sharing its title
	pub fn excluding_seed(seed: &Book, hits: Vec<Book>) -> Self {
		let seed_title = seed.title.to_lowercase();
		let books = hits
			.into_iter()
			.filter(|b| b.id != seed.id && b.title.to_lowercase() != seed_title)
			.collect();

		Self { books }
	}

	pub fn len(&self) -> usize {
		self.books.len()
	}

	pub fn is_empty(&self) -> bool {
		self.books.is_empty()
	}

	pub fn books(&self) -> &[Book] {
		&self.books
	}
}

/// Score every candidate against `profile` and keep the best `limit`.
///
/// Sort is stable and descending; NaN scores land at the bottom.
pub fn rank(profile: &ReferenceProfile, pool: CandidatePool, blend: Blend, limit: usize) -> Vec<RankedBook> {
	if pool.is_empty() {
		return Vec::new();
	}

	let mut texts = Vec::with_capacity(pool.len() + 1);
	texts.push(profile.text.clone());
	texts.extend(pool.books.iter().map(|b| match blend {
		Blend::Composite => b.document_text(),
		Blend::SimilarityOnly => format!("{} {}", b.title, b.description),
	}));

	let (_, vectors) = vectorize(&texts);
	let reference = vectors[0].as_slice();

	let mut ranked: Vec<RankedBook> = pool
		.books
		.into_iter()
		.zip(vectors[1..].iter())
		.map(|(book, vector)| {
			let similarity = cosine_similarity(reference, vector.as_slice());
			let author_match = profile.authors.shares_any(&book.authors);
			let category_match = profile.categories.shares_any(&book.categories);

			let score = match blend {
				Blend::Composite => {
					SIMILARITY_WEIGHT * similarity
						+ AUTHOR_WEIGHT * indicator(author_match)
						+ CATEGORY_WEIGHT * indicator(category_match)
				}
				Blend::SimilarityOnly => similarity,
			};

			RankedBook { book, score, author_match, category_match }
		})
		.collect();

	ranked.sort_by(|a, b| rank_order(a.score, b.score));
	ranked.truncate(limit);
	ranked
}

fn indicator(hit: bool) -> f32 {
	if hit {
		1.0
	} else {
		0.0
	}
}
