//! # Recommendations
//!
//! Ranks catalog books against a reference profile built from the user's
//! highest-rated reviews. Users with too short a history get the
//! favorite-title flow instead: one seed book, one recommendation.

pub mod profile;
pub mod ranker;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::{CANDIDATE_PAGE_SIZE, FAVORITE_PAGE_SIZE, RANKED_LIMIT};
use crate::storage::ReviewStore;
use crate::ui;

pub use profile::{NameSet, ReferenceProfile};
pub use ranker::{rank, Blend, CandidatePool, RankedBook};

#[derive(Debug)]
pub enum Recommendation {
	/// Best matches for the user's profile, best first
	Ranked(Vec<RankedBook>),
	/// Not enough reviews; ask for a favorite title
	NeedsFavorite,
	/// The one pick of the favorite-title flow
	Single(RankedBook),
	/// The favorite title matched nothing in the catalog
	SeedNotFound,
	/// The seed was found but nothing else could be recommended
	NoCandidates,
}

impl Recommendation {
	pub fn books(&self) -> &[RankedBook] {
		match self {
			Recommendation::Ranked(books) => books,
			Recommendation::Single(book) => std::slice::from_ref(book),
			_ => &[],
		}
	}
}

/// Ranked flow for `user`
pub fn recommend<C, S>(catalog: &C, store: &S, user: &str) -> Result<Recommendation>
where
	C: Catalog + ?Sized,
	S: ReviewStore + ?Sized,
{
	let reviews = store.reviews_by_user(user).context("Failed to load review history")?;

	let Some(profile) = ReferenceProfile::build(catalog, &reviews) else {
		ui::debug(&format!("{} has {} reviews, falling back", user, reviews.len()));
		return Ok(Recommendation::NeedsFavorite);
	};

	let query = profile.query_term().to_string();
	ui::debug(&format!("Candidate query: \"{}\"", query));

	let hits = catalog
		.search(&query, CANDIDATE_PAGE_SIZE)
		.with_context(|| format!("Failed to fetch candidates for \"{}\"", query))?;

	let pool = CandidatePool::dedup(&profile, hits);
	ui::debug(&format!("{} candidates after dedup", pool.len()));

	Ok(Recommendation::Ranked(rank(&profile, pool, Blend::Composite, RANKED_LIMIT)))
}

/// Favorite-title flow: seed from the first title hit, one recommendation
pub fn recommend_from_favorite<C>(catalog: &C, favorite: &str) -> Result<Recommendation>
where
	C: Catalog + ?Sized,
{
	let favorite = favorite.trim();
	if favorite.is_empty() {
		return Ok(Recommendation::SeedNotFound);
	}

	let seed = catalog
		.search(&format!("intitle:{}", favorite), 1)
		.with_context(|| format!("Failed to look up \"{}\"", favorite))?
		.into_iter()
		.next();

	let Some(seed) = seed else {
		return Ok(Recommendation::SeedNotFound);
	};
	ui::debug(&format!("Seed: {} ({})", seed.title, seed.id));

	let hits = catalog
		.search(&seed.title, FAVORITE_PAGE_SIZE)
		.with_context(|| format!("Failed to fetch candidates for \"{}\"", seed.title))?;

	let pool = CandidatePool::excluding_seed(&seed, hits);
	let profile = ReferenceProfile::from_seed(seed);

	match rank(&profile, pool, Blend::SimilarityOnly, 1).into_iter().next() {
		Some(best) => Ok(Recommendation::Single(best)),
		None => Ok(Recommendation::NoCandidates),
	}
}
