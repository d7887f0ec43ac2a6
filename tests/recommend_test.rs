// Recommendation flows against an in-process catalog

use anyhow::{anyhow, Result};
use chrono::{Duration, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use shelf::catalog::Catalog;
use shelf::core::{Book, Rating, Review};
use shelf::recommend::{
	rank, recommend, recommend_from_favorite, Blend, CandidatePool, Recommendation, ReferenceProfile,
};
use shelf::storage::ReviewLog;
use shelf::text::{cosine_similarity, vectorize};

#[derive(Default)]
struct StubCatalog {
	books: HashMap<String, Book>,
	results: HashMap<String, Vec<Book>>,
	broken: HashSet<String>,
	queries: Mutex<Vec<String>>,
}

impl StubCatalog {
	fn with_book(mut self, book: Book) -> Self {
		self.books.insert(book.id.clone(), book);
		self
	}

	fn with_results(mut self, query: &str, books: Vec<Book>) -> Self {
		self.results.insert(query.to_string(), books);
		self
	}

	fn broken(mut self, id: &str) -> Self {
		self.broken.insert(id.to_string());
		self
	}

	fn queries(&self) -> Vec<String> {
		self.queries.lock().unwrap().clone()
	}
}

impl Catalog for StubCatalog {
	fn search(&self, query: &str, max_results: usize) -> Result<Vec<Book>> {
		self.queries.lock().unwrap().push(query.to_string());
		if self.broken.contains(query) {
			return Err(anyhow!("search for {} timed out", query));
		}
		let mut hits = self.results.get(query).cloned().unwrap_or_default();
		hits.truncate(max_results);
		Ok(hits)
	}

	fn lookup(&self, id: &str) -> Result<Option<Book>> {
		if self.broken.contains(id) {
			return Err(anyhow!("lookup for {} timed out", id));
		}
		Ok(self.books.get(id).cloned())
	}
}

fn book(id: &str, title: &str, description: &str, authors: &[&str], categories: &[&str]) -> Book {
	Book {
		id: id.to_string(),
		title: title.to_string(),
		description: description.to_string(),
		authors: authors.iter().map(|s| s.to_string()).collect(),
		categories: categories.iter().map(|s| s.to_string()).collect(),
		thumbnail: None,
	}
}

fn history(user: &str, entries: &[(&str, f32)]) -> ReviewLog {
	let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
	let mut log = ReviewLog::new();
	for (i, (book_id, rating)) in entries.iter().enumerate() {
		let at = start + Duration::days(i as i64);
		let review = Review::new(user, book_id, Rating::new(*rating).unwrap(), "worth it", at);
		log.insert(review).unwrap();
	}
	log
}

fn fiction_catalog() -> StubCatalog {
	StubCatalog::default()
		.with_book(book("r1", "The Sea", "a novel about the sea and grief", &["John Banville"], &["Fiction"]))
		.with_book(book("r2", "Atonement", "a novel about guilt and war", &["Ian McEwan"], &["Fiction"]))
		.with_book(book("r3", "Cookbook", "recipes", &["Chef"], &["Cooking"]))
		.with_results(
			"fiction",
			vec![
				book("c1", "The Gathering", "a novel about grief and family", &["Anne Enright"], &["Fiction"]),
				book("r1", "The Sea", "a novel about the sea and grief", &["John Banville"], &["Fiction"]),
				book("c2", "Saturday", "a day in london", &["Ian McEwan"], &["Fiction"]),
				book("c3", "the gathering", "duplicate title", &["Someone"], &["Fiction"]),
				book("c4", "Gardening", "plants and soil", &["Gardener"], &["Home"]),
				book("c5", "", "untitled", &[], &[]),
			],
		)
}

#[test]
fn ranks_candidates_from_top_two_reviews() {
	let catalog = fiction_catalog();
	let store = history("ana", &[("r3", 2.0), ("r1", 5.0), ("r2", 4.5)]);

	let outcome = recommend(&catalog, &store, "ana").unwrap();
	let Recommendation::Ranked(ranked) = outcome else {
		panic!("expected ranked recommendations");
	};

	assert_eq!(catalog.queries(), vec!["fiction"]);
	assert!(ranked.len() <= 5);

	let ids: Vec<&str> = ranked.iter().map(|r| r.book.id.as_str()).collect();
	assert_eq!(ids.len(), 3);
	assert!(!ids.contains(&"r1"), "reference books are excluded");
	assert!(!ids.contains(&"c3"), "duplicate titles are dropped");
	assert!(!ids.contains(&"c5"), "blank titles are dropped");

	for pair in ranked.windows(2) {
		assert!(pair[0].score >= pair[1].score);
	}

	// Saturday shares author and genre, so it must lead
	assert_eq!(ids[0], "c2");
	assert!(ranked[0].author_match && ranked[0].category_match);
	assert_eq!(ids[2], "c4");
}

#[test]
fn shared_category_adds_a_quarter() {
	let catalog = fiction_catalog();
	let store = history("ana", &[("r1", 5.0), ("r2", 4.5)]);

	let Recommendation::Ranked(ranked) = recommend(&catalog, &store, "ana").unwrap() else {
		panic!("expected ranked recommendations");
	};

	let gathering = ranked.iter().find(|r| r.book.id == "c1").unwrap();
	assert!(gathering.category_match);
	assert!(!gathering.author_match);

	let profile = ReferenceProfile::from_books(vec![
		catalog.lookup("r1").unwrap().unwrap(),
		catalog.lookup("r2").unwrap().unwrap(),
	]);
	let (_, vectors) = vectorize(&[profile.text.clone(), gathering.book.document_text()]);
	let similarity = cosine_similarity(vectors[0].as_slice(), vectors[1].as_slice());

	assert!((gathering.score - (0.5 * similarity + 0.25)).abs() < 1e-5);
}

#[test]
fn short_history_needs_a_favorite() {
	let catalog = fiction_catalog();
	let store = history("ben", &[("r1", 5.0)]);

	let outcome = recommend(&catalog, &store, "ben").unwrap();

	assert!(matches!(outcome, Recommendation::NeedsFavorite));
	assert!(outcome.books().is_empty());
	assert!(catalog.queries().is_empty());
}

#[test]
fn favorite_title_yields_one_pick() {
	let seed = book("s1", "Dune", "desert planet spice politics", &["Frank Herbert"], &["Fiction"]);
	let catalog = StubCatalog::default()
		.with_results("intitle:dune", vec![seed.clone()])
		.with_results(
			"Dune",
			vec![
				seed.clone(),
				book("s2", "DUNE", "another edition", &[], &[]),
				book("c1", "Dune Messiah", "desert planet spice sequel", &["Frank Herbert"], &[]),
				book("c2", "Knitting", "wool needles", &[], &[]),
			],
		);

	let outcome = recommend_from_favorite(&catalog, " dune ").unwrap();

	assert_eq!(catalog.queries(), vec!["intitle:dune", "Dune"]);
	assert_eq!(outcome.books().len(), 1);
	let Recommendation::Single(pick) = outcome else {
		panic!("expected a single recommendation");
	};
	assert_eq!(pick.book.id, "c1");
}

#[test]
fn unknown_favorite_is_reported() {
	let catalog = StubCatalog::default();
	let outcome = recommend_from_favorite(&catalog, "no such book").unwrap();
	assert!(matches!(outcome, Recommendation::SeedNotFound));
}

#[test]
fn favorite_without_other_books_has_no_candidates() {
	let seed = book("s1", "Dune", "desert", &[], &[]);
	let catalog = StubCatalog::default()
		.with_results("intitle:dune", vec![seed.clone()])
		.with_results("Dune", vec![seed]);

	let outcome = recommend_from_favorite(&catalog, "dune").unwrap();
	assert!(matches!(outcome, Recommendation::NoCandidates));
}

#[test]
fn failed_lookup_degrades_instead_of_failing() {
	let catalog = fiction_catalog().broken("r2");
	let store = history("ana", &[("r1", 5.0), ("r2", 4.5)]);

	let Recommendation::Ranked(ranked) = recommend(&catalog, &store, "ana").unwrap() else {
		panic!("expected ranked recommendations");
	};

	assert!(!ranked.is_empty());
	// McEwan's metadata is missing, so Saturday no longer matches on author
	let saturday = ranked.iter().find(|r| r.book.id == "c2").unwrap();
	assert!(!saturday.author_match);
}

#[test]
fn empty_profile_falls_back_to_generic_query_without_panicking() {
	let catalog = StubCatalog::default()
		.broken("r1")
		.broken("r2")
		.with_results(
			"bestseller",
			vec![
				book("b1", "One", "first", &[], &[]),
				book("b2", "Two", "second", &[], &[]),
			],
		);
	let store = history("ana", &[("r1", 5.0), ("r2", 4.5)]);

	let Recommendation::Ranked(ranked) = recommend(&catalog, &store, "ana").unwrap() else {
		panic!("expected ranked recommendations");
	};

	assert_eq!(catalog.queries(), vec!["bestseller"]);
	assert_eq!(ranked.len(), 2);
	assert!(ranked.iter().all(|r| r.score.is_nan()));
	assert_eq!(ranked[0].book.id, "b1");
}

#[test]
fn failed_candidate_search_is_an_error() {
	let catalog = fiction_catalog().broken("fiction");
	let store = history("ana", &[("r1", 5.0), ("r2", 4.5)]);

	assert!(recommend(&catalog, &store, "ana").is_err());
}

#[test]
fn equal_scores_keep_encounter_order() {
	let profile = ReferenceProfile::from_books(vec![book("r", "Ref", "shared words", &[], &[])]);
	let hits = vec![
		book("a", "Alpha", "shared", &[], &[]),
		book("b", "Beta", "shared", &[], &[]),
		book("c", "Gamma", "shared", &[], &[]),
	];

	let ranked = rank(&profile, CandidatePool::dedup(&profile, hits), Blend::Composite, 5);
	let ids: Vec<&str> = ranked.iter().map(|r| r.book.id.as_str()).collect();
	assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn query_term_prefers_category_then_author() {
	let with_category = ReferenceProfile::from_books(vec![book("1", "T", "", &["Author A"], &["Poetry"])]);
	assert_eq!(with_category.query_term(), "poetry");

	let with_author = ReferenceProfile::from_books(vec![book("1", "T", "", &["Author A"], &[])]);
	assert_eq!(with_author.query_term(), "author a");

	let bare = ReferenceProfile::from_books(vec![book("1", "T", "", &[], &[])]);
	assert_eq!(bare.query_term(), "bestseller");
}

#[test]
fn seed_profile_uses_title_when_description_is_missing() {
	let profile = ReferenceProfile::from_seed(book("s", "Beloved", "", &[], &[]));
	assert_eq!(profile.text, "Beloved Beloved");
	assert!(profile.contains_book("s"));
}
