//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_CATALOG_URL: OnceLock<String> = OnceLock::new();
static CUSTOM_USER: OnceLock<String> = OnceLock::new();

// === Catalog ===
pub const CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const SEARCH_PAGE_SIZE: usize = 10;
pub const TRENDING_QUERIES: &[&str] = &["call me by your name", "the bell jar", "intermezzo"];

// === Storage ===
pub const DATA_DIR: &str = ".shelf";
pub const REVIEWS_FILE: &str = "reviews.msgpack";

// === Recommendation ===
pub const PROFILE_SIZE: usize = 2;
pub const CANDIDATE_PAGE_SIZE: usize = 30;
pub const FAVORITE_PAGE_SIZE: usize = 20;
pub const RANKED_LIMIT: usize = 5;
pub const FALLBACK_QUERY: &str = "bestseller";

pub const SIMILARITY_WEIGHT: f32 = 0.5;
pub const AUTHOR_WEIGHT: f32 = 0.25;
pub const CATEGORY_WEIGHT: f32 = 0.25;

pub fn set_data_dir(path: PathBuf) {
	let _ = CUSTOM_DATA_DIR.set(path);
}

pub fn set_catalog_url(url: String) {
	let _ = CUSTOM_CATALOG_URL.set(url);
}

pub fn set_user(user: String) {
	let _ = CUSTOM_USER.set(user);
}

/// Review store directory (--data-dir, SHELF_DATA_DIR, or ./.shelf)
pub fn data_dir() -> PathBuf {
	if let Some(custom) = CUSTOM_DATA_DIR.get() {
		crate::ui::debug(&format!("Using custom data dir: {}", custom.display()));
		return custom.clone();
	}

	if let Ok(env_path) = std::env::var("SHELF_DATA_DIR") {
		crate::ui::debug(&format!("Using SHELF_DATA_DIR: {}", env_path));
		return PathBuf::from(env_path);
	}

	PathBuf::from(DATA_DIR)
}

pub fn reviews_path() -> PathBuf {
	data_dir().join(REVIEWS_FILE)
}

pub fn catalog_url() -> String {
	if let Some(custom) = CUSTOM_CATALOG_URL.get() {
		return custom.clone();
	}

	if let Ok(url) = std::env::var("SHELF_CATALOG_URL") {
		crate::ui::debug(&format!("Using SHELF_CATALOG_URL: {}", url));
		return url;
	}

	CATALOG_URL.to_string()
}

/// Acting user for this invocation (--user or SHELF_USER)
pub fn user() -> Option<String> {
	if let Some(custom) = CUSTOM_USER.get() {
		return Some(custom.clone());
	}

	std::env::var("SHELF_USER")
		.ok()
		.map(|u| u.trim().to_string())
		.filter(|u| !u.is_empty())
}
