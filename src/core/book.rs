//! Book summaries as returned by the catalog

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
	pub id: String,
	pub title: String,
	pub description: String,
	pub authors: Vec<String>,
	pub categories: Vec<String>,
	pub thumbnail: Option<String>,
}

impl Book {
	/// Placeholder for a book whose metadata could not be fetched
	pub fn empty(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: String::new(),
			description: String::new(),
			authors: Vec::new(),
			categories: Vec::new(),
			thumbnail: None,
		}
	}

	/// Title, description, categories and authors as one scoring document
	pub fn document_text(&self) -> String {
		format!(
			"{} {} {} {}",
			self.title,
			self.description,
			self.categories.join(" "),
			self.authors.join(" ")
		)
	}

	pub fn authors_line(&self) -> String {
		if self.authors.is_empty() {
			"Unknown author".to_string()
		} else {
			self.authors.join(", ")
		}
	}

	/// Public catalog page for this book
	pub fn page_url(&self) -> String {
		format!("https://books.google.com/books?id={}", self.id)
	}
}
