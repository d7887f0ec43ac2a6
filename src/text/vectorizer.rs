//! Bag-of-words vectorizer.
//!
//! Lowercases text, splits on every character that is not an ASCII letter,
//! ASCII digit or `_`, and counts raw term occurrences against a vocabulary
//! shared by the whole batch. Accented letters are separators, so "café"
//! yields "caf". Counts are left as-is: no inverse document frequency, no
//! normalization. Ranking outcomes depend on that, so keep it plain.

use std::collections::HashMap;

/// Term counts aligned to a [`Vocabulary`]
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector(Vec<f32>);

impl TermVector {
	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|&c| c == 0.0)
	}
}

/// Distinct tokens of one batch, in first-seen order
#[derive(Debug, Default)]
pub struct Vocabulary {
	terms: Vec<String>,
	index: HashMap<String, usize>,
}

impl Vocabulary {
	fn insert(&mut self, token: &str) {
		if !self.index.contains_key(token) {
			self.index.insert(token.to_string(), self.terms.len());
			self.terms.push(token.to_string());
		}
	}

	pub fn position(&self, token: &str) -> Option<usize> {
		self.index.get(token).copied()
	}

	pub fn terms(&self) -> &[String] {
		&self.terms
	}

	pub fn len(&self) -> usize {
		self.terms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Count vector for already-tokenized text
	fn count(&self, tokens: &[String]) -> TermVector {
		let mut counts = vec![0.0f32; self.terms.len()];
		for token in tokens {
			if let Some(pos) = self.position(token) {
				counts[pos] += 1.0;
			}
		}
		TermVector(counts)
	}
}

/// Lowercase and split on runs of non-word characters. Empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
		.filter(|t| !t.is_empty())
		.map(str::to_string)
		.collect()
}

/// Build one vocabulary over `texts` and a count vector per text, in input order.
pub fn vectorize<S: AsRef<str>>(texts: &[S]) -> (Vocabulary, Vec<TermVector>) {
	let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t.as_ref())).collect();

	let mut vocab = Vocabulary::default();
	for tokens in &tokenized {
		for token in tokens {
			vocab.insert(token);
		}
	}

	let vectors = tokenized.iter().map(|tokens| vocab.count(tokens)).collect();
	(vocab, vectors)
}
