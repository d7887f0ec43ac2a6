//! Text similarity primitives

pub mod similarity;
pub mod vectorizer;

pub use similarity::{cosine_similarity, rank_order};
pub use vectorizer::{tokenize, vectorize, TermVector, Vocabulary};
