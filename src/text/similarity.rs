//! Cosine similarity and score ordering

use std::cmp::Ordering;

/// dot(a, b) / (|a| * |b|). NaN when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
	let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
	let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
	let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

	if norm_a == 0.0 || norm_b == 0.0 {
		return f32::NAN;
	}

	dot / (norm_a * norm_b)
}

/// Descending comparator for scores; NaN sorts below every number.
///
/// Pair with the stable `sort_by` so equal scores keep their input order.
pub fn rank_order(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
