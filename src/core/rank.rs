//! Catalog ranking by cosine similarity against a target vector

use super::catalog::{FoodCatalog, FoodRow};
use super::vector::{NutrientKeySet, NutrientVector};
use crate::error::EngineError;

/// One ranked catalog row paired with its similarity score.
///
/// Scores live in this result structure, never in the shared catalog; the
/// ranker is a pure function over its inputs.
#[derive(Debug)]
pub struct Ranked<'a> {
	pub row: &'a FoodRow,
	pub similarity: f64,
}

/// Rank catalog rows by cosine similarity to a gap or target vector.
///
/// Rows are filtered by region first (case-insensitive exact match, or the
/// "all" wildcard); `None` skips filtering. Both the target and every row
/// vector are unit-normalized with the zero-norm epsilon guard, so an
/// all-zero target yields uniformly near-zero similarity instead of NaN and
/// the stable sort falls back to catalog order. Results are sorted descending
/// and truncated to `top_n`.
pub fn rank<'a>(
	target: &NutrientVector,
	catalog: &'a FoodCatalog,
	keys: &NutrientKeySet,
	region: Option<&str>,
	top_n: usize,
) -> Result<Vec<Ranked<'a>>, EngineError> {
	if target.len() != keys.len() {
		return Err(EngineError::KeySetMismatch {
			expected: keys.len(),
			actual: target.len(),
		});
	}

	let filtered: Vec<&FoodRow> = match region {
		Some(region) => catalog.rows().iter().filter(|r| r.serves_region(region)).collect(),
		None => catalog.rows().iter().collect(),
	};

	if filtered.is_empty() {
		return Err(EngineError::EmptyCatalog {
			region: region.unwrap_or("any").to_string(),
		});
	}

	let target_norm = target.normalized();

	let mut ranked: Vec<Ranked<'a>> = filtered
		.into_iter()
		.map(|row| {
			let row_norm = keys.project(&row.nutrients).normalized();
			Ranked { row, similarity: target_norm.dot(&row_norm) }
		})
		.collect();

	// Stable sort keeps catalog order on ties, so identical inputs always
	// produce identical output ordering.
	ranked.sort_by(|a, b| {
		b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal)
	});
	ranked.truncate(top_n);

	Ok(ranked)
}
