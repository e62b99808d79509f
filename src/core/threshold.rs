//! Threshold reference table and effective-threshold resolution
//!
//! A user's daily requirement is the element-wise maximum of their base
//! category (pregnancy stage or "default") and every active precondition's
//! override table. The merge is associative and commutative, so precondition
//! order never matters, and it always builds a fresh vector - the shared
//! reference table is never written to at request time.

use std::collections::HashMap;

use super::vector::{NutrientKeySet, NutrientVector};

/// Immutable mapping from category label (stage, precondition, "default") to
/// per-nutrient minimum daily requirements. Loaded once at process start.
#[derive(Debug, Clone, Default)]
pub struct ThresholdTable {
	categories: HashMap<String, HashMap<String, f64>>,
}

impl ThresholdTable {
	/// Build a table; category labels are matched case-insensitively.
	pub fn new(categories: HashMap<String, HashMap<String, f64>>) -> Self {
		let categories = categories
			.into_iter()
			.map(|(label, values)| (label.to_lowercase(), values))
			.collect();
		Self { categories }
	}

	pub fn category(&self, label: &str) -> Option<&HashMap<String, f64>> {
		self.categories.get(&label.to_lowercase())
	}

	pub fn len(&self) -> usize {
		self.categories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}

	/// Resolve the effective requirement for one request.
	///
	/// Starts from the base category (all zeros when the label is unknown),
	/// then folds in each active precondition via element-wise max. Unknown
	/// preconditions contribute nothing; values only ever grow as more
	/// preconditions are added.
	pub fn resolve<'a, I>(
		&self,
		base_category: &str,
		active_preconditions: I,
		keys: &NutrientKeySet,
	) -> NutrientVector
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut effective = match self.category(base_category) {
			Some(base) => keys.project(base),
			None => NutrientVector::zeros(keys.len()),
		};

		for condition in active_preconditions {
			if let Some(table) = self.category(condition) {
				effective.max_merge(&keys.project(table));
			}
		}

		effective
	}
}
