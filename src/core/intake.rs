//! Intake aggregation from logged meals

use super::catalog::FoodCatalog;
use super::vector::{NutrientKeySet, NutrientVector};
use crate::config::REFERENCE_PORTION_G;

/// Reference to a catalog row, by id or case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodRef {
	Id(u32),
	Name(String),
}

/// One consumed food: what was eaten and how much of it.
#[derive(Debug, Clone)]
pub struct IntakeEntry {
	pub food: FoodRef,
	pub amount_grams: f64,
}

impl IntakeEntry {
	pub fn by_name(name: impl Into<String>, amount_grams: f64) -> Self {
		Self { food: FoodRef::Name(name.into()), amount_grams }
	}

	pub fn by_id(food_id: u32, amount_grams: f64) -> Self {
		Self { food: FoodRef::Id(food_id), amount_grams }
	}
}

/// Sum nutrient contributions across logged entries.
///
/// Each matched entry contributes `catalog_value * grams / 100` per nutrient.
/// Entries with no catalog match are skipped - an unmatched food degrades to
/// zero contribution rather than aborting the whole aggregation.
pub fn aggregate(
	entries: &[IntakeEntry],
	catalog: &FoodCatalog,
	keys: &NutrientKeySet,
) -> NutrientVector {
	let mut total = NutrientVector::zeros(keys.len());

	for entry in entries {
		let row = match &entry.food {
			FoodRef::Id(id) => catalog.by_id(*id),
			FoodRef::Name(name) => catalog.by_name(name),
		};
		let Some(row) = row else {
			crate::logger::debug(&format!("No catalog match for {:?}, skipping", entry.food));
			continue;
		};

		let portion = entry.amount_grams / REFERENCE_PORTION_G;
		total.add_scaled(&keys.project(&row.nutrients), portion);
	}

	total
}
