//! Food catalog: rows, lookup indices, region filtering

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::REGION_WILDCARD;

/// One food item: identity, region tag, and nutrient content per reference
/// portion (100 g). Unknown JSON fields land in the flattened nutrient map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRow {
	pub food_id: u32,
	pub food_name: String,
	pub region: String,
	#[serde(flatten)]
	pub nutrients: HashMap<String, f64>,
}

impl FoodRow {
	/// True when this row serves the given user region (exact match or the
	/// catalog-wide wildcard), compared case-insensitively.
	pub fn serves_region(&self, region: &str) -> bool {
		let row_region = self.region.to_lowercase();
		row_region == region.to_lowercase() || row_region == REGION_WILDCARD
	}
}

/// Read-only food catalog with id and name indices.
///
/// Built once at process start; request handlers only ever read it, so any
/// number of concurrent readers need no coordination.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
	rows: Vec<FoodRow>,
	by_id: HashMap<u32, usize>,
	by_name: HashMap<String, usize>,
}

impl FoodCatalog {
	pub fn from_rows(rows: Vec<FoodRow>) -> Self {
		let mut by_id = HashMap::with_capacity(rows.len());
		let mut by_name = HashMap::with_capacity(rows.len());
		for (idx, row) in rows.iter().enumerate() {
			by_id.entry(row.food_id).or_insert(idx);
			by_name.entry(row.food_name.to_lowercase()).or_insert(idx);
		}
		Self { rows, by_id, by_name }
	}

	pub fn rows(&self) -> &[FoodRow] {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn by_id(&self, food_id: u32) -> Option<&FoodRow> {
		self.by_id.get(&food_id).map(|&idx| &self.rows[idx])
	}

	/// Case-insensitive name lookup.
	pub fn by_name(&self, name: &str) -> Option<&FoodRow> {
		self.by_name.get(&name.to_lowercase()).map(|&idx| &self.rows[idx])
	}
}
