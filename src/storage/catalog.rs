//! Food catalog loading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::{FoodCatalog, FoodRow};

/// Load the food catalog from a JSON array of rows.
///
/// Done once at startup; the resulting catalog is read-only for the life of
/// the process.
pub fn load(path: &Path) -> Result<FoodCatalog> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("Failed to read food catalog: {}", path.display()))?;
	let rows: Vec<FoodRow> = serde_json::from_str(&content)
		.with_context(|| format!("Failed to parse food catalog: {}", path.display()))?;

	crate::logger::debug(&format!("Loaded {} catalog rows from {}", rows.len(), path.display()));
	Ok(FoodCatalog::from_rows(rows))
}
