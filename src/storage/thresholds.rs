//! Threshold reference table loading

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::ThresholdTable;

#[derive(Debug, Deserialize)]
struct ThresholdFile {
	nutrient_thresholds: HashMap<String, HashMap<String, f64>>,
}

/// Load the threshold table from its JSON envelope:
/// `{ "nutrient_thresholds": { category: { nutrient: value } } }`.
pub fn load(path: &Path) -> Result<ThresholdTable> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("Failed to read threshold table: {}", path.display()))?;
	let file: ThresholdFile = serde_json::from_str(&content)
		.with_context(|| format!("Failed to parse threshold table: {}", path.display()))?;

	crate::logger::debug(&format!(
		"Loaded {} threshold categories from {}",
		file.nutrient_thresholds.len(),
		path.display()
	));
	Ok(ThresholdTable::new(file.nutrient_thresholds))
}
