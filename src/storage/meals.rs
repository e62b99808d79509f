//! Append-only meal log

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::DEFAULT_PORTION_G;
use crate::core::{FoodCatalog, IntakeEntry};

fn default_amount() -> f64 {
	DEFAULT_PORTION_G
}

/// One logged meal. Records are historical facts; nothing mutates them after
/// the append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
	pub user_id: String,
	pub food_id: u32,
	pub food_name: String,
	pub date: String,
	#[serde(default = "default_amount")]
	pub amount_grams: f64,
}

impl MealRecord {
	/// Build a record for a catalog food, defaulting the date to today.
	pub fn new(
		user_id: String,
		food_id: u32,
		food_name: String,
		date: Option<String>,
		amount_grams: f64,
	) -> Self {
		let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
		Self { user_id, food_id, food_name, date, amount_grams }
	}

	pub fn to_intake_entry(&self) -> IntakeEntry {
		IntakeEntry::by_id(self.food_id, self.amount_grams)
	}
}

/// Load the full meal log; a missing file is an empty log.
pub fn load(path: &Path) -> Result<Vec<MealRecord>> {
	if !path.exists() {
		return Ok(Vec::new());
	}
	let content = fs::read_to_string(path)
		.with_context(|| format!("Failed to read meal log: {}", path.display()))?;
	serde_json::from_str(&content)
		.with_context(|| format!("Failed to parse meal log: {}", path.display()))
}

/// Append one record and write the log back out.
pub fn append(path: &Path, record: MealRecord) -> Result<()> {
	let mut records = load(path)?;
	records.push(record);

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).context("Failed to create meal log directory")?;
	}
	let json = serde_json::to_string_pretty(&records).context("Failed to serialize meal log")?;
	fs::write(path, json).with_context(|| format!("Failed to write meal log: {}", path.display()))
}

/// All records a user has logged, in append order.
pub fn for_user<'a>(
	records: &'a [MealRecord],
	user_id: &'a str,
) -> impl Iterator<Item = &'a MealRecord> {
	records.iter().filter(move |r| r.user_id == user_id)
}

/// Records a user logged on a given date.
pub fn for_user_on<'a>(
	records: &'a [MealRecord],
	user_id: &'a str,
	date: &'a str,
) -> impl Iterator<Item = &'a MealRecord> {
	records.iter().filter(move |r| r.user_id == user_id && r.date == date)
}

/// Look up the display name for a food id, used to denormalize records the
/// way the log has always stored them.
pub fn food_name_for(catalog: &FoodCatalog, food_id: u32) -> Option<String> {
	catalog.by_id(food_id).map(|row| row.food_name.clone())
}
