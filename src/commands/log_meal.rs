//! Log-meal command - append a consumed food to the meal log

use anyhow::Result;

use crate::config;
use crate::logger::{log, Level};
use crate::storage::{self, MealRecord};

pub fn run(user_id: &str, food_id: u32, grams: f64, date: Option<String>) -> Result<()> {
	let catalog = storage::catalog::load(&config::catalog_path())?;

	// Validate the id against the catalog before recording anything.
	let Some(food_name) = storage::meals::food_name_for(&catalog, food_id) else {
		log(Level::Error, &format!("Food id {} not found in catalog", food_id));
		std::process::exit(1);
	};

	let record = MealRecord::new(user_id.to_string(), food_id, food_name.clone(), date, grams);
	let date = record.date.clone();
	storage::meals::append(&config::meal_log_path(), record)?;

	log(
		Level::Success,
		&format!("Logged {:.0}g of {} for {} on {}", grams, food_name, user_id, date),
	);
	Ok(())
}
