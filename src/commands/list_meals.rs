//! List-meals command - show a user's logged meals

use anyhow::Result;
use colored::Colorize;

use crate::config;
use crate::logger::{self, log, Level};
use crate::storage::{self, MealRecord};

pub fn run(user_id: &str, date: Option<&str>) -> Result<()> {
	let meal_log = storage::meals::load(&config::meal_log_path())?;

	let records: Vec<&MealRecord> = match date {
		Some(date) => storage::meals::for_user_on(&meal_log, user_id, date).collect(),
		None => storage::meals::for_user(&meal_log, user_id).collect(),
	};

	if records.is_empty() {
		log(Level::Info, &format!("No meals logged for {}", user_id));
		return Ok(());
	}

	logger::header(&format!("Meals for {}", user_id));
	for record in &records {
		println!(
			"  {} {} {}",
			record.date.dimmed(),
			record.food_name.bright_white(),
			format!("{:.0}g", record.amount_grams).yellow()
		);
	}
	println!();

	log(Level::Success, &format!("{} meals logged", records.len()));
	Ok(())
}
