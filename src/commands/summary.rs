//! Summary command - one day's intake against the effective requirement

use anyhow::Result;
use chrono::Local;

use crate::config::{self, TRACKED_NUTRIENTS};
use crate::core::{IntakeEntry, NutrientKeySet};
use crate::engine::Engine;
use crate::error::EngineError;
use crate::logger::{self, log, Level};
use crate::storage::{self, ProfileStore};

pub fn run(user_id: &str, date: Option<&str>) -> Result<()> {
	let catalog = storage::catalog::load(&config::catalog_path())?;
	let thresholds = storage::thresholds::load(&config::thresholds_path())?;
	let profiles = ProfileStore::load(&config::profiles_path())?;
	let meal_log = storage::meals::load(&config::meal_log_path())?;

	let profile = match profiles.require(user_id) {
		Ok(p) => p,
		Err(EngineError::UnknownUser(id)) => {
			log(Level::Error, &format!("User '{}' not found", id));
			std::process::exit(1);
		}
		Err(e) => return Err(e.into()),
	};

	let today = Local::now().format("%Y-%m-%d").to_string();
	let date = date.unwrap_or(&today);

	let entries: Vec<IntakeEntry> = storage::meals::for_user_on(&meal_log, user_id, date)
		.map(|r| r.to_intake_entry())
		.collect();

	if entries.is_empty() {
		log(Level::Info, &format!("No meals logged for {} on {}", user_id, date));
		return Ok(());
	}

	log(Level::Info, &format!("{} meals logged on {}", entries.len(), date));

	let keys = NutrientKeySet::new(TRACKED_NUTRIENTS.iter().copied());
	let engine = Engine::new(&catalog, &thresholds, keys);
	let summary = engine.daily_summary(profile, &entries)?;

	logger::header(&format!("Intake for {} on {}", user_id, date));
	for ((name, consumed), pct) in summary
		.intake
		.named(engine.keys())
		.zip(summary.coverage_pct.values().iter())
	{
		logger::nutrient_row(name, consumed, Some(*pct));
	}
	println!();

	Ok(())
}
