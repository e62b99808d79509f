//! Gaps command - region gap ranking from a list of eaten foods

use anyhow::Result;

use crate::config::{self, DEFAULT_TARGETS};
use crate::core::ThresholdTable;
use crate::engine::{fixed_targets, Engine};
use crate::error::EngineError;
use crate::logger::{self, log, Level};
use crate::storage;

pub fn run(region: &str, foods: &[String], top_n: usize) -> Result<()> {
	let catalog = storage::catalog::load(&config::catalog_path())?;
	// Fixed targets drive this path; the threshold file is never consulted
	let thresholds = ThresholdTable::default();

	log(
		Level::Info,
		&format!("Gap ranking for region '{}' after {} foods", region, foods.len()),
	);

	let (keys, targets) = fixed_targets(DEFAULT_TARGETS);
	let engine = Engine::new(&catalog, &thresholds, keys);
	let entries = Engine::whole_portions(foods);

	let report = match engine.recommend_from_gap(&targets, &entries, 1.0, Some(region), top_n) {
		Ok(r) => r,
		Err(EngineError::EmptyCatalog { region }) => {
			log(Level::Warning, &format!("No food items found for region '{}'", region));
			return Ok(());
		}
		Err(e) => return Err(e.into()),
	};

	logger::header("Nutrient gaps");
	for (name, shortfall) in report.gaps.named(engine.keys()) {
		logger::nutrient_row(name, shortfall, None);
	}

	super::print_ranked(&report.foods);
	Ok(())
}
