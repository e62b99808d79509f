//! Recommend command - rank foods against a profile's requirements

use anyhow::Result;

use crate::config::{self, MATERNAL_NUTRIENTS};
use crate::core::NutrientKeySet;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::logger::{log, Level};
use crate::storage::{self, ProfileStore};

pub fn run(user_id: &str, top_n: usize) -> Result<()> {
	let catalog = storage::catalog::load(&config::catalog_path())?;
	let thresholds = storage::thresholds::load(&config::thresholds_path())?;
	let profiles = ProfileStore::load(&config::profiles_path())?;

	let profile = match profiles.require(user_id) {
		Ok(p) => p,
		Err(EngineError::UnknownUser(id)) => {
			log(Level::Error, &format!("User '{}' not found", id));
			std::process::exit(1);
		}
		Err(e) => return Err(e.into()),
	};

	log(
		Level::Info,
		&format!(
			"Recommending for {} (stage: {}, region: {})",
			profile.user_id, profile.stage, profile.region
		),
	);

	let keys = NutrientKeySet::new(MATERNAL_NUTRIENTS.iter().copied());
	let engine = Engine::new(&catalog, &thresholds, keys);

	let ranked = match engine.recommend_for_profile(profile, top_n) {
		Ok(r) => r,
		Err(EngineError::EmptyCatalog { region }) => {
			log(Level::Warning, &format!("No food items found for region '{}'", region));
			return Ok(());
		}
		Err(e) => return Err(e.into()),
	};

	log(Level::Success, &format!("Found {} matches", ranked.len()));
	super::print_ranked(&ranked);
	Ok(())
}
