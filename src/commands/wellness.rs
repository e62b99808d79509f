//! Wellness command - gap ranking driven by an external health score
//!
//! The score itself comes from a model that runs elsewhere; this command only
//! turns it into a target multiplier.

use anyhow::Result;

use crate::config::{self, WELLNESS_TARGETS};
use crate::core::{gap, IntakeEntry, ThresholdTable};
use crate::engine::{fixed_targets, Engine};
use crate::error::EngineError;
use crate::logger::{self, log, Level};
use crate::storage;

pub fn run(score: f64, meals: &[IntakeEntry], top_n: usize) -> Result<()> {
	let catalog = storage::catalog::load(&config::catalog_path())?;
	// Fixed targets drive this path; the threshold file is never consulted
	let thresholds = ThresholdTable::default();

	let multiplier = gap::risk_multiplier(score);
	if multiplier > 1.0 {
		log(
			Level::Warning,
			&format!("Score {:.1} below cutoff, boosting targets by {:.0}%", score, (multiplier - 1.0) * 100.0),
		);
	} else {
		log(Level::Info, &format!("Score {:.1}, targets unchanged", score));
	}

	let (keys, targets) = fixed_targets(WELLNESS_TARGETS);
	let engine = Engine::new(&catalog, &thresholds, keys);

	let report = match engine.recommend_from_gap(&targets, meals, multiplier, None, top_n) {
		Ok(r) => r,
		Err(EngineError::EmptyCatalog { .. }) => {
			log(Level::Warning, "Food catalog is empty");
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
