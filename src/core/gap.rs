//! Shortfall and coverage computation

use super::vector::NutrientVector;
use crate::config::{COVERAGE_CAP_PCT, LOW_SCORE_MULTIPLIER, WELLNESS_SCORE_CUTOFF};
use crate::error::EngineError;

/// Per-nutrient shortfall: `max(0, threshold * multiplier - intake)`.
///
/// The multiplier is an opaque scalar supplied by the caller (see
/// [`risk_multiplier`]); values are floored at zero, so the result is never
/// negative. Fails only on a key-set length mismatch, which is a caller bug.
pub fn shortfall(
	threshold: &NutrientVector,
	intake: &NutrientVector,
	multiplier: f64,
) -> Result<NutrientVector, EngineError> {
	if threshold.len() != intake.len() {
		return Err(EngineError::KeySetMismatch {
			expected: threshold.len(),
			actual: intake.len(),
		});
	}

	let values = threshold
		.values()
		.iter()
		.zip(intake.values().iter())
		.map(|(req, got)| (req * multiplier - got).max(0.0))
		.collect();
	Ok(NutrientVector::from_values(values))
}

/// Percent of each requirement met, rounded to 2 decimals and capped at 999.
/// A zero requirement maps to 0% instead of dividing by zero.
pub fn coverage_percent(
	threshold: &NutrientVector,
	intake: &NutrientVector,
) -> Result<NutrientVector, EngineError> {
	if threshold.len() != intake.len() {
		return Err(EngineError::KeySetMismatch {
			expected: threshold.len(),
			actual: intake.len(),
		});
	}

	let values = threshold
		.values()
		.iter()
		.zip(intake.values().iter())
		.map(|(req, got)| {
			if *req == 0.0 {
				0.0
			} else {
				let pct = (got / req * 100.0 * 100.0).round() / 100.0;
				pct.min(COVERAGE_CAP_PCT)
			}
		})
		.collect();
	Ok(NutrientVector::from_values(values))
}

/// Multiplier applied to daily targets based on an externally predicted
/// wellness score: a low score raises the targets.
pub fn risk_multiplier(score: f64) -> f64 {
	if score >= WELLNESS_SCORE_CUTOFF {
		1.0
	} else {
		LOW_SCORE_MULTIPLIER
	}
}
