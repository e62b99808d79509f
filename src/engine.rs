//! Recommendation engine
//!
//! One parameterized pipeline behind every computation path: resolve a
//! requirement vector, aggregate intake, compute the gap, rank the catalog.
//! Callers inject the nutrient key set and the requirement source, so the
//! profile, wellness, and region paths all run through the same code.
//!
//! The engine borrows its catalog and threshold table; both are loaded once
//! at startup and never written to afterwards, so the engine itself is a
//! stateless pure function of its inputs per call.

use std::collections::HashMap;

use crate::core::{
	gap, intake, rank, FoodCatalog, IntakeEntry, NutrientKeySet, NutrientVector, Ranked,
	ThresholdTable,
};
use crate::error::EngineError;
use crate::storage::UserProfile;

/// Build a key set and matching target vector from fixed (name, value) pairs.
pub fn fixed_targets(pairs: &[(&str, f64)]) -> (NutrientKeySet, NutrientVector) {
	let keys = NutrientKeySet::new(pairs.iter().map(|(name, _)| *name));
	let values = pairs.iter().map(|(_, value)| *value).collect();
	(keys, NutrientVector::from_values(values))
}

/// Daily intake summary: what was eaten, what was required, and the capped
/// percent of each requirement met.
#[derive(Debug)]
pub struct DailySummary {
	pub intake: NutrientVector,
	pub threshold: NutrientVector,
	pub coverage_pct: NutrientVector,
}

/// Gap-based recommendation: the intermediate vectors plus the ranked foods.
#[derive(Debug)]
pub struct GapReport<'a> {
	pub intake: NutrientVector,
	pub gaps: NutrientVector,
	pub foods: Vec<Ranked<'a>>,
}

pub struct Engine<'a> {
	catalog: &'a FoodCatalog,
	thresholds: &'a ThresholdTable,
	keys: NutrientKeySet,
}

impl<'a> Engine<'a> {
	pub fn new(
		catalog: &'a FoodCatalog,
		thresholds: &'a ThresholdTable,
		keys: NutrientKeySet,
	) -> Self {
		Self { catalog, thresholds, keys }
	}

	pub fn keys(&self) -> &NutrientKeySet {
		&self.keys
	}

	/// Effective requirement for a profile: stage table merged with every
	/// active precondition via element-wise max.
	pub fn effective_threshold(&self, profile: &UserProfile) -> NutrientVector {
		self.thresholds.resolve(&profile.stage, profile.active_preconditions(), &self.keys)
	}

	pub fn aggregate_intake(&self, entries: &[IntakeEntry]) -> NutrientVector {
		intake::aggregate(entries, self.catalog, &self.keys)
	}

	/// Profile recommendation: rank the user's regional catalog against their
	/// effective requirement vector.
	pub fn recommend_for_profile(
		&self,
		profile: &UserProfile,
		top_n: usize,
	) -> Result<Vec<Ranked<'a>>, EngineError> {
		let target = self.effective_threshold(profile);
		rank::rank(&target, self.catalog, &self.keys, Some(&profile.region), top_n)
	}

	/// Intake summary for one user-day. An empty entry list is fine; it
	/// reports zero intake against the full requirement.
	pub fn daily_summary(
		&self,
		profile: &UserProfile,
		entries: &[IntakeEntry],
	) -> Result<DailySummary, EngineError> {
		let threshold = self.effective_threshold(profile);
		let intake = self.aggregate_intake(entries);
		let coverage_pct = gap::coverage_percent(&threshold, &intake)?;
		Ok(DailySummary { intake, threshold, coverage_pct })
	}

	/// Gap recommendation against explicit targets, with an optional region
	/// filter and a score-derived multiplier on the targets.
	pub fn recommend_from_gap(
		&self,
		targets: &NutrientVector,
		entries: &[IntakeEntry],
		multiplier: f64,
		region: Option<&str>,
		top_n: usize,
	) -> Result<GapReport<'a>, EngineError> {
		let intake = self.aggregate_intake(entries);
		let gaps = gap::shortfall(targets, &intake, multiplier)?;
		let foods = rank::rank(&gaps, self.catalog, &self.keys, region, top_n)?;
		Ok(GapReport { intake, gaps, foods })
	}

	/// Intake entries for whole reference portions of named foods (the region
	/// gap path takes food names without amounts).
	pub fn whole_portions(names: &[String]) -> Vec<IntakeEntry> {
		names
			.iter()
			.map(|name| IntakeEntry::by_name(name.clone(), crate::config::REFERENCE_PORTION_G))
			.collect()
	}

	/// Name→value view of a vector, for callers that serialize results.
	pub fn to_table(&self, vector: &NutrientVector) -> HashMap<String, f64> {
		vector.named(&self.keys).map(|(name, value)| (name.to_string(), value)).collect()
	}
}
