// Core engine tests: threshold merging, gap computation, catalog ranking

use std::collections::HashMap;

use nutrigap::core::{gap, intake, rank, FoodCatalog, FoodRow, IntakeEntry, NutrientKeySet,
	NutrientVector, ThresholdTable};
use nutrigap::engine::{fixed_targets, Engine};
use nutrigap::error::EngineError;
use nutrigap::storage::{ProfileStore, UserProfile};

fn row(food_id: u32, food_name: &str, region: &str, nutrients: &[(&str, f64)]) -> FoodRow {
	FoodRow {
		food_id,
		food_name: food_name.to_string(),
		region: region.to_string(),
		nutrients: nutrients.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
	}
}

fn table(categories: &[(&str, &[(&str, f64)])]) -> ThresholdTable {
	let map: HashMap<String, HashMap<String, f64>> = categories
		.iter()
		.map(|(label, values)| {
			(
				label.to_string(),
				values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
			)
		})
		.collect();
	ThresholdTable::new(map)
}

fn profile(user_id: &str, region: &str, stage: &str, preconditions: &[(&str, bool)]) -> UserProfile {
	UserProfile {
		user_id: user_id.to_string(),
		region: region.to_string(),
		stage: stage.to_string(),
		preconditions: preconditions.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
	}
}

#[test]
fn test_threshold_merge_takes_element_wise_max() {
	// Worked example: base {iron: 27, folate: 600}, anemia override {iron: 45}
	let thresholds = table(&[
		("trimester1", &[("iron", 27.0), ("folate", 600.0)]),
		("anemia", &[("iron", 45.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "folate"]);

	let effective = thresholds.resolve("trimester1", ["anemia"], &keys);

	assert_eq!(effective.values(), &[45.0, 600.0]);
}

#[test]
fn test_threshold_merge_is_monotonic() {
	let thresholds = table(&[
		("default", &[("iron", 10.0), ("calcium", 800.0)]),
		("anemia", &[("iron", 45.0)]),
		("osteoporosis", &[("calcium", 1200.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "calcium"]);

	let base = thresholds.resolve("default", std::iter::empty::<&str>(), &keys);
	let one = thresholds.resolve("default", ["anemia"], &keys);
	let both = thresholds.resolve("default", ["anemia", "osteoporosis"], &keys);

	for i in 0..keys.len() {
		assert!(one.get(i) >= base.get(i));
		assert!(both.get(i) >= one.get(i));
	}
	assert_eq!(both.values(), &[45.0, 1200.0]);
}

#[test]
fn test_threshold_merge_order_does_not_matter() {
	let thresholds = table(&[
		("default", &[("iron", 10.0)]),
		("a", &[("iron", 20.0), ("folate", 100.0)]),
		("b", &[("iron", 30.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "folate"]);

	let ab = thresholds.resolve("default", ["a", "b"], &keys);
	let ba = thresholds.resolve("default", ["b", "a"], &keys);

	assert_eq!(ab, ba);
}

#[test]
fn test_threshold_unknown_base_is_all_zeros() {
	let thresholds = table(&[("anemia", &[("iron", 45.0)])]);
	let keys = NutrientKeySet::new(["iron", "folate"]);

	let effective = thresholds.resolve("no-such-stage", std::iter::empty::<&str>(), &keys);
	assert_eq!(effective.values(), &[0.0, 0.0]);

	// Unknown preconditions contribute nothing instead of failing
	let effective = thresholds.resolve("anemia", ["no-such-condition"], &keys);
	assert_eq!(effective.values(), &[45.0, 0.0]);
}

#[test]
fn test_threshold_resolve_does_not_mutate_table() {
	let thresholds = table(&[
		("default", &[("iron", 10.0)]),
		("anemia", &[("iron", 45.0)]),
	]);
	let keys = NutrientKeySet::new(["iron"]);

	let first = thresholds.resolve("default", ["anemia"], &keys);
	// A second resolve without the precondition must see the original base
	let second = thresholds.resolve("default", std::iter::empty::<&str>(), &keys);

	assert_eq!(first.values(), &[45.0]);
	assert_eq!(second.values(), &[10.0]);
}

#[test]
fn test_intake_scales_by_consumed_grams() {
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "Spinach", "All", &[("iron", 2.7), ("folate", 194.0)]),
		row(2, "Tomato", "All", &[("iron", 0.3), ("folate", 15.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "folate"]);

	let entries = vec![
		IntakeEntry::by_name("spinach", 200.0), // case-insensitive match
		IntakeEntry::by_id(2, 50.0),
	];
	let total = intake::aggregate(&entries, &catalog, &keys);

	assert!((total.get(0) - (2.7 * 2.0 + 0.3 * 0.5)).abs() < 1e-9);
	assert!((total.get(1) - (194.0 * 2.0 + 15.0 * 0.5)).abs() < 1e-9);
}

#[test]
fn test_intake_skips_unmatched_entries() {
	let catalog = FoodCatalog::from_rows(vec![row(1, "Spinach", "All", &[("iron", 2.7)])]);
	let keys = NutrientKeySet::new(["iron"]);

	let entries = vec![
		IntakeEntry::by_name("NotInCatalog", 100.0),
		IntakeEntry::by_id(999, 100.0),
		IntakeEntry::by_name("Spinach", 100.0),
	];
	let total = intake::aggregate(&entries, &catalog, &keys);

	// Unmatched entries contribute zero; aggregation never aborts
	assert!((total.get(0) - 2.7).abs() < 1e-9);
}

#[test]
fn test_gap_is_floored_at_zero() {
	// Worked example: intake meets the effective threshold exactly
	let threshold = NutrientVector::from_values(vec![45.0, 600.0]);
	let met = NutrientVector::from_values(vec![45.0, 600.0]);

	let gaps = gap::shortfall(&threshold, &met, 1.0).unwrap();
	assert_eq!(gaps.values(), &[0.0, 0.0]);

	let over = NutrientVector::from_values(vec![90.0, 1200.0]);
	let gaps = gap::shortfall(&threshold, &over, 1.0).unwrap();
	assert!(gaps.values().iter().all(|&v| v == 0.0));
}

#[test]
fn test_gap_applies_risk_multiplier() {
	let threshold = NutrientVector::from_values(vec![100.0]);
	let intake = NutrientVector::from_values(vec![100.0]);

	// Exactly met at 1.0, short by 20 at 1.2
	assert_eq!(gap::shortfall(&threshold, &intake, 1.0).unwrap().values(), &[0.0]);
	let boosted = gap::shortfall(&threshold, &intake, 1.2).unwrap();
	assert!((boosted.get(0) - 20.0).abs() < 1e-9);
}

#[test]
fn test_risk_multiplier_cutoff() {
	assert_eq!(gap::risk_multiplier(80.0), 1.0);
	assert_eq!(gap::risk_multiplier(95.5), 1.0);
	assert_eq!(gap::risk_multiplier(79.9), 1.2);
}

#[test]
fn test_gap_rejects_mismatched_key_sets() {
	let threshold = NutrientVector::from_values(vec![1.0, 2.0]);
	let intake = NutrientVector::from_values(vec![1.0]);

	let err = gap::shortfall(&threshold, &intake, 1.0).unwrap_err();
	assert_eq!(err, EngineError::KeySetMismatch { expected: 2, actual: 1 });
}

#[test]
fn test_coverage_is_capped_and_zero_guarded() {
	let threshold = NutrientVector::from_values(vec![10.0, 0.0, 100.0]);
	let intake = NutrientVector::from_values(vec![500.0, 50.0, 33.333]);

	let pct = gap::coverage_percent(&threshold, &intake).unwrap();

	// 5000% capped to 999; zero requirement maps to 0, never divides
	assert_eq!(pct.get(0), 999.0);
	assert_eq!(pct.get(1), 0.0);
	assert!((pct.get(2) - 33.33).abs() < 1e-9);
}

#[test]
#[should_panic(expected = "different key sets")]
fn test_max_merge_rejects_mismatched_lengths() {
	let mut a = NutrientVector::from_values(vec![1.0, 2.0]);
	let b = NutrientVector::from_values(vec![1.0]);
	a.max_merge(&b);
}

#[test]
#[should_panic(expected = "different key sets")]
fn test_add_scaled_rejects_mismatched_lengths() {
	let mut a = NutrientVector::from_values(vec![1.0]);
	let b = NutrientVector::from_values(vec![1.0, 2.0]);
	a.add_scaled(&b, 1.0);
}

#[test]
fn test_region_match_ignores_case() {
	let local = row(1, "Local", "TERAI", &[("iron", 1.0)]);
	let anywhere = row(2, "Anywhere", "ALL", &[("iron", 1.0)]);

	assert!(local.serves_region("terai"));
	assert!(local.serves_region("Terai"));
	assert!(!local.serves_region("himal"));
	assert!(anywhere.serves_region("himal"));
}

#[test]
fn test_normalization_is_idempotent_on_unit_vectors() {
	let v = NutrientVector::from_values(vec![3.0, 4.0]);
	let unit = v.normalized();
	let again = unit.normalized();

	assert!((unit.norm() - 1.0).abs() < 1e-12);
	for (a, b) in unit.values().iter().zip(again.values().iter()) {
		assert!((a - b).abs() < 1e-12);
	}
}

#[test]
fn test_zero_vector_normalization_is_finite() {
	let zero = NutrientVector::from_values(vec![0.0, 0.0, 0.0]);
	let normalized = zero.normalized();

	assert!(normalized.values().iter().all(|v| v.is_finite()));
	assert!(normalized.norm() < 1.0);
}

#[test]
fn test_rank_region_filter_and_ordering() {
	// Worked example: region "A" row [1,0], wildcard row [0,1], gap [1,0]
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "Exact", "A", &[("iron", 1.0), ("folate", 0.0)]),
		row(2, "Anywhere", "All", &[("iron", 0.0), ("folate", 1.0)]),
		row(3, "Elsewhere", "B", &[("iron", 1.0), ("folate", 0.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "folate"]);
	let target = NutrientVector::from_values(vec![1.0, 0.0]);

	let ranked = rank::rank(&target, &catalog, &keys, Some("a"), 10).unwrap();

	// Exact match and wildcard retained, other region dropped
	assert_eq!(ranked.len(), 2);
	assert_eq!(ranked[0].row.food_name, "Exact");
	assert!((ranked[0].similarity - 1.0).abs() < 1e-9);
	assert_eq!(ranked[1].row.food_name, "Anywhere");
	assert!(ranked[1].similarity.abs() < 1e-9);
}

#[test]
fn test_rank_sorted_descending_and_truncated() {
	let rows: Vec<FoodRow> = (0..20)
		.map(|i| {
			row(
				i,
				&format!("food{}", i),
				"All",
				&[("iron", f64::from(i)), ("folate", f64::from(20 - i))],
			)
		})
		.collect();
	let catalog = FoodCatalog::from_rows(rows);
	let keys = NutrientKeySet::new(["iron", "folate"]);
	let target = NutrientVector::from_values(vec![1.0, 0.0]);

	let ranked = rank::rank(&target, &catalog, &keys, Some("anything"), 5).unwrap();

	assert_eq!(ranked.len(), 5);
	for pair in ranked.windows(2) {
		assert!(pair[0].similarity >= pair[1].similarity);
	}
}

#[test]
fn test_rank_empty_region_is_typed_error() {
	let catalog = FoodCatalog::from_rows(vec![row(1, "Local", "B", &[("iron", 1.0)])]);
	let keys = NutrientKeySet::new(["iron"]);
	let target = NutrientVector::from_values(vec![1.0]);

	let err = rank::rank(&target, &catalog, &keys, Some("A"), 5).unwrap_err();
	assert_eq!(err, EngineError::EmptyCatalog { region: "A".to_string() });
}

#[test]
fn test_rank_zero_target_keeps_catalog_order() {
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "First", "All", &[("iron", 1.0)]),
		row(2, "Second", "All", &[("iron", 2.0)]),
		row(3, "Third", "All", &[("iron", 3.0)]),
	]);
	let keys = NutrientKeySet::new(["iron"]);
	let zero = NutrientVector::from_values(vec![0.0]);

	let ranked = rank::rank(&zero, &catalog, &keys, None, 10).unwrap();

	// Every similarity is near-zero and finite; stable sort keeps load order
	assert_eq!(ranked.len(), 3);
	for r in &ranked {
		assert!(r.similarity.is_finite());
		assert!(r.similarity.abs() < 1e-6);
	}
	assert_eq!(ranked[0].row.food_name, "First");
	assert_eq!(ranked[2].row.food_name, "Third");
}

#[test]
fn test_rank_is_deterministic() {
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "Twin A", "All", &[("iron", 5.0), ("folate", 5.0)]),
		row(2, "Twin B", "All", &[("iron", 5.0), ("folate", 5.0)]),
		row(3, "Other", "All", &[("iron", 1.0), ("folate", 9.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "folate"]);
	let target = NutrientVector::from_values(vec![1.0, 1.0]);

	let first: Vec<u32> =
		rank::rank(&target, &catalog, &keys, None, 10).unwrap().iter().map(|r| r.row.food_id).collect();
	let second: Vec<u32> =
		rank::rank(&target, &catalog, &keys, None, 10).unwrap().iter().map(|r| r.row.food_id).collect();

	assert_eq!(first, second);
	// Equal-similarity twins stay in catalog order
	assert_eq!(first[0], 1);
	assert_eq!(first[1], 2);
}

#[test]
fn test_rank_rejects_mismatched_target() {
	let catalog = FoodCatalog::from_rows(vec![row(1, "Food", "All", &[("iron", 1.0)])]);
	let keys = NutrientKeySet::new(["iron", "folate"]);
	let target = NutrientVector::from_values(vec![1.0]);

	let err = rank::rank(&target, &catalog, &keys, None, 5).unwrap_err();
	assert_eq!(err, EngineError::KeySetMismatch { expected: 2, actual: 1 });
}

#[test]
fn test_rank_does_not_mutate_catalog() {
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "Food", "All", &[("iron", 3.0), ("folate", 4.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "folate"]);
	let target = NutrientVector::from_values(vec![1.0, 1.0]);

	let before: Vec<f64> = {
		let n = &catalog.rows()[0].nutrients;
		vec![n["iron"], n["folate"]]
	};
	let _ = rank::rank(&target, &catalog, &keys, None, 5).unwrap();
	let after: Vec<f64> = {
		let n = &catalog.rows()[0].nutrients;
		vec![n["iron"], n["folate"]]
	};

	assert_eq!(before, after);
	assert!(!catalog.rows()[0].nutrients.contains_key("similarity"));
}

#[test]
fn test_engine_profile_recommendation() {
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "Lentils", "Terai", &[("iron", 7.5), ("folate", 181.0)]),
		row(2, "Rice", "All", &[("iron", 0.2), ("folate", 8.0)]),
		row(3, "Yak Cheese", "Himal", &[("iron", 0.2), ("folate", 20.0)]),
	]);
	let thresholds = table(&[
		("trimester2", &[("iron", 27.0), ("folate", 600.0)]),
		("anemia", &[("iron", 45.0)]),
	]);
	let keys = NutrientKeySet::new(["iron", "folate"]);
	let engine = Engine::new(&catalog, &thresholds, keys);

	let user = profile("user_001", "Terai", "trimester2", &[("anemia", true), ("diabetes", false)]);
	let ranked = engine.recommend_for_profile(&user, 5).unwrap();

	// Himal-only row filtered out, others ranked
	assert_eq!(ranked.len(), 2);
	assert!(ranked.iter().all(|r| r.row.region != "Himal"));
	for pair in ranked.windows(2) {
		assert!(pair[0].similarity >= pair[1].similarity);
	}
}

#[test]
fn test_engine_daily_summary() {
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "Spinach", "All", &[("iron", 2.7), ("folate", 194.0)]),
	]);
	let thresholds = table(&[("trimester1", &[("iron", 27.0), ("folate", 600.0)])]);
	let keys = NutrientKeySet::new(["iron", "folate"]);
	let engine = Engine::new(&catalog, &thresholds, keys);

	let user = profile("user_001", "Terai", "trimester1", &[]);
	let entries = vec![IntakeEntry::by_id(1, 100.0)];
	let summary = engine.daily_summary(&user, &entries).unwrap();

	assert!((summary.intake.get(0) - 2.7).abs() < 1e-9);
	assert_eq!(summary.threshold.values(), &[27.0, 600.0]);
	assert!((summary.coverage_pct.get(0) - 10.0).abs() < 1e-9);
	assert!((summary.coverage_pct.get(1) - 32.33).abs() < 1e-9);
}

#[test]
fn test_engine_gap_report_pipeline() {
	let catalog = FoodCatalog::from_rows(vec![
		row(1, "Spinach", "All", &[("vitaminC", 28.0), ("iron", 2.7)]),
		row(2, "Butter", "All", &[("vitaminC", 0.0), ("iron", 0.0)]),
	]);
	let thresholds = ThresholdTable::default();
	let (keys, targets) = fixed_targets(&[("vitaminC", 90.0), ("iron", 8.0)]);
	let engine = Engine::new(&catalog, &thresholds, keys);

	let meals = vec![IntakeEntry::by_name("Spinach", 100.0)];
	let report = engine.recommend_from_gap(&targets, &meals, 1.2, None, 5).unwrap();

	// gap = target * 1.2 - intake, floored at zero
	assert!((report.gaps.get(0) - (90.0 * 1.2 - 28.0)).abs() < 1e-9);
	assert!((report.gaps.get(1) - (8.0 * 1.2 - 2.7)).abs() < 1e-9);
	assert_eq!(report.foods.len(), 2);
	assert_eq!(report.foods[0].row.food_name, "Spinach");
}

#[test]
fn test_profile_store_lookup() {
	let store = ProfileStore::from_profiles(vec![profile("user_001", "Terai", "trimester1", &[])]);

	assert!(store.find("user_001").is_some());
	assert!(store.find("user_999").is_none());
	assert_eq!(
		store.require("user_999").unwrap_err(),
		EngineError::UnknownUser("user_999".to_string())
	);
}
