//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Data Files ===
pub const CATALOG_FILE: &str = "food_catalog.json";
pub const THRESHOLDS_FILE: &str = "thresholds.json";
pub const PROFILES_FILE: &str = "user_profiles.json";
pub const MEAL_LOG_FILE: &str = "logged_meals.json";

// === Numeric Policy ===
/// Substituted for a zero Euclidean norm so normalization never divides by zero.
pub const NORM_EPSILON: f64 = 1e-10;
/// Catalog rows express nutrient content per this many grams.
pub const REFERENCE_PORTION_G: f64 = 100.0;
/// Display ceiling for "percent of requirement met".
pub const COVERAGE_CAP_PCT: f64 = 999.0;
/// Wellness scores below this raise the daily targets.
pub const WELLNESS_SCORE_CUTOFF: f64 = 80.0;
/// Target boost applied when the wellness score is below the cutoff.
pub const LOW_SCORE_MULTIPLIER: f64 = 1.2;

// === Defaults ===
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_PORTION_G: f64 = 100.0;

/// Catalog region tag that matches every user region.
pub const REGION_WILDCARD: &str = "all";

// === Nutrient Key Sets ===
// Each computation path tracks its own subset; order is the vector order.
pub const MATERNAL_NUTRIENTS: &[&str] = &[
    "protein", "fat", "carbs", "iron", "calcium", "vitaminA", "vitaminC", "folate",
];

pub const TRACKED_NUTRIENTS: &[&str] = &[
    "protein", "fat", "carbs", "iron", "calcium", "vitaminA", "vitaminC", "folate", "iodine",
];

pub const WELLNESS_NUTRIENTS: &[&str] = &[
    "vitaminC", "vitaminA", "folate", "iron", "calcium", "protein", "fat",
];

/// Daily targets for the wellness path (adult male reference values).
pub const WELLNESS_TARGETS: &[(&str, f64)] = &[
    ("vitaminC", 90.0),
    ("vitaminA", 900.0),
    ("folate", 400.0),
    ("iron", 8.0),
    ("calcium", 1000.0),
    ("protein", 56.0),
    ("fat", 60.0),
];

pub const GAP_NUTRIENTS: &[&str] = &[
    "calories", "protein", "fat", "carbs", "iron", "calcium", "vitaminA", "vitaminC", "folate",
];

/// General daily targets used when no stored profile is involved.
pub const DEFAULT_TARGETS: &[(&str, f64)] = &[
    ("calories", 2500.0),
    ("protein", 71.0),
    ("fat", 70.0),
    ("carbs", 300.0),
    ("iron", 27.0),
    ("calcium", 1000.0),
    ("vitaminA", 770.0),
    ("vitaminC", 85.0),
    ("folate", 600.0),
];

pub fn set_data_dir(path: PathBuf) {
    let _ = CUSTOM_DATA_DIR.set(path);
}

/// Get data directory (--data flag, NUTRIGAP_DATA_DIR env var, or cwd)
pub fn data_dir() -> PathBuf {
    if let Some(custom) = CUSTOM_DATA_DIR.get() {
        return custom.clone();
    }

    if let Ok(env_path) = std::env::var("NUTRIGAP_DATA_DIR") {
        let path = PathBuf::from(&env_path);
        if path.is_dir() {
            crate::logger::debug(&format!("Using NUTRIGAP_DATA_DIR: {}", env_path));
            return path;
        }
    }

    PathBuf::from(".")
}

pub fn catalog_path() -> PathBuf {
    data_dir().join(CATALOG_FILE)
}

pub fn thresholds_path() -> PathBuf {
    data_dir().join(THRESHOLDS_FILE)
}

pub fn profiles_path() -> PathBuf {
    data_dir().join(PROFILES_FILE)
}

pub fn meal_log_path() -> PathBuf {
    data_dir().join(MEAL_LOG_FILE)
}
