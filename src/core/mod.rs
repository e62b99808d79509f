//! Core domain: nutrient vectors, thresholds, intake, gaps, ranking

pub mod catalog;
pub mod gap;
pub mod intake;
pub mod rank;
pub mod threshold;
pub mod vector;

pub use catalog::{FoodCatalog, FoodRow};
pub use intake::{FoodRef, IntakeEntry};
pub use rank::Ranked;
pub use threshold::ThresholdTable;
pub use vector::{NutrientKeySet, NutrientVector};
