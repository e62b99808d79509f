//! Reference-data and meal-log storage

pub mod catalog;
pub mod meals;
pub mod profiles;
pub mod thresholds;

pub use meals::MealRecord;
pub use profiles::{ProfileStore, UserProfile};
