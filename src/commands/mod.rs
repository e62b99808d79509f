//! # Command Implementations
//!
//! Each submodule handles one CLI command (recommend, summary, wellness, ...).

pub mod gaps;
pub mod list_meals;
pub mod log_meal;
pub mod recommend;
pub mod summary;
pub mod wellness;

use colored::Colorize;

use crate::core::Ranked;
use crate::logger;

/// Prints a ranked food list with similarity percentages.
pub fn print_ranked(ranked: &[Ranked<'_>]) {
	logger::header("Recommendations");
	for (i, entry) in ranked.iter().enumerate() {
		let rank = format!("#{}", i + 1).bright_blue().bold();
		let score = format!("{:.1}%", entry.similarity * 100.0).dimmed();
		println!(
			"  {} {} {} {}",
			rank,
			entry.row.food_name.bright_white(),
			format!("({})", entry.row.region).yellow(),
			score
		);
	}
	println!();
}
