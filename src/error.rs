//! Typed engine errors
//!
//! Recoverable lookup conditions get their own variants so callers can pick
//! distinct exit paths instead of collapsing everything into one failure.
//! Degenerate numeric cases (zero vectors, zero thresholds, unmatched log
//! entries) are resolved inside the core and never surface here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
	/// Profile id absent from the supplied profile store.
	#[error("user '{0}' not found")]
	UnknownUser(String),

	/// Region filter eliminated every catalog row.
	#[error("no food items found for region '{region}'")]
	EmptyCatalog { region: String },

	/// Vectors built from incompatible nutrient key sets. A configuration
	/// bug, not a runtime condition to paper over.
	#[error("nutrient key set mismatch: expected {expected} keys, got {actual}")]
	KeySetMismatch { expected: usize, actual: usize },
}
