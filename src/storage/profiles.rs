//! User profile store

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::EngineError;

/// One user's physiological profile, as stored in the profile file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
	pub user_id: String,
	pub region: String,
	pub stage: String,
	#[serde(default)]
	pub preconditions: HashMap<String, bool>,
}

impl UserProfile {
	/// Names of preconditions flagged true.
	pub fn active_preconditions(&self) -> impl Iterator<Item = &str> {
		self.preconditions
			.iter()
			.filter(|(_, &present)| present)
			.map(|(name, _)| name.as_str())
	}
}

/// Read-only collection of user profiles, loaded per process.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
	profiles: Vec<UserProfile>,
}

impl ProfileStore {
	pub fn from_profiles(profiles: Vec<UserProfile>) -> Self {
		Self { profiles }
	}

	pub fn load(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path)
			.with_context(|| format!("Failed to read user profiles: {}", path.display()))?;
		let profiles: Vec<UserProfile> = serde_json::from_str(&content)
			.with_context(|| format!("Failed to parse user profiles: {}", path.display()))?;

		crate::logger::debug(&format!(
			"Loaded {} profiles from {}",
			profiles.len(),
			path.display()
		));
		Ok(Self { profiles })
	}

	pub fn len(&self) -> usize {
		self.profiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.profiles.is_empty()
	}

	pub fn find(&self, user_id: &str) -> Option<&UserProfile> {
		self.profiles.iter().find(|p| p.user_id == user_id)
	}

	/// Like [`find`](Self::find), but missing users become the typed
	/// UnknownUser condition so callers can surface "not found" distinctly.
	pub fn require(&self, user_id: &str) -> Result<&UserProfile, EngineError> {
		self.find(user_id).ok_or_else(|| EngineError::UnknownUser(user_id.to_string()))
	}
}
