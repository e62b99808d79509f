//! Nutrient key sets and fixed-order nutrient vectors

use std::collections::HashMap;

use crate::config::NORM_EPSILON;

/// Ordered, fixed set of nutrient identifiers.
///
/// Every vector derived from a key set uses the set's order; thresholds,
/// intake, gaps, and catalog rows compared against each other must all be
/// projected through the same key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientKeySet {
	keys: Vec<String>,
}

impl NutrientKeySet {
	pub fn new<I, S>(keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { keys: keys.into_iter().map(Into::into).collect() }
	}

	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	pub fn keys(&self) -> &[String] {
		&self.keys
	}

	pub fn index_of(&self, key: &str) -> Option<usize> {
		self.keys.iter().position(|k| k == key)
	}

	/// Project a name→value table into vector order; missing names become 0.
	pub fn project(&self, table: &HashMap<String, f64>) -> NutrientVector {
		let values = self.keys.iter().map(|k| table.get(k).copied().unwrap_or(0.0)).collect();
		NutrientVector { values }
	}
}

/// Fixed-order numeric vector over a nutrient key set.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientVector {
	values: Vec<f64>,
}

impl NutrientVector {
	pub fn zeros(len: usize) -> Self {
		Self { values: vec![0.0; len] }
	}

	pub fn from_values(values: Vec<f64>) -> Self {
		Self { values }
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn values(&self) -> &[f64] {
		&self.values
	}

	pub fn get(&self, idx: usize) -> f64 {
		self.values[idx]
	}

	pub fn set(&mut self, idx: usize, value: f64) {
		self.values[idx] = value;
	}

	/// Element-wise maximum with another vector of the same length.
	/// Both sides must be projected through the same key set.
	pub fn max_merge(&mut self, other: &Self) {
		debug_assert_eq!(self.values.len(), other.values.len(), "vectors built from different key sets");
		for (v, o) in self.values.iter_mut().zip(other.values.iter()) {
			if *o > *v {
				*v = *o;
			}
		}
	}

	/// Add `other * scale` element-wise.
	/// Both sides must be projected through the same key set.
	pub fn add_scaled(&mut self, other: &Self, scale: f64) {
		debug_assert_eq!(self.values.len(), other.values.len(), "vectors built from different key sets");
		for (v, o) in self.values.iter_mut().zip(other.values.iter()) {
			*v += o * scale;
		}
	}

	pub fn norm(&self) -> f64 {
		self.values.iter().map(|x| x * x).sum::<f64>().sqrt()
	}

	/// Unit-normalized copy. A zero norm gets the epsilon substitute, so the
	/// result is a near-zero vector rather than NaN.
	pub fn normalized(&self) -> Self {
		let mut norm = self.norm();
		if norm == 0.0 {
			norm = NORM_EPSILON;
		}
		Self { values: self.values.iter().map(|x| x / norm).collect() }
	}

	/// Dot product. On already-normalized vectors this is cosine similarity.
	pub fn dot(&self, other: &Self) -> f64 {
		self.values.iter().zip(other.values.iter()).map(|(a, b)| a * b).sum()
	}

	/// Pair values with their nutrient names.
	pub fn named<'a>(&'a self, keys: &'a NutrientKeySet) -> impl Iterator<Item = (&'a str, f64)> {
		keys.keys().iter().map(String::as_str).zip(self.values.iter().copied())
	}
}
