// Copyright 2025 Irreducible Inc.

use std::collections::BTreeMap;

use crate::circuit::Challenge;

/// Derived challenge values by challenge index. Values are only ever added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenges<F> {
	values: BTreeMap<usize, F>,
}

impl<F> Default for Challenges<F> {
	fn default() -> Self {
		Self {
			values: BTreeMap::new(),
		}
	}
}

impl<F: Copy> Challenges<F> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the value of challenge `index`. Panics if it was already derived.
	pub fn insert(&mut self, index: usize, value: F) {
		let previous = self.values.insert(index, value);
		assert!(previous.is_none(), "challenge {index} derived twice");
	}

	pub fn get(&self, challenge: &Challenge) -> Option<F> {
		self.values.get(&challenge.index()).copied()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (usize, F)> + '_ {
		self.values.iter().map(|(&index, &value)| (index, value))
	}

	/// Values ordered by challenge index.
	pub fn into_vec(self) -> Vec<F> {
		self.values.into_values().collect()
	}
}
