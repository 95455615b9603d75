// Copyright 2025 Irreducible Inc.

//! Copy constraints between cells of equality-enabled columns.

mod assembly;

pub use assembly::PermutationAssembly;

use crate::circuit::AnyColumn;

/// The columns taking part in the permutation argument, in the order they were enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
	columns: Vec<AnyColumn>,
}

impl Argument {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `column` to the argument. Enabling a column twice has no effect.
	pub fn add_column(&mut self, column: AnyColumn) {
		if !self.columns.contains(&column) {
			self.columns.push(column);
		}
	}

	pub fn columns(&self) -> &[AnyColumn] {
		&self.columns
	}

	pub fn position(&self, column: &AnyColumn) -> Option<usize> {
		self.columns.iter().position(|c| c == column)
	}
}
