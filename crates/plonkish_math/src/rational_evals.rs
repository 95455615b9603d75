// Copyright 2025 Irreducible Inc.

use std::ops::Range;

use ark_ff::Field;

use crate::{Error, RationalField};

/// A rational-valued evaluation table, one entry per row of the evaluation domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalEvals<F: Field> {
	evals: Vec<RationalField<F>>,
}

impl<F: Field> RationalEvals<F> {
	/// Creates a table of `size` logical zeros.
	pub fn zero(size: usize) -> Self {
		Self {
			evals: vec![RationalField::Zero; size],
		}
	}

	pub fn from_vec(evals: Vec<RationalField<F>>) -> Self {
		Self { evals }
	}

	pub fn len(&self) -> usize {
		self.evals.len()
	}

	pub fn is_empty(&self) -> bool {
		self.evals.is_empty()
	}

	pub fn evaluations(&self) -> &[RationalField<F>] {
		&self.evals
	}

	pub fn get(&self, row: usize) -> Option<&RationalField<F>> {
		self.evals.get(row)
	}

	pub fn get_mut(&mut self, row: usize) -> Option<&mut RationalField<F>> {
		self.evals.get_mut(row)
	}

	/// Writes `value` into every row of `rows`.
	pub fn fill(&mut self, rows: Range<usize>, value: RationalField<F>) -> Result<(), Error> {
		if rows.end > self.evals.len() {
			return Err(Error::RowOutOfRange {
				row: rows.end.saturating_sub(1),
				size: self.evals.len(),
			});
		}
		self.evals[rows].fill(value);
		Ok(())
	}

	/// Evaluates the table on its own. Prefer [`crate::TableArena`] for several tables.
	pub fn evaluate(&self) -> Result<Vec<F>, Error> {
		RationalField::batch_evaluate(&self.evals, None)
	}

	pub fn into_vec(self) -> Vec<RationalField<F>> {
		self.evals
	}
}
