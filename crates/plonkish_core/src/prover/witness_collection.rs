// Copyright 2025 Irreducible Inc.

use std::ops::Range;

use ark_ff::PrimeField;
use plonkish_math::{RationalEvals, RationalField};
use plonkish_utils::{bail, ensure};

use super::{Challenges, ProverConfig};
use crate::circuit::{Advice, Challenge, Column, Error, Fixed, Instance, Phase, Selector, Value};

/// Advice values of one circuit collected during one synthesis phase.
///
/// Every advice table starts as logical zero. Only columns of the current phase are written;
/// assignments to columns of later phases are dropped without evaluating them, as their values
/// may depend on challenges that do not exist yet.
#[derive(Debug)]
pub struct WitnessCollection<'a, F: PrimeField> {
	k: u32,
	advice: Vec<RationalEvals<F>>,
	usable_rows: Range<usize>,
	current_phase: Phase,
	challenges: &'a Challenges<F>,
	instances: &'a [Vec<F>],
}

impl<'a, F: PrimeField> WitnessCollection<'a, F> {
	pub fn new(
		config: &ProverConfig,
		num_advice_columns: usize,
		current_phase: Phase,
		challenges: &'a Challenges<F>,
		instances: &'a [Vec<F>],
	) -> Self {
		Self {
			k: config.k(),
			advice: vec![RationalEvals::zero(config.n()); num_advice_columns],
			usable_rows: config.usable_rows(),
			current_phase,
			challenges,
			instances,
		}
	}

	pub fn k(&self) -> u32 {
		self.k
	}

	pub fn current_phase(&self) -> Phase {
		self.current_phase
	}

	pub fn usable_rows(&self) -> Range<usize> {
		self.usable_rows.clone()
	}

	pub fn advice(&self) -> &[RationalEvals<F>] {
		&self.advice
	}

	/// Hands the collected tables over once synthesis of the phase is done.
	pub fn into_advice(self) -> Vec<RationalEvals<F>> {
		self.advice
	}

	fn check_row(&self, row: usize) -> Result<(), Error> {
		ensure!(
			self.usable_rows.contains(&row),
			Error::NotEnoughRowsAvailable {
				row,
				usable_rows: self.usable_rows.end,
			}
		);
		Ok(())
	}

	pub(crate) fn enable_selector(&mut self, _selector: &Selector, row: usize) -> Result<(), Error> {
		self.check_row(row)
	}

	pub(crate) fn query_instance(&self, column: Column<Instance>, row: usize) -> Result<Value<F>, Error> {
		self.check_row(row)?;
		let Some(values) = self.instances.get(column.index()) else {
			bail!(Error::BoundsFailure {
				index: column.index(),
				count: self.instances.len(),
			});
		};
		// Rows past the supplied values are padding.
		Ok(Value::known(values.get(row).copied().unwrap_or_else(F::zero)))
	}

	pub(crate) fn assign_advice(
		&mut self,
		column: Column<Advice>,
		row: usize,
		to: impl FnOnce() -> Value<RationalField<F>>,
	) -> Result<(), Error> {
		self.check_row(row)?;
		let count = self.advice.len();
		let Some(table) = self.advice.get_mut(column.index()) else {
			bail!(Error::BoundsFailure {
				index: column.index(),
				count,
			});
		};
		if column.phase() > self.current_phase {
			return Ok(());
		}

		let value = to().assign()?;
		if let Some(cell) = table.get_mut(row) {
			*cell = value;
		}
		Ok(())
	}

	pub(crate) fn assign_fixed(&mut self, _column: Column<Fixed>, row: usize) -> Result<(), Error> {
		self.check_row(row)
	}

	pub(crate) fn get_challenge(&self, challenge: Challenge) -> Value<F> {
		self.challenges
			.get(&challenge)
			.map_or(Value::unknown(), Value::known)
	}
}
