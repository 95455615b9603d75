// Copyright 2025 Irreducible Inc.

use std::ops::Range;

use ark_ff::PrimeField;
use plonkish_math::{RationalEvals, RationalField};
use plonkish_utils::{bail, ensure};

use crate::{
	circuit::{AnyColumn, Column, Error, Fixed, Instance, Selector, Value},
	permutation::PermutationAssembly,
	prover::ProverConfig,
	ConstraintSystem,
};

/// Fixed column values, selector activations and copy constraints of a circuit, recorded by
/// running its synthesis during key generation.
#[derive(Debug, Clone)]
pub struct Assembly<F: PrimeField> {
	fixed: Vec<RationalEvals<F>>,
	permutation: PermutationAssembly,
	selectors: Vec<Vec<bool>>,
	num_instance_columns: usize,
	usable_rows: Range<usize>,
}

impl<F: PrimeField> Assembly<F> {
	pub fn new(config: &ProverConfig, cs: &ConstraintSystem) -> Self {
		let n = config.n();
		Self {
			fixed: vec![RationalEvals::zero(n); cs.num_fixed_columns()],
			permutation: PermutationAssembly::new(n, cs.permutation()),
			selectors: vec![vec![false; n]; cs.num_selectors()],
			num_instance_columns: cs.num_instance_columns(),
			usable_rows: config.usable_rows(),
		}
	}

	pub fn fixed_columns(&self) -> &[RationalEvals<F>] {
		&self.fixed
	}

	pub fn permutation(&self) -> &PermutationAssembly {
		&self.permutation
	}

	pub fn selectors(&self) -> &[Vec<bool>] {
		&self.selectors
	}

	pub fn usable_rows(&self) -> Range<usize> {
		self.usable_rows.clone()
	}

	pub fn into_parts(self) -> (Vec<RationalEvals<F>>, PermutationAssembly, Vec<Vec<bool>>) {
		(self.fixed, self.permutation, self.selectors)
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

	fn fixed_column_mut(&mut self, column: Column<Fixed>) -> Result<&mut RationalEvals<F>, Error> {
		let count = self.fixed.len();
		match self.fixed.get_mut(column.index()) {
			Some(table) => Ok(table),
			None => bail!(Error::BoundsFailure {
				index: column.index(),
				count,
			}),
		}
	}

	pub(crate) fn enable_selector(&mut self, selector: &Selector, row: usize) -> Result<(), Error> {
		self.check_row(row)?;
		let count = self.selectors.len();
		let Some(column) = self.selectors.get_mut(selector.index()) else {
			bail!(Error::BoundsFailure {
				index: selector.index(),
				count,
			});
		};
		column[row] = true;
		Ok(())
	}

	pub(crate) fn query_instance(&self, column: Column<Instance>, row: usize) -> Result<Value<F>, Error> {
		self.check_row(row)?;
		ensure!(
			column.index() < self.num_instance_columns,
			Error::BoundsFailure {
				index: column.index(),
				count: self.num_instance_columns,
			}
		);
		Ok(Value::unknown())
	}

	pub(crate) fn assign_advice(&mut self, row: usize) -> Result<(), Error> {
		self.check_row(row)
	}

	pub(crate) fn assign_fixed(
		&mut self,
		column: Column<Fixed>,
		row: usize,
		to: impl FnOnce() -> Value<RationalField<F>>,
	) -> Result<(), Error> {
		self.check_row(row)?;
		let table = self.fixed_column_mut(column)?;
		if let Some(cell) = table.get_mut(row) {
			*cell = to().assign()?;
		}
		Ok(())
	}

	pub(crate) fn copy(
		&mut self,
		left_column: AnyColumn,
		left_row: usize,
		right_column: AnyColumn,
		right_row: usize,
	) -> Result<(), Error> {
		self.check_row(left_row)?;
		self.check_row(right_row)?;
		self.permutation
			.copy(left_column, left_row, right_column, right_row)
	}

	/// Assigns `to` to every usable row of `column` from `from_row` on.
	pub(crate) fn fill_from_row(
		&mut self,
		column: Column<Fixed>,
		from_row: usize,
		to: Value<RationalField<F>>,
	) -> Result<(), Error> {
		self.check_row(from_row)?;
		let end = self.usable_rows.end;
		let value = to.assign()?;
		let table = self.fixed_column_mut(column)?;
		let count = table.len();
		table
			.fill(from_row..end, value)
			.map_err(|_| Error::BoundsFailure { index: end, count })
	}
}

#[cfg(test)]
mod tests {
	use ark_bn254::Fr;
	use ark_ff::{One, Zero};
	use assert_matches::assert_matches;

	use super::*;
	use crate::circuit::Assignment;

	fn setup() -> (ConstraintSystem, Column<Fixed>, Selector) {
		let mut cs = ConstraintSystem::new();
		let fixed = cs.fixed_column();
		let selector = cs.selector();
		(cs, fixed, selector)
	}

	#[test]
	fn test_records_fixed_and_selectors() {
		let (cs, fixed, selector) = setup();
		let config = ProverConfig::new(3, 2).unwrap();
		let mut assembly = Assembly::<Fr>::new(&config, &cs);

		let mut assignment = Assignment::Assembly(&mut assembly);
		assignment
			.assign_fixed(fixed, 1, || Value::known(RationalField::new(Fr::from(4u64))))
			.unwrap();
		assignment.enable_selector(&selector, 2).unwrap();
		assignment
			.fill_from_row(fixed, 3, Value::known(RationalField::new(Fr::one())))
			.unwrap();
		assert_matches!(
			assignment.query_instance(Column::new(0, Instance), 0),
			Err(Error::BoundsFailure { index: 0, count: 0 })
		);

		let evals = assembly.fixed_columns()[0].evaluate().unwrap();
		assert_eq!(
			evals,
			vec![
				Fr::zero(),
				Fr::from(4u64),
				Fr::zero(),
				Fr::one(),
				Fr::one(),
				Fr::one(),
				Fr::zero(),
				Fr::zero()
			]
		);
		assert_eq!(assembly.selectors()[0], vec![false, false, true, false, false, false, false, false]);
	}

	#[test]
	fn test_row_bounds() {
		let (cs, fixed, selector) = setup();
		let config = ProverConfig::new(3, 2).unwrap();
		let mut assembly = Assembly::<Fr>::new(&config, &cs);
		let mut assignment = Assignment::Assembly(&mut assembly);

		assert_matches!(
			assignment.enable_selector(&selector, 6),
			Err(Error::NotEnoughRowsAvailable { row: 6, .. })
		);
		assert_matches!(
			assignment.fill_from_row(fixed, 6, Value::known(RationalField::Zero)),
			Err(Error::NotEnoughRowsAvailable { row: 6, .. })
		);
		assert_matches!(
			assignment.assign_fixed(fixed, 0, Value::unknown),
			Err(Error::Synthesis)
		);
		assert_matches!(
			assignment.assign_fixed(Column::new(1, Fixed), 0, || Value::known(RationalField::Zero)),
			Err(Error::BoundsFailure { index: 1, count: 1 })
		);
	}

	#[test]
	fn test_records_copies() {
		let mut cs = ConstraintSystem::new();
		let advice = cs.advice_column();
		let instance = cs.instance_column();
		cs.enable_equality(advice);
		cs.enable_equality(instance);
		let config = ProverConfig::new(3, 2).unwrap();
		let mut assembly = Assembly::<Fr>::new(&config, &cs);

		let mut assignment = Assignment::Assembly(&mut assembly);
		assignment.copy(advice.into(), 1, instance.into(), 0).unwrap();
		assert_matches!(
			assignment.copy(advice.into(), 7, instance.into(), 0),
			Err(Error::NotEnoughRowsAvailable { row: 7, .. })
		);
		assert_eq!(assignment.query_instance(instance, 0).unwrap(), Value::unknown());

		assert_eq!(assembly.permutation().cycle((0, 1)).len(), 2);
	}
}
