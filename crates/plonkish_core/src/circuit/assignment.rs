// Copyright 2025 Irreducible Inc.

use ark_ff::PrimeField;
use plonkish_math::RationalField;
use tracing::trace;

use super::{Advice, AnyColumn, Challenge, Column, Error, Fixed, Instance, Selector, Value};
use crate::{keygen::Assembly, prover::WitnessCollection};

/// The capability through which circuit code reports cells.
///
/// Proving collects advice values into a [`WitnessCollection`]; key generation records fixed
/// values, selectors and copy constraints into an [`Assembly`]. Each backend ignores the
/// operations it has no use for, but row bounds are checked by both so a circuit fails the
/// same way in either context.
#[derive(Debug)]
pub enum Assignment<'a, 'w, F: PrimeField> {
	Witness(&'a mut WitnessCollection<'w, F>),
	Assembly(&'a mut Assembly<F>),
}

impl<F: PrimeField> Assignment<'_, '_, F> {
	pub fn enter_region(&mut self, name: &str) {
		trace!(region = name, "enter region");
	}

	pub fn exit_region(&mut self) {
		trace!("exit region");
	}

	pub fn name_column(&mut self, name: &str, column: impl Into<AnyColumn>) {
		trace!(name, column = ?column.into(), "name column");
	}

	pub fn push_namespace(&mut self, name: &str) {
		trace!(namespace = name, "push namespace");
	}

	pub fn pop_namespace(&mut self, gadget_name: Option<&str>) {
		trace!(gadget = gadget_name, "pop namespace");
	}

	/// Turns `selector` on at `row`.
	pub fn enable_selector(&mut self, selector: &Selector, row: usize) -> Result<(), Error> {
		match self {
			Self::Witness(witness) => witness.enable_selector(selector, row),
			Self::Assembly(assembly) => assembly.enable_selector(selector, row),
		}
	}

	/// Reads a public input cell. The value is unknown during key generation.
	pub fn query_instance(&self, column: Column<Instance>, row: usize) -> Result<Value<F>, Error> {
		match self {
			Self::Witness(witness) => witness.query_instance(column, row),
			Self::Assembly(assembly) => assembly.query_instance(column, row),
		}
	}

	/// Assigns the value produced by `to` to an advice cell.
	///
	/// `to` is called at most once, and not at all when the column belongs to a later phase
	/// than the one being synthesized or during key generation.
	pub fn assign_advice(
		&mut self,
		column: Column<Advice>,
		row: usize,
		to: impl FnOnce() -> Value<RationalField<F>>,
	) -> Result<(), Error> {
		match self {
			Self::Witness(witness) => witness.assign_advice(column, row, to),
			Self::Assembly(assembly) => assembly.assign_advice(row),
		}
	}

	/// Assigns the value produced by `to` to a fixed cell. Ignored while proving.
	pub fn assign_fixed(
		&mut self,
		column: Column<Fixed>,
		row: usize,
		to: impl FnOnce() -> Value<RationalField<F>>,
	) -> Result<(), Error> {
		match self {
			Self::Witness(witness) => witness.assign_fixed(column, row),
			Self::Assembly(assembly) => assembly.assign_fixed(column, row, to),
		}
	}

	/// Constrains two cells to be equal. Ignored while proving.
	pub fn copy(
		&mut self,
		left_column: AnyColumn,
		left_row: usize,
		right_column: AnyColumn,
		right_row: usize,
	) -> Result<(), Error> {
		match self {
			Self::Witness(_) => Ok(()),
			Self::Assembly(assembly) => assembly.copy(left_column, left_row, right_column, right_row),
		}
	}

	/// Fills the usable rows of a fixed column from `from_row` on. Ignored while proving.
	pub fn fill_from_row(
		&mut self,
		column: Column<Fixed>,
		from_row: usize,
		to: Value<RationalField<F>>,
	) -> Result<(), Error> {
		match self {
			Self::Witness(_) => Ok(()),
			Self::Assembly(assembly) => assembly.fill_from_row(column, from_row, to),
		}
	}

	/// Value of `challenge`, known only once the phase it follows has been committed.
	pub fn get_challenge(&self, challenge: Challenge) -> Value<F> {
		match self {
			Self::Witness(witness) => witness.get_challenge(challenge),
			Self::Assembly(_) => Value::unknown(),
		}
	}
}
