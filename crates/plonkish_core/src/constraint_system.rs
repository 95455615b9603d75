// Copyright 2025 Irreducible Inc.

//! The circuit schema: which columns, selectors and challenges a circuit declares.

use itertools::Itertools;

use crate::{
	circuit::{
		Advice, AnyColumn, Challenge, Column, Fixed, Instance, Phase, Selector,
		FIRST_PHASE,
	},
	permutation,
};

/// Blinding rows reserved regardless of how often advice columns are queried.
const MIN_ADVICE_QUERIES: usize = 3;

/// Column, selector and challenge declarations of a circuit.
///
/// Filled in once by [`crate::circuit::Circuit::configure`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSystem {
	num_fixed_columns: usize,
	num_instance_columns: usize,
	advice_column_phases: Vec<Phase>,
	advice_queries: Vec<usize>,
	challenge_phases: Vec<Phase>,
	selectors: Vec<Selector>,
	permutation: permutation::Argument,
	constants: Vec<Column<Fixed>>,
}

impl ConstraintSystem {
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates an advice column in the first phase.
	pub fn advice_column(&mut self) -> Column<Advice> {
		self.advice_column_in(FIRST_PHASE)
	}

	/// Allocates an advice column assigned during `phase`.
	///
	/// Panics unless the previous phase already has an advice column.
	pub fn advice_column_in(&mut self, phase: Phase) -> Column<Advice> {
		if let Some(previous) = phase.prev() {
			assert!(
				self.advice_column_phases.contains(&previous),
				"phase {phase:?} is used before {previous:?} has an advice column"
			);
		}

		let column = Column::new(self.advice_column_phases.len(), Advice { phase });
		self.advice_column_phases.push(phase);
		self.advice_queries.push(0);
		column
	}

	pub fn fixed_column(&mut self) -> Column<Fixed> {
		let column = Column::new(self.num_fixed_columns, Fixed);
		self.num_fixed_columns += 1;
		column
	}

	pub fn instance_column(&mut self) -> Column<Instance> {
		let column = Column::new(self.num_instance_columns, Instance);
		self.num_instance_columns += 1;
		column
	}

	/// Allocates a simple selector, which may only multiply a whole gate.
	pub fn selector(&mut self) -> Selector {
		self.push_selector(true)
	}

	/// Allocates a selector that may appear anywhere in a gate.
	pub fn complex_selector(&mut self) -> Selector {
		self.push_selector(false)
	}

	fn push_selector(&mut self, simple: bool) -> Selector {
		let selector = Selector {
			index: self.selectors.len(),
			simple,
		};
		self.selectors.push(selector);
		selector
	}

	/// Declares a challenge squeezed once every advice column of `phase` is committed.
	pub fn challenge_usable_after(&mut self, phase: Phase) -> Challenge {
		let challenge = Challenge {
			index: self.challenge_phases.len(),
			phase,
		};
		self.challenge_phases.push(phase);
		challenge
	}

	/// Records a query of `column` at one more rotation. Every distinct rotation at which an
	/// advice column is opened costs one blinding row.
	pub fn query_advice(&mut self, column: Column<Advice>) {
		self.advice_queries[column.index()] += 1;
	}

	/// Makes `column` available to copy constraints.
	pub fn enable_equality(&mut self, column: impl Into<AnyColumn>) {
		self.permutation.add_column(column.into());
	}

	/// Makes `column` available for constants, which also enables equality on it.
	pub fn enable_constant(&mut self, column: Column<Fixed>) {
		if !self.constants.contains(&column) {
			self.constants.push(column);
			self.enable_equality(column);
		}
	}

	pub fn constants(&self) -> &[Column<Fixed>] {
		&self.constants
	}

	pub fn permutation(&self) -> &permutation::Argument {
		&self.permutation
	}

	pub fn num_fixed_columns(&self) -> usize {
		self.num_fixed_columns
	}

	pub fn num_advice_columns(&self) -> usize {
		self.advice_column_phases.len()
	}

	pub fn num_instance_columns(&self) -> usize {
		self.num_instance_columns
	}

	pub fn num_selectors(&self) -> usize {
		self.selectors.len()
	}

	pub fn num_challenges(&self) -> usize {
		self.challenge_phases.len()
	}

	pub fn selectors(&self) -> &[Selector] {
		&self.selectors
	}

	pub fn advice_column_phases(&self) -> &[Phase] {
		&self.advice_column_phases
	}

	pub fn challenge_phases(&self) -> &[Phase] {
		&self.challenge_phases
	}

	/// Every phase that owns an advice column or a challenge, ascending.
	pub fn phases(&self) -> Vec<Phase> {
		self.advice_column_phases
			.iter()
			.chain(&self.challenge_phases)
			.copied()
			.sorted()
			.dedup()
			.collect()
	}

	/// Indices of the advice columns assigned during `phase`.
	pub fn advice_columns_in(&self, phase: Phase) -> impl Iterator<Item = usize> + '_ {
		self.advice_column_phases
			.iter()
			.positions(move |column_phase| *column_phase == phase)
	}

	/// Number of rows at the end of the domain filled with random values.
	pub fn blinding_factors(&self) -> usize {
		let max_queries = self
			.advice_queries
			.iter()
			.copied()
			.max()
			.unwrap_or(0)
			.max(MIN_ADVICE_QUERIES);
		// One more for the evaluation of the permutation product at the last row, and one for
		// the opening of every advice polynomial at the challenge point.
		max_queries + 2
	}

	/// Smallest domain able to hold one row of the circuit.
	pub fn minimum_rows(&self) -> usize {
		// The blinding rows, the last usable row, the first row, and at least one row of
		// circuit.
		self.blinding_factors() + 3
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::circuit::{SECOND_PHASE, THIRD_PHASE};

	#[test]
	fn test_column_allocation() {
		let mut cs = ConstraintSystem::new();
		let a = cs.advice_column();
		let b = cs.advice_column();
		let f = cs.fixed_column();
		let i = cs.instance_column();
		assert_eq!((a.index(), b.index(), f.index(), i.index()), (0, 1, 0, 0));
		assert_eq!(cs.num_advice_columns(), 2);
		assert_eq!(cs.num_fixed_columns(), 1);
		assert_eq!(cs.num_instance_columns(), 1);

		let s = cs.selector();
		let c = cs.complex_selector();
		assert!(s.is_simple());
		assert!(!c.is_simple());
		assert_eq!(c.index(), 1);
	}

	#[test]
	fn test_phases() {
		let mut cs = ConstraintSystem::new();
		cs.advice_column();
		let theta = cs.challenge_usable_after(FIRST_PHASE);
		let second = cs.advice_column_in(SECOND_PHASE);
		cs.challenge_usable_after(SECOND_PHASE);
		cs.challenge_usable_after(THIRD_PHASE);

		assert_eq!(theta.phase(), FIRST_PHASE);
		assert_eq!(second.phase(), SECOND_PHASE);
		assert_eq!(cs.phases(), vec![FIRST_PHASE, SECOND_PHASE, THIRD_PHASE]);
		assert_eq!(cs.advice_columns_in(SECOND_PHASE).collect::<Vec<_>>(), vec![1]);
		assert_eq!(cs.challenge_phases(), &[FIRST_PHASE, SECOND_PHASE, THIRD_PHASE]);
	}

	#[test]
	#[should_panic(expected = "is used before")]
	fn test_advice_phase_requires_previous_phase_advice() {
		ConstraintSystem::new().advice_column_in(SECOND_PHASE);
	}

	#[test]
	fn test_blinding_factors() {
		let mut cs = ConstraintSystem::new();
		let a = cs.advice_column();
		assert_eq!(cs.blinding_factors(), 5);
		assert_eq!(cs.minimum_rows(), 8);

		for _ in 0..4 {
			cs.query_advice(a);
		}
		assert_eq!(cs.blinding_factors(), 6);
	}

	#[test]
	fn test_enable_constant_enables_equality() {
		let mut cs = ConstraintSystem::new();
		let f = cs.fixed_column();
		cs.enable_constant(f);
		cs.enable_constant(f);
		assert_eq!(cs.constants(), &[f]);
		assert_eq!(cs.permutation().columns(), &[f.into()]);
	}
}
