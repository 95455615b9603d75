// Copyright 2025 Irreducible Inc.

use std::fmt::Debug;

/// A synthesis phase. Advice columns of a later phase may depend on challenges squeezed after
/// every earlier phase has been committed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase(pub u8);

pub const FIRST_PHASE: Phase = Phase(0);
pub const SECOND_PHASE: Phase = Phase(1);
pub const THIRD_PHASE: Phase = Phase(2);

impl Phase {
	pub const fn value(&self) -> u8 {
		self.0
	}

	pub const fn prev(&self) -> Option<Phase> {
		match self.0.checked_sub(1) {
			Some(value) => Some(Phase(value)),
			None => None,
		}
	}
}

/// Marker for the kinds of column a [`Column`] key can refer to.
pub trait ColumnType: Copy + Debug + PartialEq + Eq + Into<Any> {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Advice {
	pub phase: Phase,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fixed;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instance;

/// Type-erased column kind, used where columns of every kind mix, as in copy constraints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Any {
	Advice(Advice),
	Fixed,
	Instance,
}

impl ColumnType for Advice {}
impl ColumnType for Fixed {}
impl ColumnType for Instance {}
impl ColumnType for Any {}

impl From<Advice> for Any {
	fn from(advice: Advice) -> Self {
		Any::Advice(advice)
	}
}

impl From<Fixed> for Any {
	fn from(_: Fixed) -> Self {
		Any::Fixed
	}
}

impl From<Instance> for Any {
	fn from(_: Instance) -> Self {
		Any::Instance
	}
}

/// Key of a column. Keys are handed out by [`crate::ConstraintSystem`] and never change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Column<C: ColumnType> {
	index: usize,
	column_type: C,
}

pub type AdviceColumn = Column<Advice>;
pub type FixedColumn = Column<Fixed>;
pub type InstanceColumn = Column<Instance>;
pub type AnyColumn = Column<Any>;

impl<C: ColumnType> Column<C> {
	pub(crate) const fn new(index: usize, column_type: C) -> Self {
		Self { index, column_type }
	}

	pub const fn index(&self) -> usize {
		self.index
	}

	pub const fn column_type(&self) -> &C {
		&self.column_type
	}
}

impl Column<Advice> {
	pub const fn phase(&self) -> Phase {
		self.column_type.phase
	}
}

impl From<Column<Advice>> for Column<Any> {
	fn from(column: Column<Advice>) -> Self {
		Column::new(column.index, column.column_type.into())
	}
}

impl From<Column<Fixed>> for Column<Any> {
	fn from(column: Column<Fixed>) -> Self {
		Column::new(column.index, Any::Fixed)
	}
}

impl From<Column<Instance>> for Column<Any> {
	fn from(column: Column<Instance>) -> Self {
		Column::new(column.index, Any::Instance)
	}
}

/// A boolean fixed column toggled per row. Simple selectors may only multiply a whole gate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
	pub(crate) index: usize,
	pub(crate) simple: bool,
}

impl Selector {
	pub const fn index(&self) -> usize {
		self.index
	}

	pub const fn is_simple(&self) -> bool {
		self.simple
	}
}

/// A verifier challenge that becomes available once `phase` has been committed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Challenge {
	pub(crate) index: usize,
	pub(crate) phase: Phase,
}

impl Challenge {
	pub const fn index(&self) -> usize {
		self.index
	}

	pub const fn phase(&self) -> Phase {
		self.phase
	}
}
