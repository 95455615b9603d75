// Copyright 2025 Irreducible Inc.

use super::AnyColumn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("instance column {column} has {len} values but only {usable_rows} rows are usable")]
	InstanceTooLarge {
		column: usize,
		len: usize,
		usable_rows: usize,
	},
	#[error("row {row} is outside the usable rows [0, {usable_rows})")]
	NotEnoughRowsAvailable { row: usize, usable_rows: usize },
	#[error("column index {index} is out of bounds, only {count} columns exist")]
	BoundsFailure { index: usize, count: usize },
	#[error("a value required for synthesis is unknown")]
	Synthesis,
	#[error("column {0:?} has not been enabled for equality constraints")]
	ColumnNotInPermutation(AnyColumn),
}
