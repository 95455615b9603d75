// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("rational value at index {index} has a zero denominator")]
	NonInvertibleDenominator { index: usize },
	#[error("evaluation table has length {got}, expected {expected}")]
	TableLengthMismatch { expected: usize, got: usize },
	#[error("row {row} is outside of the table of size {size}")]
	RowOutOfRange { row: usize, size: usize },
}
