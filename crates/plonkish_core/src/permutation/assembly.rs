// Copyright 2025 Irreducible Inc.

use std::mem;

use plonkish_utils::{bail, ensure};

use super::Argument;
use crate::circuit::{AnyColumn, Error};

/// A cell of the permutation, addressed by its position in [`Argument::columns`] and its row.
pub type Cell = (usize, usize);

/// Collects copy constraints into disjoint cycles.
///
/// `mapping` is the permutation itself: following it from any cell walks the cycle of cells
/// constrained equal to it. `aux` points every cell at the representative of its cycle and
/// `sizes` holds the cycle length at each representative. Two cycles are merged by relabelling
/// the smaller one and swapping the successors of the two copied cells.
#[derive(Debug, Clone)]
pub struct PermutationAssembly {
	columns: Vec<AnyColumn>,
	mapping: Vec<Vec<Cell>>,
	aux: Vec<Vec<Cell>>,
	sizes: Vec<Vec<usize>>,
}

impl PermutationAssembly {
	/// Starts from the identity permutation over `n` rows of every column in `argument`.
	pub fn new(n: usize, argument: &Argument) -> Self {
		let identity = (0..argument.columns().len())
			.map(|column| (0..n).map(|row| (column, row)).collect::<Vec<_>>())
			.collect::<Vec<_>>();

		Self {
			columns: argument.columns().to_vec(),
			mapping: identity.clone(),
			aux: identity,
			sizes: vec![vec![1; n]; argument.columns().len()],
		}
	}

	/// Constrains `left_column[left_row]` to equal `right_column[right_row]`.
	///
	/// ## Throws
	///
	/// * [`Error::ColumnNotInPermutation`] if either column is not equality-enabled
	/// * [`Error::BoundsFailure`] if either row is outside the permutation
	pub fn copy(
		&mut self,
		left_column: AnyColumn,
		left_row: usize,
		right_column: AnyColumn,
		right_row: usize,
	) -> Result<(), Error> {
		let left = self.cell(left_column, left_row)?;
		let right = self.cell(right_column, right_row)?;

		let mut left_cycle = self.aux[left.0][left.1];
		let mut right_cycle = self.aux[right.0][right.1];
		if left_cycle == right_cycle {
			return Ok(());
		}

		if self.sizes[left_cycle.0][left_cycle.1] < self.sizes[right_cycle.0][right_cycle.1] {
			mem::swap(&mut left_cycle, &mut right_cycle);
		}
		self.sizes[left_cycle.0][left_cycle.1] += self.sizes[right_cycle.0][right_cycle.1];

		let mut cell = right_cycle;
		loop {
			self.aux[cell.0][cell.1] = left_cycle;
			cell = self.mapping[cell.0][cell.1];
			if cell == right_cycle {
				break;
			}
		}

		let left_next = self.mapping[left.0][left.1];
		self.mapping[left.0][left.1] = self.mapping[right.0][right.1];
		self.mapping[right.0][right.1] = left_next;
		Ok(())
	}

	fn cell(&self, column: AnyColumn, row: usize) -> Result<Cell, Error> {
		let Some(position) = self.columns.iter().position(|c| *c == column) else {
			bail!(Error::ColumnNotInPermutation(column));
		};
		let n = self.mapping[position].len();
		ensure!(row < n, Error::BoundsFailure { index: row, count: n });
		Ok((position, row))
	}

	pub fn columns(&self) -> &[AnyColumn] {
		&self.columns
	}

	/// The permutation: the successor of every cell within its cycle.
	pub fn mapping(&self) -> &[Vec<Cell>] {
		&self.mapping
	}

	/// Walks the cycle containing `cell`, starting at `cell`.
	pub fn cycle(&self, cell: Cell) -> Vec<Cell> {
		let mut cycle = vec![cell];
		let mut next = self.mapping[cell.0][cell.1];
		while next != cell {
			cycle.push(next);
			next = self.mapping[next.0][next.1];
		}
		cycle
	}
}
