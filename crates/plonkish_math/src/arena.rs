// Copyright 2025 Irreducible Inc.

use std::collections::HashMap;

use ark_ff::Field;
use plonkish_utils::ensure;
use rayon::prelude::*;
use tracing::instrument;

use crate::{Error, RationalEvals, RationalField};

/// Position of a table inside a [`TableArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(usize);

impl TableId {
	pub const fn index(&self) -> usize {
		self.0
	}
}

/// Collects borrowed rational tables for a single batched evaluation.
///
/// Tables are keyed by a caller-provided stable index, such as a column index. Inserting the
/// same key twice returns the slot created by the first insertion, so a table referenced by
/// several terms is evaluated once.
#[derive(Debug)]
pub struct TableArena<'a, F: Field> {
	tables: Vec<&'a RationalEvals<F>>,
	slots: HashMap<usize, TableId>,
	table_len: Option<usize>,
}

impl<F: Field> Default for TableArena<'_, F> {
	fn default() -> Self {
		Self {
			tables: Vec::new(),
			slots: HashMap::new(),
			table_len: None,
		}
	}
}

impl<'a, F: Field> TableArena<'a, F> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `table` under `key`, or returns the existing slot when `key` was inserted before.
	///
	/// ## Throws
	///
	/// * [`Error::TableLengthMismatch`] if the table length differs from the first table's
	pub fn insert(&mut self, key: usize, table: &'a RationalEvals<F>) -> Result<TableId, Error> {
		if let Some(&id) = self.slots.get(&key) {
			return Ok(id);
		}

		let expected = *self.table_len.get_or_insert(table.len());
		ensure!(
			table.len() == expected,
			Error::TableLengthMismatch {
				expected,
				got: table.len(),
			}
		);

		let id = TableId(self.tables.len());
		self.tables.push(table);
		self.slots.insert(key, id);
		Ok(id)
	}

	pub fn get(&self, key: usize) -> Option<TableId> {
		self.slots.get(&key).copied()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Evaluates every table, returning field tables ordered by [`TableId`].
	///
	/// The tables are concatenated and inverted together. When several worker threads are
	/// available the tables are split into disjoint groups, one batched pass per group; the
	/// output is the same either way.
	#[instrument("TableArena::batch_evaluate", skip_all, level = "debug", fields(n_tables = self.tables.len()))]
	pub fn batch_evaluate(&self, coeff: Option<F>) -> Result<Vec<Vec<F>>, Error> {
		let Some(table_len) = self.table_len else {
			return Ok(Vec::new());
		};
		if table_len == 0 {
			return Ok(vec![Vec::new(); self.tables.len()]);
		}

		let tables_per_task = self
			.tables
			.len()
			.div_ceil(rayon::current_num_threads())
			.max(1);

		let groups = self
			.tables
			.par_chunks(tables_per_task)
			.enumerate()
			.map(|(group_index, group)| {
				let buffer = group
					.iter()
					.flat_map(|table| table.evaluations().iter().copied())
					.collect::<Vec<_>>();
				RationalField::batch_evaluate(&buffer, coeff).map_err(|err| match err {
					Error::NonInvertibleDenominator { index } => Error::NonInvertibleDenominator {
						index: group_index * tables_per_task * table_len + index,
					},
					err => err,
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(groups
			.iter()
			.flat_map(|evaluated| evaluated.chunks_exact(table_len).map(<[F]>::to_vec))
			.collect())
	}
}
