// Copyright 2025 Irreducible Inc.

use std::ops::Range;

use plonkish_utils::{bail, checked_arithmetics::checked_pow_2, ensure};

use super::Error;
use crate::ConstraintSystem;

/// Size of the evaluation domain and how many of its rows are reserved for blinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProverConfig {
	k: u32,
	blinding_factors: usize,
}

impl ProverConfig {
	/// ## Throws
	///
	/// * [`Error::InvalidConfig`] unless `2^k` rows leave at least one usable row after
	///   `blinding_factors` rows, and at least one blinding row is reserved
	pub fn new(k: u32, blinding_factors: usize) -> Result<Self, Error> {
		let n = checked_pow_2(k);
		ensure!(
			blinding_factors > 0 && n.is_some_and(|n| n > blinding_factors),
			Error::InvalidConfig { k, blinding_factors }
		);
		Ok(Self { k, blinding_factors })
	}

	/// Configuration for proving `cs` over `2^k` rows.
	///
	/// ## Throws
	///
	/// * [`Error::DomainTooSmall`] if `2^k` is below [`ConstraintSystem::minimum_rows`]
	pub fn for_circuit(k: u32, cs: &ConstraintSystem) -> Result<Self, Error> {
		let minimum_rows = cs.minimum_rows();
		match checked_pow_2(k) {
			Some(n) if n < minimum_rows => {
				bail!(Error::DomainTooSmall { n, minimum_rows })
			}
			_ => Self::new(k, cs.blinding_factors()),
		}
	}

	pub const fn k(&self) -> u32 {
		self.k
	}

	pub const fn n(&self) -> usize {
		1 << self.k
	}

	pub const fn blinding_factors(&self) -> usize {
		self.blinding_factors
	}

	/// Rows circuit code may assign: everything before the blinding rows.
	pub const fn usable_rows(&self) -> Range<usize> {
		0..self.n() - self.blinding_factors
	}
}
