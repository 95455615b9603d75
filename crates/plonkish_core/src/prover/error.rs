// Copyright 2025 Irreducible Inc.

use crate::{circuit, pcs, transcript};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("a domain of 2^{k} rows cannot reserve {blinding_factors} blinding rows")]
	InvalidConfig { k: u32, blinding_factors: usize },
	#[error("circuit needs at least {minimum_rows} rows, the domain has {n}")]
	DomainTooSmall { n: usize, minimum_rows: usize },
	#[error("commitment scheme supports {pcs_n} coefficients, the domain has {n} rows")]
	CommitmentSchemeSizeMismatch { pcs_n: usize, n: usize },
	#[error("circuit error: {0}")]
	Circuit(#[from] circuit::Error),
	#[error("transcript error: {0}")]
	Transcript(#[from] transcript::Error),
	#[error("commitment error: {0}")]
	CommitmentScheme(#[from] pcs::Error),
	#[error("math error: {0}")]
	Math(#[from] plonkish_math::Error),
}
