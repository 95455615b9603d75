// Copyright 2025 Irreducible Inc.

//! Polynomial commitment schemes over the columns of the circuit.

mod error;
mod pedersen;

use ark_ff::Field;
use ark_poly::univariate::DensePolynomial;
use auto_impl::auto_impl;
pub use error::Error;
pub use pedersen::Pedersen;

use crate::{Commitment, CommitmentCurve, Scalar};

/// Commits to polynomials of degree below [`Self::n`], given either in coefficient form or by
/// their evaluations over the size-`n` multiplicative subgroup.
#[auto_impl(&, &mut)]
pub trait CommitmentScheme<C: CommitmentCurve> {
	/// Number of coefficients the scheme can commit to.
	fn n(&self) -> usize;

	fn commit(&self, poly: &DensePolynomial<Scalar<C>>) -> Result<Commitment<C>, Error>;

	fn commit_lagrange(&self, evals: &[Scalar<C>]) -> Result<Commitment<C>, Error>;

	/// Hiding commitment to `evals` under the blinding scalar `blind`.
	fn commit_lagrange_blinded(
		&self,
		evals: &[Scalar<C>],
		blind: &Scalar<C>,
	) -> Result<Commitment<C>, Error>;
}

/// A polynomial together with the blind its commitment was computed with. The opening proof
/// needs both, so they always travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlindedPolynomial<F: Field> {
	pub poly: DensePolynomial<F>,
	pub blind: F,
}

impl<F: Field> BlindedPolynomial<F> {
	pub fn new(poly: DensePolynomial<F>, blind: F) -> Self {
		Self { poly, blind }
	}
}
