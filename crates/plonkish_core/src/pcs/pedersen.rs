// Copyright 2025 Irreducible Inc.

use ark_ec::{
	short_weierstrass::{Affine, Projective},
	CurveGroup, VariableBaseMSM,
};
use ark_ff::UniformRand;
use ark_poly::{univariate::DensePolynomial, EvaluationDomain, Radix2EvaluationDomain};
use plonkish_utils::{checked_arithmetics::checked_pow_2, ensure};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::instrument;

use super::{CommitmentScheme, Error};
use crate::{Commitment, CommitmentCurve, Scalar};

/// Hiding Pedersen vector commitment.
///
/// The `n` coefficient bases are sampled at random, so nobody knows discrete logarithms
/// between them. The Lagrange bases are their inverse FFT over the size-`n` domain, which lets
/// evaluation tables be committed without interpolating them first. A commitment is binding but
/// not succinct: it is a single group element, but opening it needs all `n` bases.
#[derive(Debug, Clone)]
pub struct Pedersen<C: CommitmentCurve> {
	k: u32,
	g: Vec<Affine<C>>,
	g_lagrange: Vec<Affine<C>>,
	h: Affine<C>,
}

impl<C: CommitmentCurve> Pedersen<C> {
	/// Samples bases for polynomials with `2^k` coefficients.
	///
	/// ## Throws
	///
	/// * [`Error::DomainUnavailable`] if the scalar field has no radix-2 domain of size `2^k`
	#[instrument("Pedersen::setup", skip(rng), level = "debug")]
	pub fn setup(k: u32, rng: &mut impl RngCore) -> Result<Self, Error> {
		let domain = checked_pow_2(k)
			.and_then(Radix2EvaluationDomain::<Scalar<C>>::new)
			.ok_or(Error::DomainUnavailable { k })?;

		let g = (0..domain.size())
			.map(|_| Projective::<C>::rand(rng))
			.collect::<Vec<_>>();
		let g_lagrange = domain.ifft(&g);
		let h = Projective::<C>::rand(rng).into_affine();

		Ok(Self {
			k,
			g: Projective::normalize_batch(&g),
			g_lagrange: Projective::normalize_batch(&g_lagrange),
			h,
		})
	}

	/// Deterministic setup, for tests and benchmarks.
	pub fn from_seed(k: u32, seed: u64) -> Result<Self, Error> {
		Self::setup(k, &mut StdRng::seed_from_u64(seed))
	}

	pub fn k(&self) -> u32 {
		self.k
	}

	fn check_evals_len(&self, evals: &[Scalar<C>]) -> Result<(), Error> {
		ensure!(
			evals.len() == self.g_lagrange.len(),
			Error::EvaluationsSizeMismatch {
				expected: self.g_lagrange.len(),
				got: evals.len(),
			}
		);
		Ok(())
	}
}

impl<C: CommitmentCurve> CommitmentScheme<C> for Pedersen<C> {
	fn n(&self) -> usize {
		self.g.len()
	}

	fn commit(&self, poly: &DensePolynomial<Scalar<C>>) -> Result<Commitment<C>, Error> {
		let len = poly.coeffs.len();
		ensure!(len <= self.g.len(), Error::PolynomialTooLarge { len, n: self.g.len() });

		Ok(Projective::<C>::msm_unchecked(&self.g[..len], &poly.coeffs).into_affine())
	}

	fn commit_lagrange(&self, evals: &[Scalar<C>]) -> Result<Commitment<C>, Error> {
		self.check_evals_len(evals)?;
		Ok(Projective::<C>::msm_unchecked(&self.g_lagrange, evals).into_affine())
	}

	fn commit_lagrange_blinded(
		&self,
		evals: &[Scalar<C>],
		blind: &Scalar<C>,
	) -> Result<Commitment<C>, Error> {
		self.check_evals_len(evals)?;
		let commitment = Projective::<C>::msm_unchecked(&self.g_lagrange, evals) + self.h * blind;
		Ok(commitment.into_affine())
	}
}
