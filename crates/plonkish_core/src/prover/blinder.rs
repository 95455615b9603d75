// Copyright 2025 Irreducible Inc.

use ark_ff::UniformRand;
use rand::RngCore;

/// Source of the randomness that makes committed columns zero knowledge.
#[derive(Debug)]
pub struct Blinder<R> {
	rng: R,
	blinding_factors: usize,
}

impl<R: RngCore> Blinder<R> {
	pub fn new(rng: R, blinding_factors: usize) -> Self {
		Self {
			rng,
			blinding_factors,
		}
	}

	pub fn blinding_factors(&self) -> usize {
		self.blinding_factors
	}

	/// Overwrites the last `blinding_factors` rows of `evals` with random values.
	///
	/// Panics if `evals` is shorter than the blinding region.
	pub fn blind<F: UniformRand>(&mut self, evals: &mut [F]) {
		assert!(evals.len() >= self.blinding_factors);
		let start = evals.len() - self.blinding_factors;
		for eval in &mut evals[start..] {
			*eval = F::rand(&mut self.rng);
		}
	}

	/// Draws a fresh blinding scalar.
	pub fn generate<F: UniformRand>(&mut self) -> F {
		F::rand(&mut self.rng)
	}
}

#[cfg(test)]
mod tests {
	use ark_bn254::Fr;
	use ark_ff::Zero;
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;

	#[test]
	fn test_blind_touches_only_reserved_rows() {
		let mut blinder = Blinder::new(StdRng::seed_from_u64(0), 3);
		let mut evals = vec![Fr::zero(); 8];
		blinder.blind(&mut evals);
		assert!(evals[..5].iter().all(Fr::is_zero));
		assert!(evals[5..].iter().all(|eval| !eval.is_zero()));
	}

	#[test]
	fn test_blinds_are_fresh() {
		let mut blinder = Blinder::new(StdRng::seed_from_u64(0), 1);
		let a: Fr = blinder.generate();
		let b: Fr = blinder.generate();
		assert_ne!(a, b);
	}
}
