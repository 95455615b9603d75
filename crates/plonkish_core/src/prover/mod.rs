// Copyright 2025 Irreducible Inc.

//! Proof generation up to the commitment of the advice columns.
//!
//! The [`Synthesizer`] drives each circuit through its synthesis phases. Every phase fills a
//! fresh [`WitnessCollection`]; the [`AdviceFactory`] turns its rational tables into blinded,
//! committed polynomials and writes the commitments to the proof; the challenges following the
//! phase are then squeezed from the transcript and fed to the next phase.

mod advice;
mod blinder;
mod challenges;
mod config;
mod error;
mod instance;
mod synthesizer;
mod witness_collection;

use std::marker::PhantomData;

pub use advice::{AdviceFactory, AdviceSingle};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
pub use blinder::Blinder;
pub use challenges::Challenges;
pub use config::ProverConfig;
pub use error::Error;
pub use instance::InstanceSingle;
use plonkish_utils::ensure;
use rand::RngCore;
pub use synthesizer::Synthesizer;
pub use witness_collection::WitnessCollection;

use crate::{pcs::CommitmentScheme, transcript::TranscriptWrite, CommitmentCurve, Scalar};

/// Everything proof generation needs: the domain, the commitment scheme, the blinding
/// randomness and the transcript the proof is written to.
#[derive(Debug)]
pub struct Prover<C: CommitmentCurve, PCS, T, R> {
	config: ProverConfig,
	pcs: PCS,
	domain: Radix2EvaluationDomain<Scalar<C>>,
	blinder: Blinder<R>,
	transcript: T,
	_marker: PhantomData<C>,
}

impl<C, PCS, T, R> Prover<C, PCS, T, R>
where
	C: CommitmentCurve,
	PCS: CommitmentScheme<C>,
	T: TranscriptWrite<C>,
	R: RngCore,
{
	/// ## Throws
	///
	/// * [`Error::CommitmentSchemeSizeMismatch`] if `pcs` does not commit to `2^k` values
	/// * [`Error::InvalidConfig`] if the scalar field has no domain of `2^k` rows
	pub fn new(config: ProverConfig, pcs: PCS, transcript: T, rng: R) -> Result<Self, Error> {
		ensure!(
			pcs.n() == config.n(),
			Error::CommitmentSchemeSizeMismatch {
				pcs_n: pcs.n(),
				n: config.n(),
			}
		);
		let domain = Radix2EvaluationDomain::new(config.n()).ok_or(Error::InvalidConfig {
			k: config.k(),
			blinding_factors: config.blinding_factors(),
		})?;

		Ok(Self {
			config,
			pcs,
			domain,
			blinder: Blinder::new(rng, config.blinding_factors()),
			transcript,
			_marker: PhantomData,
		})
	}

	pub fn config(&self) -> &ProverConfig {
		&self.config
	}

	pub fn pcs(&self) -> &PCS {
		&self.pcs
	}

	pub fn domain(&self) -> &Radix2EvaluationDomain<Scalar<C>> {
		&self.domain
	}

	pub fn blinder(&mut self) -> &mut Blinder<R> {
		&mut self.blinder
	}

	pub fn transcript(&mut self) -> &mut T {
		&mut self.transcript
	}

	pub fn into_transcript(self) -> T {
		self.transcript
	}
}
