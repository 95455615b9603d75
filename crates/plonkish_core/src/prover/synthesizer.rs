// Copyright 2025 Irreducible Inc.

use ark_ff::PrimeField;
use rand::RngCore;
use tracing::{debug, instrument};

use super::{
	AdviceFactory, AdviceSingle, Challenges, Error, InstanceSingle, Prover, WitnessCollection,
};
use crate::{
	circuit::{Assignment, Circuit},
	pcs::CommitmentScheme,
	transcript::TranscriptWrite,
	CommitmentCurve, ConstraintSystem,
};

/// Runs the synthesis phases of a batch of circuits sharing one constraint system.
#[derive(Debug, Clone)]
pub struct Synthesizer<F: PrimeField> {
	num_circuits: usize,
	cs: ConstraintSystem,
	challenges: Challenges<F>,
	advice: AdviceFactory<F>,
}

impl<F: PrimeField> Synthesizer<F> {
	pub fn new(num_circuits: usize, cs: &ConstraintSystem) -> Self {
		Self {
			num_circuits,
			cs: cs.clone(),
			challenges: Challenges::new(),
			advice: AdviceFactory::new(num_circuits, cs),
		}
	}

	/// Synthesizes and commits the advice columns of every circuit, phase by phase.
	///
	/// Within a phase circuits are handled in order, and all their commitments reach the
	/// transcript before the challenges following the phase are squeezed, in challenge index
	/// order. A phase without advice columns only squeezes its challenges.
	///
	/// Panics if `circuits` or `instances` do not hold one entry per circuit.
	#[instrument(
		"Synthesizer::generate_advice_columns",
		skip_all,
		level = "debug",
		fields(num_circuits = self.num_circuits)
	)]
	pub fn generate_advice_columns<Ci, C, PCS, T, R>(
		&mut self,
		prover: &mut Prover<C, PCS, T, R>,
		circuits: &[Ci],
		instances: &[InstanceSingle<F>],
	) -> Result<(), Error>
	where
		Ci: Circuit<F>,
		C: CommitmentCurve<ScalarField = F>,
		PCS: CommitmentScheme<C> + Sync,
		T: TranscriptWrite<C>,
		R: RngCore,
	{
		assert_eq!(circuits.len(), self.num_circuits);
		assert_eq!(instances.len(), self.num_circuits);

		let mut meta = ConstraintSystem::new();
		let config = Ci::configure(&mut meta);

		for phase in self.cs.phases() {
			if self.cs.advice_columns_in(phase).next().is_some() {
				for (circuit_idx, (circuit, instance)) in circuits.iter().zip(instances).enumerate() {
					let mut witness = WitnessCollection::new(
						prover.config(),
						self.cs.num_advice_columns(),
						phase,
						&self.challenges,
						instance.instance_values(),
					);
					circuit.synthesize(
						config.clone(),
						&mut Assignment::Witness(&mut witness),
						meta.constants(),
					)?;

					let advice = witness.into_advice();
					self.advice.step(prover, circuit_idx, phase, &advice)?;
				}
			}

			for (index, challenge_phase) in self.cs.challenge_phases().iter().enumerate() {
				if *challenge_phase == phase {
					let challenge = prover.transcript().squeeze_challenge();
					self.challenges.insert(index, challenge);
				}
			}
			debug!(phase = phase.value(), challenges = self.challenges.len(), "phase done");
		}

		Ok(())
	}

	pub fn challenges(&self) -> &Challenges<F> {
		&self.challenges
	}

	/// Derived challenges ordered by challenge index.
	pub fn export_challenges(&self) -> Vec<F> {
		self.challenges.clone().into_vec()
	}

	pub fn advice_singles(&self) -> &[AdviceSingle<F>] {
		self.advice.advice_singles()
	}

	pub fn into_advice_singles(self) -> Vec<AdviceSingle<F>> {
		self.advice.into_advice_singles()
	}
}
