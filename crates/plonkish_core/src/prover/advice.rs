// Copyright 2025 Irreducible Inc.

use ark_ff::PrimeField;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain};
use itertools::Itertools;
use plonkish_math::{RationalEvals, TableArena};
use rand::RngCore;
use rayon::prelude::*;
use tracing::{debug, instrument};

use super::{Error, Prover};
use crate::{
	circuit::Phase,
	pcs::{BlindedPolynomial, CommitmentScheme},
	transcript::TranscriptWrite,
	CommitmentCurve, ConstraintSystem,
};

/// Committed advice polynomials of one circuit, filled in phase by phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceSingle<F: PrimeField> {
	columns: Vec<Option<BlindedPolynomial<F>>>,
}

impl<F: PrimeField> AdviceSingle<F> {
	pub fn new(num_advice_columns: usize) -> Self {
		Self {
			columns: vec![None; num_advice_columns],
		}
	}

	/// Stores the polynomial of advice column `column`. Panics if the column already has one.
	pub fn set_blinded_polynomial(&mut self, column: usize, blinded: BlindedPolynomial<F>) {
		let slot = &mut self.columns[column];
		assert!(slot.is_none(), "advice column {column} assigned twice");
		*slot = Some(blinded);
	}

	pub fn is_assigned(&self, column: usize) -> bool {
		self.columns[column].is_some()
	}

	pub fn blinded_polynomial(&self, column: usize) -> Option<&BlindedPolynomial<F>> {
		self.columns[column].as_ref()
	}

	pub fn num_columns(&self) -> usize {
		self.columns.len()
	}

	pub fn advice_polys(&self) -> impl Iterator<Item = Option<&DensePolynomial<F>>> + '_ {
		self.columns
			.iter()
			.map(|column| column.as_ref().map(|blinded| &blinded.poly))
	}

	pub fn advice_blinds(&self) -> impl Iterator<Item = Option<F>> + '_ {
		self.columns
			.iter()
			.map(|column| column.as_ref().map(|blinded| blinded.blind))
	}
}

/// Turns the rational advice tables of a phase into committed polynomials.
#[derive(Debug, Clone)]
pub struct AdviceFactory<F: PrimeField> {
	advice_column_phases: Vec<Phase>,
	advice_singles: Vec<AdviceSingle<F>>,
}

impl<F: PrimeField> AdviceFactory<F> {
	pub fn new(num_circuits: usize, cs: &ConstraintSystem) -> Self {
		Self {
			advice_column_phases: cs.advice_column_phases().to_vec(),
			advice_singles: vec![AdviceSingle::new(cs.num_advice_columns()); num_circuits],
		}
	}

	/// Commits the advice columns of `phase` for circuit `circuit_idx`.
	///
	/// The tables of the phase are evaluated in one batched inversion. Each column then gets
	/// random values in its blinding rows with the last row set to one, and is committed
	/// under a fresh blind. Commitments are written to the proof in column order.
	#[instrument(
		"AdviceFactory::step",
		skip_all,
		level = "debug",
		fields(circuit_idx = circuit_idx, phase = phase.value())
	)]
	pub fn step<C, PCS, T, R>(
		&mut self,
		prover: &mut Prover<C, PCS, T, R>,
		circuit_idx: usize,
		phase: Phase,
		advice: &[RationalEvals<F>],
	) -> Result<(), Error>
	where
		C: CommitmentCurve<ScalarField = F>,
		PCS: CommitmentScheme<C> + Sync,
		T: TranscriptWrite<C>,
		R: RngCore,
	{
		assert!(circuit_idx < self.advice_singles.len());
		assert_eq!(advice.len(), self.advice_column_phases.len());

		let columns = self
			.advice_column_phases
			.iter()
			.positions(|column_phase| *column_phase == phase)
			.collect::<Vec<_>>();
		if columns.is_empty() {
			return Ok(());
		}

		let mut arena = TableArena::new();
		for &column in &columns {
			arena.insert(column, &advice[column])?;
		}
		let mut evaluated = arena.batch_evaluate(None)?;

		let n = prover.config().n();
		let blinds = evaluated
			.iter_mut()
			.map(|evals| {
				prover.blinder().blind(evals);
				evals[n - 1] = F::one();
				prover.blinder().generate::<F>()
			})
			.collect::<Vec<_>>();

		let pcs = prover.pcs();
		let domain = *prover.domain();
		let committed = evaluated
			.into_par_iter()
			.zip(blinds)
			.map(|(evals, blind)| -> Result<_, Error> {
				let commitment = pcs.commit_lagrange_blinded(&evals, &blind)?;
				let poly = DensePolynomial::from_coefficients_vec(domain.ifft(&evals));
				Ok((commitment, BlindedPolynomial::new(poly, blind)))
			})
			.collect::<Result<Vec<_>, Error>>()?;

		let single = &mut self.advice_singles[circuit_idx];
		for (column, (commitment, blinded)) in columns.into_iter().zip(committed) {
			prover.transcript().write_commitment_to_proof(&commitment)?;
			single.set_blinded_polynomial(column, blinded);
		}
		debug!(columns = single.columns.iter().flatten().count(), "advice committed");

		Ok(())
	}

	pub fn advice_singles(&self) -> &[AdviceSingle<F>] {
		&self.advice_singles
	}

	pub fn into_advice_singles(self) -> Vec<AdviceSingle<F>> {
		self.advice_singles
	}
}
