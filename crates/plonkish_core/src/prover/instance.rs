// Copyright 2025 Irreducible Inc.

use ark_ff::PrimeField;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain};
use plonkish_utils::bail;
use rand::RngCore;
use rayon::prelude::*;
use tracing::instrument;

use super::{Error, Prover};
use crate::{
	circuit,
	pcs::CommitmentScheme,
	transcript::TranscriptWrite,
	CommitmentCurve,
};

/// Public inputs of one circuit, padded to the domain and interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSingle<F: PrimeField> {
	instance_values: Vec<Vec<F>>,
	instance_polys: Vec<DensePolynomial<F>>,
}

impl<F: PrimeField> InstanceSingle<F> {
	/// Pads every instance column with zeros to the domain size, interpolates it and binds it
	/// to the transcript.
	///
	/// When `query_instance` is set the verifier opens instance polynomials like any other
	/// column, so each padded table is committed and the commitment is absorbed. Otherwise the
	/// raw values are absorbed one by one.
	///
	/// ## Throws
	///
	/// * [`circuit::Error::InstanceTooLarge`] if a column has more values than usable rows;
	///   nothing is absorbed in that case
	#[instrument("InstanceSingle::generate", skip_all, level = "debug", fields(columns = instance.len()))]
	pub fn generate<C, PCS, T, R>(
		prover: &mut Prover<C, PCS, T, R>,
		instance: &[Vec<F>],
		query_instance: bool,
	) -> Result<Self, Error>
	where
		C: CommitmentCurve<ScalarField = F>,
		PCS: CommitmentScheme<C> + Sync,
		T: TranscriptWrite<C>,
		R: RngCore,
	{
		let n = prover.config().n();
		let usable_rows = prover.config().usable_rows().end;
		for (column, values) in instance.iter().enumerate() {
			if values.len() > usable_rows {
				bail!(circuit::Error::InstanceTooLarge {
					column,
					len: values.len(),
					usable_rows,
				});
			}
		}

		let instance_values = instance
			.iter()
			.map(|values| {
				let mut padded = values.clone();
				padded.resize(n, F::zero());
				padded
			})
			.collect::<Vec<_>>();

		let domain = *prover.domain();
		let instance_polys = instance_values
			.par_iter()
			.map(|values| DensePolynomial::from_coefficients_vec(domain.ifft(values)))
			.collect::<Vec<_>>();

		if query_instance {
			let pcs = prover.pcs();
			let commitments = instance_values
				.par_iter()
				.map(|values| pcs.commit_lagrange(values))
				.collect::<Result<Vec<_>, _>>()?;
			for commitment in &commitments {
				prover.transcript().write_commitment_to_transcript(commitment)?;
			}
		} else {
			for value in instance.iter().flatten() {
				prover.transcript().write_scalar_to_transcript(value)?;
			}
		}

		Ok(Self {
			instance_values,
			instance_polys,
		})
	}

	/// Padded instance tables, one per column.
	pub fn instance_values(&self) -> &[Vec<F>] {
		&self.instance_values
	}

	pub fn instance_polys(&self) -> &[DensePolynomial<F>] {
		&self.instance_polys
	}
}
