// Copyright 2025 Irreducible Inc.

//! Key generation: the circuit-dependent tables shared by every proof.

mod assembly;

use ark_poly::{
	univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, Radix2EvaluationDomain,
};
pub use assembly::Assembly;
use plonkish_math::TableArena;
use plonkish_utils::ensure;
use rayon::prelude::*;
use tracing::instrument;

use crate::{
	circuit::{Assignment, Circuit},
	pcs::CommitmentScheme,
	permutation::PermutationAssembly,
	prover::{Error, ProverConfig},
	Commitment, CommitmentCurve, ConstraintSystem, Scalar,
};

/// Fixed columns of a circuit, followed by one column per selector.
#[derive(Debug, Clone)]
pub struct FixedTables<C: CommitmentCurve> {
	pub cs: ConstraintSystem,
	pub fixed_values: Vec<Vec<Scalar<C>>>,
	pub fixed_polys: Vec<DensePolynomial<Scalar<C>>>,
	pub fixed_commitments: Vec<Commitment<C>>,
	pub permutation: PermutationAssembly,
}

/// Synthesizes `circuit` against an [`Assembly`] and commits its fixed and selector columns.
#[instrument("keygen::generate_fixed_tables", skip_all, level = "debug", fields(k = config.k()))]
pub fn generate_fixed_tables<C, PCS, Ci>(
	pcs: &PCS,
	config: &ProverConfig,
	circuit: &Ci,
) -> Result<FixedTables<C>, Error>
where
	C: CommitmentCurve,
	PCS: CommitmentScheme<C> + Sync,
	Ci: Circuit<Scalar<C>>,
{
	ensure!(
		pcs.n() == config.n(),
		Error::CommitmentSchemeSizeMismatch {
			pcs_n: pcs.n(),
			n: config.n(),
		}
	);
	let domain =
		Radix2EvaluationDomain::<Scalar<C>>::new(config.n()).ok_or(Error::InvalidConfig {
			k: config.k(),
			blinding_factors: config.blinding_factors(),
		})?;

	let mut cs = ConstraintSystem::new();
	let circuit_config = Ci::configure(&mut cs);

	let mut assembly = Assembly::new(config, &cs);
	circuit.synthesize(circuit_config, &mut Assignment::Assembly(&mut assembly), cs.constants())?;
	let (fixed, permutation, selectors) = assembly.into_parts();

	let mut arena = TableArena::new();
	for (index, table) in fixed.iter().enumerate() {
		arena.insert(index, table)?;
	}
	let mut fixed_values = arena.batch_evaluate(None)?;
	fixed_values.extend(selectors.into_iter().map(|selector| {
		selector
			.into_iter()
			.map(Scalar::<C>::from)
			.collect::<Vec<_>>()
	}));

	let (fixed_polys, fixed_commitments): (Vec<_>, Vec<_>) = fixed_values
		.par_iter()
		.map(|values| -> Result<_, Error> {
			let poly = DensePolynomial::from_coefficients_vec(domain.ifft(values));
			Ok((poly, pcs.commit_lagrange(values)?))
		})
		.collect::<Result<Vec<_>, _>>()?
		.into_iter()
		.unzip();

	Ok(FixedTables {
		cs,
		fixed_values,
		fixed_polys,
		fixed_commitments,
		permutation,
	})
}
