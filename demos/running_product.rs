// Copyright 2025 Irreducible Inc.

use anyhow::{ensure, Result};
use ark_bn254::{g1::Config as G1, Fr};
use ark_ff::Field;
use clap::{value_parser, Parser};
use plonkish_core::{
	circuit::{
		Advice, Assignment, Challenge, Circuit, Column, Error, Fixed, Instance, Value, FIRST_PHASE,
		SECOND_PHASE,
	},
	keygen::generate_fixed_tables,
	pcs::Pedersen,
	prover::{InstanceSingle, Prover, ProverConfig, Synthesizer},
	transcript::Sha256Writer,
	ConstraintSystem,
};
use plonkish_math::RationalField;
use plonkish_utils::{rayon::adjust_thread_pool, tracing::init_tracing};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, Parser)]
struct Args {
	/// Base-2 logarithm of the number of rows.
	#[arg(long, default_value_t = 10, value_parser = value_parser!(u32).range(4..24))]
	log_rows: u32,
	/// Number of independent circuits proven together.
	#[arg(long, default_value_t = 2, value_parser = value_parser!(u32).range(1..))]
	n_circuits: u32,
}

#[derive(Clone, Debug)]
struct RunningProductConfig {
	input: Column<Advice>,
	inverse: Column<Advice>,
	product: Column<Advice>,
	instance: Column<Instance>,
	gamma: Challenge,
}

/// Commits to `input` first, then to `1 / (input + gamma)` and the running product of
/// `input + gamma` once `gamma` has been squeezed. `input[0]` is public.
struct RunningProduct {
	inputs: Vec<Fr>,
}

impl Circuit<Fr> for RunningProduct {
	type Config = RunningProductConfig;

	fn configure(meta: &mut ConstraintSystem) -> RunningProductConfig {
		let input = meta.advice_column();
		let instance = meta.instance_column();
		meta.enable_equality(input);
		meta.enable_equality(instance);
		meta.query_advice(input);

		let gamma = meta.challenge_usable_after(FIRST_PHASE);
		let inverse = meta.advice_column_in(SECOND_PHASE);
		let product = meta.advice_column_in(SECOND_PHASE);
		meta.query_advice(product);
		meta.query_advice(product);

		RunningProductConfig {
			input,
			inverse,
			product,
			instance,
			gamma,
		}
	}

	fn synthesize(
		&self,
		config: RunningProductConfig,
		assignment: &mut Assignment<'_, '_, Fr>,
		_constants: &[Column<Fixed>],
	) -> Result<(), Error> {
		assignment.enter_region("running product");
		let gamma = assignment.get_challenge(config.gamma);

		let mut product = Value::known(Fr::ONE);
		for (row, &input) in self.inputs.iter().enumerate() {
			let input = Value::known(input);
			let shifted = input + gamma;

			assignment.assign_advice(config.input, row, || input.map(RationalField::new))?;
			assignment.assign_advice(config.inverse, row, || {
				shifted.map(|shifted| RationalField::new(shifted).invert())
			})?;
			product = product * shifted;
			assignment.assign_advice(config.product, row, || product.map(RationalField::new))?;
		}

		assignment.copy(config.input.into(), 0, config.instance.into(), 0)?;
		assignment.exit_region();
		Ok(())
	}
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.expect("failed to init thread pool");

	let args = Args::parse();
	init_tracing();

	let mut cs = ConstraintSystem::new();
	let _ = <RunningProduct as Circuit<Fr>>::configure(&mut cs);
	let config = ProverConfig::for_circuit(args.log_rows, &cs)?;
	let n_inputs = config.usable_rows().len();

	println!(
		"Proving {} running products over {} rows ({} blinding rows)",
		args.n_circuits,
		config.n(),
		config.blinding_factors()
	);

	let mut rng = StdRng::seed_from_u64(0);
	let circuits = (0..args.n_circuits)
		.map(|_| RunningProduct {
			inputs: (0..n_inputs).map(|_| Fr::from(rng.gen::<u64>())).collect(),
		})
		.collect::<Vec<_>>();

	let pcs = Pedersen::<G1>::setup(args.log_rows, &mut rng)?;

	let tables = generate_fixed_tables::<G1, _, _>(&pcs, &config, &circuits[0])?;
	tracing::info!(
		fixed_columns = tables.fixed_values.len(),
		permutation_columns = tables.permutation.columns().len(),
		"generated fixed tables"
	);

	let mut prover = Prover::<G1, _, _, _>::new(config, &pcs, Sha256Writer::<G1>::new(), rng)?;

	let instances = circuits
		.iter()
		.map(|circuit| InstanceSingle::generate(&mut prover, &[vec![circuit.inputs[0]]], false))
		.collect::<Result<Vec<_>, _>>()?;

	let mut synthesizer = Synthesizer::new(circuits.len(), &cs);
	synthesizer.generate_advice_columns(&mut prover, &circuits, &instances)?;

	let challenges = synthesizer.export_challenges();
	ensure!(challenges.len() == 1, "expected one challenge, got {}", challenges.len());
	tracing::info!(gamma = %challenges[0], "squeezed challenge");

	let proof = prover.into_transcript().finalize();
	println!("Proof size: {} bytes", proof.len());

	Ok(())
}
