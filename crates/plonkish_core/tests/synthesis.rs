// Copyright 2025 Irreducible Inc.

use std::cell::Cell;

use ark_bn254::{g1::Config as G1, Fr};
use ark_ff::{One, PrimeField};
use ark_poly::EvaluationDomain;
use plonkish_core::{
	circuit::{
		Advice, Assignment, Challenge, Circuit, Column, Error, Fixed, Instance, Selector, Value,
		FIRST_PHASE, SECOND_PHASE,
	},
	keygen::generate_fixed_tables,
	pcs::{CommitmentScheme, Pedersen},
	prover::{InstanceSingle, Prover, ProverConfig, Synthesizer},
	transcript::{Sha256Reader, Sha256Writer, Transcript, TranscriptRead},
	ConstraintSystem,
};
use plonkish_math::RationalField;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Clone, Debug)]
struct ScaleConfig {
	a: Column<Advice>,
	b: Column<Advice>,
	instance: Column<Instance>,
	fixed: Column<Fixed>,
	selector: Selector,
	theta: Challenge,
}

/// Witnesses `a` in the first phase and `b = theta * a` in the second, where `theta` is
/// squeezed after the first phase. `a[0]` is copied to the first public input.
struct ScaleCircuit {
	values: Vec<u64>,
	a_calls: Cell<usize>,
	b_calls: Cell<usize>,
}

impl ScaleCircuit {
	fn new(values: Vec<u64>) -> Self {
		Self {
			values,
			a_calls: Cell::new(0),
			b_calls: Cell::new(0),
		}
	}
}

impl<F: PrimeField> Circuit<F> for ScaleCircuit {
	type Config = ScaleConfig;

	fn configure(meta: &mut ConstraintSystem) -> ScaleConfig {
		let a = meta.advice_column();
		let instance = meta.instance_column();
		let fixed = meta.fixed_column();
		let selector = meta.selector();
		meta.enable_equality(a);
		meta.enable_equality(instance);
		let theta = meta.challenge_usable_after(FIRST_PHASE);
		let b = meta.advice_column_in(SECOND_PHASE);
		ScaleConfig {
			a,
			b,
			instance,
			fixed,
			selector,
			theta,
		}
	}

	fn synthesize(
		&self,
		config: ScaleConfig,
		assignment: &mut Assignment<'_, '_, F>,
		_constants: &[Column<Fixed>],
	) -> Result<(), Error> {
		assignment.enter_region("scale");
		let theta = assignment.get_challenge(config.theta);
		for (row, &value) in self.values.iter().enumerate() {
			assignment.enable_selector(&config.selector, row)?;
			assignment.assign_fixed(config.fixed, row, || {
				Value::known(RationalField::new(F::from(row as u64 + 1)))
			})?;

			let a = Value::known(F::from(value));
			assignment.assign_advice(config.a, row, || {
				self.a_calls.set(self.a_calls.get() + 1);
				a.map(RationalField::new)
			})?;
			assignment.assign_advice(config.b, row, || {
				self.b_calls.set(self.b_calls.get() + 1);
				(a * theta).map(RationalField::new)
			})?;
		}
		assignment.copy(config.a.into(), 0, config.instance.into(), 0)?;
		assignment.exit_region();
		Ok(())
	}
}

const K: u32 = 3;
const BLINDING_FACTORS: usize = 2;

fn config() -> ProverConfig {
	ProverConfig::new(K, BLINDING_FACTORS).unwrap()
}

fn circuits() -> Vec<ScaleCircuit> {
	vec![ScaleCircuit::new(vec![3, 5, 7]), ScaleCircuit::new(vec![11, 13])]
}

#[test]
fn test_two_phase_synthesis() {
	let circuits = circuits();
	let mut cs = ConstraintSystem::new();
	let _: ScaleConfig = <ScaleCircuit as Circuit<Fr>>::configure(&mut cs);

	let pcs = Pedersen::<G1>::from_seed(K, 0).unwrap();
	let mut prover = Prover::<G1, _, _, _>::new(
		config(),
		Pedersen::from_seed(K, 0).unwrap(),
		Sha256Writer::<G1>::new(),
		StdRng::seed_from_u64(1),
	)
	.unwrap();

	let instances = circuits
		.iter()
		.map(|circuit| vec![vec![Fr::from(circuit.values[0])]])
		.collect::<Vec<_>>();
	let instance_singles = instances
		.iter()
		.map(|instance| InstanceSingle::generate(&mut prover, instance, false))
		.collect::<Result<Vec<_>, _>>()
		.unwrap();

	let mut synthesizer = Synthesizer::new(circuits.len(), &cs);
	synthesizer
		.generate_advice_columns(&mut prover, &circuits, &instance_singles)
		.unwrap();

	// `a` is reported in both phases, `b` only once its challenge exists.
	for circuit in &circuits {
		assert_eq!(circuit.a_calls.get(), 2 * circuit.values.len());
		assert_eq!(circuit.b_calls.get(), circuit.values.len());
	}

	let challenges = synthesizer.export_challenges();
	assert_eq!(challenges.len(), 1);
	let theta = challenges[0];

	let domain = *prover.domain();
	let proof = prover.into_transcript().finalize();
	let advice_singles = synthesizer.into_advice_singles();

	// Replay the proof: instance values, first phase commitments, theta, second phase.
	let mut reader = Sha256Reader::<G1>::new(proof);
	for instance in &instances {
		for value in instance.iter().flatten() {
			reader.write_scalar_to_transcript(value).unwrap();
		}
	}

	for (column, phase_theta) in [(0, None), (1, Some(theta))] {
		for (circuit, single) in circuits.iter().zip(&advice_singles) {
			let commitment = reader.read_commitment_from_proof().unwrap();
			let blinded = single.blinded_polynomial(column).unwrap();
			let evals = domain.fft(&blinded.poly.coeffs);
			assert_eq!(commitment, pcs.commit_lagrange_blinded(&evals, &blinded.blind).unwrap());

			for (row, &value) in circuit.values.iter().enumerate() {
				let expected = Fr::from(value) * phase_theta.unwrap_or(Fr::one());
				assert_eq!(evals[row], expected);
			}
			assert_eq!(evals[domain.size() - 1], Fr::one());
		}
		if phase_theta.is_none() {
			assert_eq!(reader.squeeze_challenge(), theta);
		}
	}
	reader.finalize().unwrap();
}

#[test]
fn test_keygen_records_fixed_columns() {
	let config = config();
	let pcs = Pedersen::<G1>::from_seed(K, 0).unwrap();
	let circuit = ScaleCircuit::new(vec![3, 5, 7]);

	let tables = generate_fixed_tables::<G1, _, _>(&pcs, &config, &circuit).unwrap();
	assert_eq!(circuit.a_calls.get(), 0);
	assert_eq!(circuit.b_calls.get(), 0);

	// One fixed column followed by one selector column.
	assert_eq!(tables.fixed_values.len(), 2);
	let one = Fr::one();
	let zero = Fr::from(0u64);
	assert_eq!(
		tables.fixed_values[0],
		vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64), zero, zero, zero, zero, zero]
	);
	assert_eq!(tables.fixed_values[1], vec![one, one, one, zero, zero, zero, zero, zero]);

	for (values, commitment) in tables.fixed_values.iter().zip(&tables.fixed_commitments) {
		assert_eq!(*commitment, pcs.commit_lagrange(values).unwrap());
	}
	let domain = ark_poly::Radix2EvaluationDomain::<Fr>::new(config.n()).unwrap();
	assert_eq!(domain.fft(&tables.fixed_polys[0].coeffs), tables.fixed_values[0]);

	// a[0] and instance[0] form one cycle.
	let mut cycle = tables.permutation.cycle((0, 0));
	cycle.sort();
	assert_eq!(cycle, vec![(0, 0), (1, 0)]);
	assert_eq!(tables.cs.num_selectors(), 1);
}
