// Copyright 2025 Irreducible Inc.

use ark_bn254::{g1::Config as G1, Fr, G1Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plonkish_core::transcript::{
	Sha256Reader, Sha256Writer, Transcript, TranscriptRead, TranscriptWrite,
};
use rand::{rngs::StdRng, SeedableRng};

fn bench_transcript(c: &mut Criterion) {
	let mut group = c.benchmark_group("sha256_transcript");
	let mut rng = StdRng::seed_from_u64(0);

	for n_messages in [16, 256] {
		let points = (0..n_messages)
			.map(|_| (G1Affine::generator() * Fr::rand(&mut rng)).into_affine())
			.collect::<Vec<_>>();
		let scalars = (0..n_messages)
			.map(|_| Fr::rand(&mut rng))
			.collect::<Vec<_>>();
		group.throughput(Throughput::Elements(2 * n_messages as u64));

		let write = || {
			let mut writer = Sha256Writer::<G1>::new();
			for (point, scalar) in points.iter().zip(&scalars) {
				writer.write_commitment_to_proof(point).unwrap();
				writer.write_scalar_to_proof(scalar).unwrap();
				writer.squeeze_challenge();
			}
			writer
		};

		group.bench_function(BenchmarkId::new("write", n_messages), |b| b.iter(&write));

		let proof = write().finalize();
		group.bench_with_input(BenchmarkId::new("read", n_messages), &proof, |b, proof| {
			b.iter(|| {
				let mut reader = Sha256Reader::<G1>::new(proof.clone());
				for _ in 0..n_messages {
					reader.read_commitment_from_proof().unwrap();
					reader.read_scalar_from_proof().unwrap();
					reader.squeeze_challenge();
				}
				reader.finalize().unwrap()
			})
		});
	}
	group.finish();
}

criterion_group!(transcript, bench_transcript);
criterion_main!(transcript);
