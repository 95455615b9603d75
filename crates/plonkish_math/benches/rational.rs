// Copyright 2025 Irreducible Inc.

use ark_bn254::Fr;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plonkish_math::{RationalEvals, RationalField, TableArena};
use rand::{rngs::StdRng, Rng, SeedableRng};

const LOG_ROWS: usize = 14;

fn random_table(rng: &mut StdRng) -> RationalEvals<Fr> {
	RationalEvals::from_vec(
		(0..1 << LOG_ROWS)
			.map(|_| {
				RationalField::from_fraction(
					Fr::from(rng.gen::<u64>()),
					Fr::from(rng.gen_range(1..u64::MAX)),
				)
			})
			.collect(),
	)
}

fn bench_batch_evaluate(c: &mut Criterion) {
	let mut group = c.benchmark_group("rational_batch_evaluate");
	let mut rng = StdRng::seed_from_u64(0);

	for n_tables in [1, 4, 16] {
		let tables = (0..n_tables)
			.map(|_| random_table(&mut rng))
			.collect::<Vec<_>>();
		group.throughput(Throughput::Elements((n_tables << LOG_ROWS) as u64));

		group.bench_with_input(BenchmarkId::new("per_table", n_tables), &tables, |b, tables| {
			b.iter(|| {
				tables
					.iter()
					.map(|table| table.evaluate().unwrap())
					.collect::<Vec<_>>()
			})
		});

		group.bench_with_input(BenchmarkId::new("arena", n_tables), &tables, |b, tables| {
			b.iter(|| {
				let mut arena = TableArena::new();
				for (key, table) in tables.iter().enumerate() {
					arena.insert(key, table).unwrap();
				}
				arena.batch_evaluate(None).unwrap()
			})
		});
	}
	group.finish();
}

criterion_group!(rational, bench_batch_evaluate);
criterion_main!(rational);
