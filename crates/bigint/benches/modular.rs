// Copyright 2025 Irreducible Inc.
use bigmod_int::{BigInt, MontgomeryParams, mod_exp};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

const M: BigInt<4> = BigInt::from_decimal(
	"14474011154664524427946373126085988481658748083205070504932198000989141205031",
);

fn random_reduced(rng: &mut StdRng) -> BigInt<4> {
	let mut words = [0u64; 4];
	loop {
		for w in &mut words {
			*w = rng.random();
		}
		let candidate = BigInt::from_words(words);
		if candidate < M {
			return candidate;
		}
	}
}

fn bench_montgomery_mul(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	let params = MontgomeryParams::new(M);
	let inputs: Vec<(BigInt<4>, BigInt<4>)> = (0..1000)
		.map(|_| (random_reduced(&mut rng), random_reduced(&mut rng)))
		.collect();
	let mut i = 0;
	c.bench_function("montgomery_mul/4", |b| {
		b.iter(|| {
			let (x, y) = &inputs[i];
			i = (i + 1) % inputs.len();
			std::hint::black_box(params.mul(x, y))
		})
	});
}

fn bench_mod_exp(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	let inputs: Vec<(BigInt<4>, BigInt<4>)> = (0..100)
		.map(|_| (random_reduced(&mut rng), random_reduced(&mut rng)))
		.collect();
	let mut i = 0;
	c.bench_function("mod_exp/4", |b| {
		b.iter(|| {
			let (base, exp) = &inputs[i];
			i = (i + 1) % inputs.len();
			std::hint::black_box(mod_exp(base, exp, &M))
		})
	});
}

criterion_group!(benches, bench_montgomery_mul, bench_mod_exp);
criterion_main!(benches);
