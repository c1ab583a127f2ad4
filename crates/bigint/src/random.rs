// Copyright 2025 Irreducible Inc.

use rand::{
	Rng,
	distr::{Distribution, StandardUniform},
};

use crate::{cmp::is_less, limb::Limb, uint::BigInt};

impl<const N: usize> Distribution<BigInt<N>> for StandardUniform {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt<N> {
		let mut limbs = [Limb::ZERO; N];
		for limb in &mut limbs {
			*limb = Limb(rng.random());
		}
		BigInt { limbs }
	}
}

/// Samples a value uniformly from `[0, bound)` by masked rejection.
///
/// Only as many limbs as the bound occupies are drawn, and the top limb is masked down to
/// the bound's bit length, so the expected number of rounds is below two. Panics if the
/// bound is zero.
pub fn random_mod<const N: usize, R: Rng + ?Sized>(rng: &mut R, bound: &BigInt<N>) -> BigInt<N> {
	assert!(!bound.is_zero(), "empty sampling range");
	let bits = bound.bit_length();
	let limbs_needed = bits.div_ceil(Limb::BITS);
	let mask = if bits % Limb::BITS == 0 {
		u64::MAX
	} else {
		(1u64 << (bits % Limb::BITS)) - 1
	};
	loop {
		let mut limbs = [Limb::ZERO; N];
		for limb in limbs.iter_mut().take(limbs_needed) {
			*limb = Limb(rng.random());
		}
		limbs[limbs_needed - 1].0 &= mask;
		let candidate = BigInt { limbs };
		if is_less(&candidate, bound) {
			return candidate;
		}
	}
}
