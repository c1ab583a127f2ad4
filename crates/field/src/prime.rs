// Copyright 2025 Irreducible Inc.
//! Miller–Rabin primality testing.

use bigmod_int::{
	BigInt, add_ignore_carry, compare, div_rem, mod_exp, mod_mul, random_mod, shr,
	subtract_ignore_carry,
};
use rand::Rng;
use std::cmp::Ordering;

/// Witnesses that make Miller–Rabin deterministic for all candidates below 2^78.
const SMALL_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Bit length up to which [`SMALL_WITNESSES`] is a proof of primality.
const DETERMINISTIC_BITS: usize = 78;

/// Random rounds used beyond the deterministic range; error probability at most 4^-40.
const RANDOM_ROUNDS: usize = 40;

/// Small primes for cheap trial division ahead of the modular exponentiations.
const TRIAL_PRIMES: [u64; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Whether `n` is prime.
///
/// Deterministic for candidates below 2^78 via the fixed witness set; beyond that, the
/// fixed witnesses are followed by [`RANDOM_ROUNDS`] rounds with bases drawn from
/// [`rand::rng`]. Composites are rejected, Carmichael numbers included; the error
/// probability on the randomized path is negligible but non-zero.
pub fn is_prime<const N: usize>(n: &BigInt<N>) -> bool {
	is_prime_with_rng(n, RANDOM_ROUNDS, &mut rand::rng())
}

/// [`is_prime`] with the randomized rounds drawn from a caller-provided generator.
pub fn is_prime_with_rng<const N: usize, R: Rng + ?Sized>(
	n: &BigInt<N>,
	rounds: usize,
	rng: &mut R,
) -> bool {
	let two = BigInt::<N>::from_u64(2);
	match compare(n, &two) {
		Ordering::Less => return false,
		Ordering::Equal => return true,
		Ordering::Greater => {}
	}
	if n.is_even() {
		return false;
	}
	for p in TRIAL_PRIMES {
		let p_big = BigInt::<N>::from_u64(p);
		if compare(n, &p_big) == Ordering::Equal {
			return true;
		}
		if div_rem(n, &BigInt::<1>::from_u64(p)).remainder.is_zero() {
			return false;
		}
	}

	// n - 1 = 2^s * d with d odd
	let n_minus_1 = subtract_ignore_carry(n, &BigInt::ONE);
	let mut d = n_minus_1;
	let mut s = 0usize;
	while d.is_even() {
		d = shr(&d, 1);
		s += 1;
	}

	for w in SMALL_WITNESSES {
		let witness = div_rem(&BigInt::<N>::from_u64(w), n).remainder;
		if witness.is_zero() {
			continue;
		}
		if !miller_rabin_round(n, &n_minus_1, &d, s, &witness) {
			return false;
		}
	}
	if n.bit_length() <= DETERMINISTIC_BITS {
		return true;
	}

	// Bases uniform in [2, n - 2]
	let three = BigInt::<N>::from_u64(3);
	let span = subtract_ignore_carry(n, &three);
	for _ in 0..rounds {
		let witness = add_ignore_carry(&random_mod(rng, &span), &two);
		if !miller_rabin_round(n, &n_minus_1, &d, s, &witness) {
			return false;
		}
	}
	true
}

/// One strong-pseudoprime round: returns false iff `witness` proves `n` composite.
fn miller_rabin_round<const N: usize>(
	n: &BigInt<N>,
	n_minus_1: &BigInt<N>,
	d: &BigInt<N>,
	s: usize,
	witness: &BigInt<N>,
) -> bool {
	let mut x = mod_exp(witness, d, n);
	if compare(&x, &BigInt::ONE) == Ordering::Equal
		|| compare(&x, n_minus_1) == Ordering::Equal
	{
		return true;
	}
	for _ in 1..s {
		x = mod_mul(&x, &x, n);
		if compare(&x, n_minus_1) == Ordering::Equal {
			return true;
		}
	}
	false
}
