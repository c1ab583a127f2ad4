// Copyright 2025 Irreducible Inc.
//! Modular arithmetic over `BigInt` values.
//!
//! Every routine here is a `const fn` from values to values. `mod_add`/`mod_sub` expect
//! operands already reduced below the modulus; `mod_mul`, `mod_exp` and `mod_inv` accept any
//! operand and reduce internally.

use crate::{
	addsub::{add, sub_borrow, subtract_ignore_carry},
	cmp::is_less,
	div::{div_rem, rem_wide},
	mul::mul_wide,
	uint::BigInt,
};

/// Computes `(a + b) mod m` for `a, b < m`.
///
/// One addition and at most one conditional subtraction.
pub const fn mod_add<const N: usize>(a: &BigInt<N>, b: &BigInt<N>, m: &BigInt<N>) -> BigInt<N> {
	let (sum, carry) = add(a, b);
	if carry.0 != 0 || !is_less(&sum, m) {
		subtract_ignore_carry(&sum, m)
	} else {
		sum
	}
}

/// Computes `(a - b + m) mod m` for `a, b < m`.
pub const fn mod_sub<const N: usize>(a: &BigInt<N>, b: &BigInt<N>, m: &BigInt<N>) -> BigInt<N> {
	let (diff, borrow) = sub_borrow(a, b);
	if borrow.0 != 0 {
		// The wrap already added 2^(N*64); adding m modulo 2^(N*64) lands on a - b + m.
		crate::addsub::add_ignore_carry(&diff, m)
	} else {
		diff
	}
}

/// Computes `(a * b) mod m`.
///
/// The full double-width product is formed first, then reduced; no operand needs to be
/// below the modulus. Panics if `m` is zero.
pub const fn mod_mul<const N: usize>(a: &BigInt<N>, b: &BigInt<N>, m: &BigInt<N>) -> BigInt<N> {
	let (lo, hi) = mul_wide(a, b);
	rem_wide(&lo, &hi, m)
}

/// Computes `base^exp mod m` by left-to-right square-and-multiply over the bits of `exp`.
///
/// The exponent may be of any width. `exp = 0` yields `1 mod m` (which is zero for `m = 1`).
/// Panics if `m` is zero.
pub const fn mod_exp<const N: usize, const E: usize>(
	base: &BigInt<N>,
	exp: &BigInt<E>,
	m: &BigInt<N>,
) -> BigInt<N> {
	let mut result = div_rem(&BigInt::<N>::ONE, m).remainder;
	let mut i = exp.bit_length();
	while i > 0 {
		i -= 1;
		result = mod_mul(&result, &result, m);
		if exp.bit(i) {
			result = mod_mul(&result, base, m);
		}
	}
	result
}

/// Greatest common divisor by Euclid's algorithm.
pub const fn gcd<const N: usize>(a: &BigInt<N>, b: &BigInt<N>) -> BigInt<N> {
	let mut a = *a;
	let mut b = *b;
	while !b.is_zero() {
		let r = div_rem(&a, &b).remainder;
		a = b;
		b = r;
	}
	a
}

/// Computes the multiplicative inverse of `a` modulo `m`, if it exists.
///
/// Extended Euclid with the Bezout coefficient tracked as a reduced non-negative residue.
/// Returns `None` when `gcd(a, m) != 1`. For `a < m` the postcondition is
/// `(a * inv) mod m == 1`.
pub const fn mod_inv<const N: usize>(a: &BigInt<N>, m: &BigInt<N>) -> Option<BigInt<N>> {
	if m.is_zero() {
		return None;
	}
	let mut old_r = *m;
	let mut r = div_rem(a, m).remainder;
	// Invariant: old_s * a == old_r (mod m) and s * a == r (mod m).
	let mut old_s = BigInt::<N>::ZERO;
	let mut s = div_rem(&BigInt::<N>::ONE, m).remainder;
	while !r.is_zero() {
		let step = div_rem(&old_r, &r);
		old_r = r;
		r = step.remainder;
		let qs = mod_mul(&step.quotient, &s, m);
		let next_s = mod_sub(&old_s, &qs, m);
		old_s = s;
		s = next_s;
	}
	// old_r is gcd(a, m); the inverse exists iff it is one.
	if matches!(crate::cmp::compare(&old_r, &BigInt::ONE), std::cmp::Ordering::Equal) {
		Some(old_s)
	} else {
		None
	}
}
