// Copyright 2025 Irreducible Inc.
//! Modular square roots.

use bigmod_int::{BigInt, add_ignore_carry, shr, subtract_ignore_carry};

use crate::{
	prime::is_prime,
	zq::{Modulus, Zq},
};

/// Caps the search for a quadratic non-residue; for a prime modulus half of all elements
/// qualify, so hitting the cap means the modulus was not prime after all.
const NON_RESIDUE_SEARCH_LIMIT: u64 = 128;

/// Whether `a` is a square in `Z/m`, by Euler's criterion `a^((m-1)/2)`.
///
/// Meaningful for prime `m`; zero counts as the square of zero.
pub fn is_quadratic_residue<M: Modulus<N>, const N: usize>(a: &Zq<M, N>) -> bool {
	if a.is_zero() {
		return true;
	}
	let exp = shr(&subtract_ignore_carry(&M::MODULUS, &BigInt::ONE), 1);
	a.pow(&exp) == Zq::one()
}

/// A square root of `a` in `Z/m`, if one exists.
///
/// Absence means no root exists or the modulus failed the primality gate. Either root of
/// the pair `±r` may be returned.
///
/// The easy half of the dispatch is `m ≡ 3 (mod 4)`, where `a^((m+1)/4)` is a root
/// whenever one exists. The `m ≡ 1 (mod 4)` half is Tonelli–Shanks: write
/// `m - 1 = 2^S * Q` with `Q` odd, seed an auxiliary element of maximal 2-adic order from
/// a non-residue, and walk the order of the error term down to zero.
pub fn sqrt<M: Modulus<N>, const N: usize>(a: &Zq<M, N>) -> Option<Zq<M, N>> {
	let m = M::MODULUS;
	if !is_prime(&m) {
		return None;
	}
	if a.is_zero() {
		return Some(Zq::zero());
	}
	// The only even prime is 2, and in Z/2 every element is its own square.
	if m.is_even() {
		return Some(*a);
	}
	if !is_quadratic_residue(a) {
		return None;
	}

	if m.limbs[0].0 & 3 == 3 {
		// a^((m+1)/4), computed as (m-3)/4 + 1 to avoid the carry out of m+1.
		let exp = add_ignore_carry(
			&shr(&subtract_ignore_carry(&m, &BigInt::from_u64(3)), 2),
			&BigInt::ONE,
		);
		return Some(a.pow(&exp));
	}

	// m ≡ 1 (mod 4): full Tonelli-Shanks. m - 1 = 2^s * q, q odd.
	let m_minus_1 = subtract_ignore_carry(&m, &BigInt::ONE);
	let mut q = m_minus_1;
	let mut s = 0usize;
	while q.is_even() {
		q = shr(&q, 1);
		s += 1;
	}

	let z = find_non_residue::<M, N>()?;
	let mut c = z.pow(&q);
	let mut t = a.pow(&q);
	// r = a^((q+1)/2); q is odd so q+1 never carries out.
	let mut r = a.pow(&shr(&add_ignore_carry(&q, &BigInt::ONE), 1));
	let mut order = s;

	let one = Zq::one();
	loop {
		if t == one {
			return Some(r);
		}
		// Least i in [1, order) with t^(2^i) = 1.
		let mut i = 1usize;
		let mut t2 = t.square();
		while t2 != one {
			t2 = t2.square();
			i += 1;
			if i == order {
				// Cannot happen for a residue over a prime modulus.
				return None;
			}
		}
		let mut b = c;
		let mut k = 0;
		while k < order - i - 1 {
			b = b.square();
			k += 1;
		}
		order = i;
		c = b.square();
		t = t.mul(c);
		r = r.mul(b);
	}
}

fn find_non_residue<M: Modulus<N>, const N: usize>() -> Option<Zq<M, N>> {
	let mut z = 2u64;
	while z < NON_RESIDUE_SEARCH_LIMIT {
		let candidate = Zq::from_u64(z);
		if !is_quadratic_residue(&candidate) {
			return Some(candidate);
		}
		z += 1;
	}
	None
}
