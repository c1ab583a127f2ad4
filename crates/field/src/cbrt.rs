// Copyright 2025 Irreducible Inc.
//! Modular cube roots.

use bigmod_int::{
	BigInt, add_ignore_carry, div_rem, div_rem_limb, div_rem_limb_wide, mod_inv, shl,
	subtract_ignore_carry,
};

use crate::{
	prime::is_prime,
	zq::{Modulus, Zq},
};

/// Caps the search for a cubic non-residue; for `m ≡ 1 (mod 3)` two thirds of all
/// non-zero elements qualify.
const NON_RESIDUE_SEARCH_LIMIT: u64 = 128;

/// A cube root of `a` in `Z/m`, if one exists.
///
/// Absence means `a` is not a cube or the modulus failed the primality gate. Whatever root
/// is returned satisfies `r³ = a`.
///
/// For `m ≡ 2 (mod 3)` cubing is a bijection and the unique root is `a^((2m-1)/3)`. For
/// `m ≡ 1 (mod 3)` only a third of the non-zero elements are cubes; after Euler's cubic
/// criterion `a^((m-1)/3) = 1` admits `a`, the root comes out of the Adleman-Manders-Miller
/// scheme: with `m - 1 = 3^s * t` (`3 ∤ t`), solve a base-3 discrete log in the Sylow
/// 3-subgroup digit by digit, then stitch the answer together with `3^(-1) mod t`.
pub fn cbrt<M: Modulus<N>, const N: usize>(a: &Zq<M, N>) -> Option<Zq<M, N>> {
	let m = M::MODULUS;
	if !is_prime(&m) {
		return None;
	}
	if a.is_zero() {
		return Some(Zq::zero());
	}

	let (_, m_mod_3) = div_rem_limb(&m, bigmod_int::Limb(3));
	match m_mod_3.0 {
		2 => {
			// (2m - 1)/3 without widening: keep the carry bit of 2m aside.
			let head = bigmod_int::Limb(m.bit(N * bigmod_int::Limb::BITS - 1) as u64);
			let low = subtract_ignore_carry(&shl(&m, 1), &BigInt::ONE);
			let (exp, _) = div_rem_limb_wide(head, &low, bigmod_int::Limb(3));
			Some(a.pow(&exp))
		}
		0 => {
			// The only prime divisible by 3 is 3 itself, where cubing is the identity.
			Some(*a)
		}
		_ => cbrt_one_mod_three(a),
	}
}

/// The `m ≡ 1 (mod 3)` case.
fn cbrt_one_mod_three<M: Modulus<N>, const N: usize>(a: &Zq<M, N>) -> Option<Zq<M, N>> {
	let m = M::MODULUS;
	let one = Zq::one();

	let m_minus_1 = subtract_ignore_carry(&m, &BigInt::ONE);
	let (cubic_exp, _) = div_rem_limb(&m_minus_1, bigmod_int::Limb(3));
	if a.pow(&cubic_exp) != one {
		return None;
	}

	// m - 1 = 3^s * t with 3 ∤ t; s >= 1 since m ≡ 1 (mod 3).
	let mut t = m_minus_1;
	let mut s = 0usize;
	loop {
		let (q, r) = div_rem_limb(&t, bigmod_int::Limb(3));
		if r.0 != 0 {
			break;
		}
		t = q;
		s += 1;
	}

	let g = find_cubic_non_residue::<M, N>(&cubic_exp)?;
	let b = g.pow(&t);
	let b_inv = b.inv();
	let omega = pow_3k(b, s - 1);
	let omega_sq = omega.square();

	// alpha = 3^(-1) mod t, and w = (3 * alpha - 1) / t, so that 3 * alpha = 1 + w * t.
	let alpha = mod_inv(&BigInt::<N>::from_u64(3), &t)?;
	let three_alpha = add_ignore_carry(&add_ignore_carry(&alpha, &alpha), &alpha);
	let w = div_rem(&subtract_ignore_carry(&three_alpha, &BigInt::ONE), &t).quotient;

	// Solve a^t = b^k in the Sylow 3-subgroup, one base-3 digit per round.
	let a_to_t = a.pow(&t);
	let mut k = BigInt::<N>::ZERO;
	let mut pow3 = BigInt::<N>::ONE;
	let mut i = 0;
	while i < s {
		let adjusted = a_to_t.mul(b_inv.pow(&k));
		let probe = pow_3k(adjusted, s - 1 - i);
		if probe == omega {
			k = add_ignore_carry(&k, &pow3);
		} else if probe == omega_sq {
			k = add_ignore_carry(&k, &add_ignore_carry(&pow3, &pow3));
		} else if probe != one {
			// The subgroup structure is broken; the modulus cannot have been prime.
			return None;
		}
		pow3 = add_ignore_carry(&add_ignore_carry(&pow3, &pow3), &pow3);
		i += 1;
	}

	// For a cubic residue the discrete log is itself divisible by 3.
	let (j, rem) = div_rem_limb(&k, bigmod_int::Limb(3));
	if rem.0 != 0 {
		return None;
	}

	// root = a^alpha * b^(-j*w): cubing gives a^(1 + w*t) * b^(-3jw) = a * b^(kw - 3jw) = a.
	let root = a.pow(&alpha).mul(b_inv.pow(&j).pow(&w));
	if root.square().mul(root) == *a {
		Some(root)
	} else {
		None
	}
}

/// Repeated cubing: `x^(3^k)`.
fn pow_3k<M: Modulus<N>, const N: usize>(x: Zq<M, N>, k: usize) -> Zq<M, N> {
	let mut out = x;
	for _ in 0..k {
		out = out.square().mul(out);
	}
	out
}

fn find_cubic_non_residue<M: Modulus<N>, const N: usize>(
	cubic_exp: &BigInt<N>,
) -> Option<Zq<M, N>> {
	let one = Zq::one();
	let mut g = 2u64;
	while g < NON_RESIDUE_SEARCH_LIMIT {
		let candidate = Zq::from_u64(g);
		if candidate.pow(cubic_exp) != one {
			return Some(candidate);
		}
		g += 1;
	}
	None
}
