// Copyright 2025 Irreducible Inc.
//! Schoolbook multiplication.

use crate::{limb::Limb, uint::BigInt};

/// Multiplies an `A`-limb value by a `B`-limb value into the exact `A + B`-limb product.
///
/// `P` must equal `A + B`; stable Rust cannot spell the sum in the signature, so the
/// constraint is checked at evaluation time and the call site names the product width:
///
/// ```
/// use bigmod_int::{BigInt, mul};
///
/// let a = BigInt::<2>::from_u64(3);
/// let b = BigInt::<3>::from_u64(5);
/// let p: BigInt<5> = mul(&a, &b);
/// assert_eq!(p, BigInt::from_u64(15));
/// ```
///
/// The result always occupies exactly `A + B` limbs regardless of leading zeros in the
/// inputs, so no product ever truncates.
pub const fn mul<const A: usize, const B: usize, const P: usize>(
	a: &BigInt<A>,
	b: &BigInt<B>,
) -> BigInt<P> {
	assert!(P == A + B, "product must have exactly A + B limbs");
	let mut out = BigInt::ZERO;
	let mut i = 0;
	while i < A {
		let ai = a.limbs[i].0;
		let mut carry: u64 = 0;
		let mut j = 0;
		while j < B {
			let p = ai as u128 * b.limbs[j].0 as u128 + out.limbs[i + j].0 as u128 + carry as u128;
			out.limbs[i + j] = Limb(p as u64);
			carry = (p >> 64) as u64;
			j += 1;
		}
		out.limbs[i + B] = Limb(carry);
		i += 1;
	}
	out
}

/// Multiplies two equally-sized values into the double-width product, returned as
/// `(lo, hi)` halves.
///
/// Same schoolbook accumulation as [`mul`]; this shape exists because generic code over `N`
/// cannot name a `2N`-limb type, and the modular layer reduces such pair products in place.
pub const fn mul_wide<const N: usize>(a: &BigInt<N>, b: &BigInt<N>) -> (BigInt<N>, BigInt<N>) {
	let mut lo = BigInt::ZERO;
	let mut hi = BigInt::ZERO;
	let mut i = 0;
	while i < N {
		let ai = a.limbs[i].0;
		let mut carry: u64 = 0;
		let mut j = 0;
		while j < N {
			let k = i + j;
			let cur = if k < N { lo.limbs[k].0 } else { hi.limbs[k - N].0 };
			let p = ai as u128 * b.limbs[j].0 as u128 + cur as u128 + carry as u128;
			if k < N {
				lo.limbs[k] = Limb(p as u64);
			} else {
				hi.limbs[k - N] = Limb(p as u64);
			}
			carry = (p >> 64) as u64;
			j += 1;
		}
		hi.limbs[i] = Limb(carry);
		i += 1;
	}
	(lo, hi)
}

/// Squares a value into the exact `2N`-limb result.
///
/// Produces the same value as `mul(a, a)`.
pub const fn square<const N: usize, const P: usize>(a: &BigInt<N>) -> BigInt<P> {
	mul(a, a)
}

/// Squares a value into `(lo, hi)` halves; same value as `mul_wide(a, a)`.
pub const fn square_wide<const N: usize>(a: &BigInt<N>) -> (BigInt<N>, BigInt<N>) {
	mul_wide(a, a)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn small_products() {
		let a = BigInt::<2>::from_u64(1 << 32);
		let p: BigInt<4> = mul(&a, &a);
		assert_eq!(p, BigInt::from_words([0, 1, 0, 0]));
	}

	#[test]
	fn full_width_product() {
		// (2^128 - 1)^2 = 2^256 - 2^129 + 1
		let p: BigInt<4> = mul(&BigInt::<2>::MAX, &BigInt::<2>::MAX);
		assert_eq!(p, BigInt::from_words([1, 0, u64::MAX - 1, u64::MAX]));
	}

	#[test]
	fn mixed_width_product() {
		// (2^64 + 1) * (2^128 + 2^64 + 1) = 2^192 + 2 * 2^128 + 2 * 2^64 + 1
		let a = BigInt::<2>::from_words([1, 1]);
		let b = BigInt::<3>::from_words([1, 1, 1]);
		let p: BigInt<5> = mul(&a, &b);
		assert_eq!(p, BigInt::from_words([1, 2, 2, 1, 0]));
	}

	#[test]
	fn wide_pair_matches_flat_product() {
		let a = BigInt::<3>::from_words([u64::MAX, 1, u64::MAX]);
		let b = BigInt::<3>::from_words([7, u64::MAX, 3]);
		let flat: BigInt<6> = mul(&a, &b);
		let (lo, hi) = mul_wide(&a, &b);
		assert_eq!(lo, flat.resize::<3>());
		assert_eq!(hi.limbs[0], flat.limbs[3]);
		assert_eq!(hi.limbs[1], flat.limbs[4]);
		assert_eq!(hi.limbs[2], flat.limbs[5]);
	}

	#[test]
	fn square_agrees_with_mul() {
		let a = BigInt::<2>::from_words([0x1234_5678_9abc_def0, 0xfeed]);
		let s: BigInt<4> = square(&a);
		let p: BigInt<4> = mul(&a, &a);
		assert_eq!(s, p);
	}
}
