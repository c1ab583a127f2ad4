// Copyright 2025 Irreducible Inc.
//! Barrett reduction against a fixed modulus.

use crate::{cmp::is_less, div::Wide, limb::Limb, uint::BigInt};

/// Reduction modulo a fixed `m` with the precomputed reciprocal `mu = floor(2^(128N) / m)`.
///
/// Amortizes the division when many values are reduced against the same modulus; the result
/// agrees bit-exactly with [`rem_wide`](crate::rem_wide). The reciprocal occupies `N` limbs
/// plus one high limb, which is where the requirement below comes from.
///
/// Requirements on the modulus: its most significant limb must be non-zero, and it must not
/// be exactly `2^(64 * (N - 1))` (both checked by [`new`](Self::new)); together these bound
/// `mu` strictly below `2^(64 * (N + 1))`.
#[derive(Clone, Copy, Debug)]
pub struct BarrettReducer<const N: usize> {
	modulus: BigInt<N>,
	mu_lo: BigInt<N>,
	mu_hi: Limb,
}

impl<const N: usize> BarrettReducer<N> {
	/// Precomputes the reciprocal of `modulus`.
	///
	/// The dividend `2^(128N)` is a single bit followed by zeros, so the reciprocal comes
	/// out of a restoring bit-serial division: shift the running remainder left one bit at
	/// a time and emit a quotient bit whenever the modulus fits.
	pub const fn new(modulus: BigInt<N>) -> Self {
		assert!(
			modulus.limbs[N - 1].0 != 0,
			"Barrett modulus must use its most significant limb"
		);
		let is_power = modulus.limbs[N - 1].0 == 1 && {
			let mut rest_zero = true;
			let mut i = 0;
			while i < N - 1 {
				if modulus.limbs[i].0 != 0 {
					rest_zero = false;
				}
				i += 1;
			}
			rest_zero
		};
		assert!(
			!is_power,
			"Barrett modulus must exceed 2^(64 * (N - 1))"
		);

		let mut rem = BigInt::<N>::ZERO;
		let mut mu_lo = BigInt::<N>::ZERO;
		let mut mu_hi = Limb::ZERO;
		let top = N * Limb::BITS - 1;

		let mut k = 0;
		while k <= 2 * N * Limb::BITS {
			let spill = rem.bit(top);
			rem = crate::shift::shl(&rem, 1);
			if k == 0 {
				rem.limbs[0].0 |= 1;
			}
			let qbit = if spill {
				// True remainder overflowed the limb array; it certainly exceeds m, and
				// the wrapping subtraction cancels the overflow exactly.
				rem = crate::addsub::subtract_ignore_carry(&rem, &modulus);
				true
			} else if !is_less(&rem, &modulus) {
				rem = crate::addsub::subtract_ignore_carry(&rem, &modulus);
				true
			} else {
				false
			};
			mu_hi = Limb(mu_hi.0 << 1 | mu_lo.bit(top) as u64);
			mu_lo = crate::shift::shl(&mu_lo, 1);
			if qbit {
				mu_lo.limbs[0].0 |= 1;
			}
			k += 1;
		}

		Self {
			modulus,
			mu_lo,
			mu_hi,
		}
	}

	/// The modulus this reducer was built for.
	pub const fn modulus(&self) -> &BigInt<N> {
		&self.modulus
	}

	/// Reduces the double-width value `(lo, hi)` modulo the fixed modulus.
	///
	/// Classic Barrett: estimate the quotient as `q = floor(floor(x / b^(N-1)) * mu / b^(N+1))`,
	/// subtract `q * m` from `x` modulo `b^(N+1)`, then correct with at most two further
	/// subtractions of `m`.
	pub const fn reduce(&self, lo: &BigInt<N>, hi: &BigInt<N>) -> BigInt<N> {
		let m = &self.modulus;
		let x = Wide::new(lo, hi);

		// q2 = floor(x / b^(N-1)) * mu; both factors are N+1 limbs, the product 2N+2.
		let mut q2 = Wide::<N>::zero();
		let mut i = 0;
		while i <= N {
			let a_i = x.get(N - 1 + i).0;
			let mut carry: u64 = 0;
			let mut j = 0;
			while j <= N {
				let b_j = if j < N { self.mu_lo.limbs[j].0 } else { self.mu_hi.0 };
				let idx = i + j;
				let p = a_i as u128 * b_j as u128 + q2.get(idx).0 as u128 + carry as u128;
				q2.set(idx, Limb(p as u64));
				carry = (p >> 64) as u64;
				j += 1;
			}
			q2.set(i + N + 1, Limb(carry));
			i += 1;
		}

		// r2 = (q3 * m) mod b^(N+1), with q3 = the top N+1 limbs of q2.
		let mut r2 = [Limb::ZERO; N];
		let mut r2_top = Limb::ZERO;
		let mut i = 0;
		while i <= N {
			let a_i = q2.get(N + 1 + i).0;
			let mut carry: u64 = 0;
			let mut j = 0;
			while j < N && i + j <= N {
				let idx = i + j;
				let cur = if idx < N { r2[idx].0 } else { r2_top.0 };
				let p = a_i as u128 * m.limbs[j].0 as u128 + cur as u128 + carry as u128;
				if idx < N {
					r2[idx] = Limb(p as u64);
				} else {
					r2_top = Limb(p as u64);
				}
				carry = (p >> 64) as u64;
				j += 1;
			}
			let idx = i + j;
			if idx <= N {
				let cur = if idx < N { r2[idx].0 } else { r2_top.0 };
				let s = cur as u128 + carry as u128;
				if idx < N {
					r2[idx] = Limb(s as u64);
				} else {
					r2_top = Limb(s as u64);
				}
			}
			i += 1;
		}

		// r = (x - r2) mod b^(N+1); the estimate never overshoots by more than 2m.
		let mut r = BigInt::<N>::ZERO;
		let mut borrow = Limb::ZERO;
		let mut i = 0;
		while i < N {
			let (d, b) = x.get(i).borrowing_sub(r2[i], borrow);
			r.limbs[i] = d;
			borrow = b;
			i += 1;
		}
		let (mut r_top, _) = x.get(N).borrowing_sub(r2_top, borrow);

		while r_top.0 != 0 || !is_less(&r, m) {
			let (next, b) = crate::addsub::sub_borrow(&r, m);
			r = next;
			r_top = Limb(r_top.0.wrapping_sub(b.0));
		}
		r
	}
}
