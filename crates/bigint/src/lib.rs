// Copyright 2025 Irreducible Inc.
//! Fixed-width multi-precision integers with identical compile-time and run-time arithmetic.
//!
//! The core type is [`BigInt<N>`], a non-negative integer of exactly `N` 64-bit [`Limb`]s.
//! Every arithmetic routine is a `const fn` over plain values, with no heap, no globals and
//! no trait dispatch, so a closed expression over the API evaluates during compilation to
//! the same bits it produces at run time:
//!
//! ```
//! use bigmod_int::{BigInt, mod_exp};
//!
//! const M: BigInt<1> = BigInt::from_u64(1_000_000_007);
//! const POW: BigInt<1> = mod_exp(&BigInt::from_u64(2), &BigInt::<1>::from_u64(100), &M);
//! assert_eq!(POW, mod_exp(&BigInt::from_u64(2), &BigInt::<1>::from_u64(100), &M));
//! ```
//!
//! Widths never truncate silently: [`mul`] produces the exact `A + B`-limb product,
//! [`add`]/[`sub_borrow`] report their carry, and only the `_ignore_carry` variants wrap.
//! On top of the integer core sits the modular layer ([`mod_add`], [`mod_mul`],
//! [`mod_exp`], [`mod_inv`], [`BarrettReducer`], [`MontgomeryParams`]), which the
//! `bigmod-field` crate wraps into typed prime-field elements.

pub mod addsub;
pub mod cmp;
pub mod decimal;
pub mod div;
pub mod limb;
pub mod modular;
pub mod montgomery;
pub mod mul;
pub mod random;
pub mod reduce;
pub mod shift;
pub mod uint;

#[cfg(test)]
mod tests;

pub use addsub::{add, add_ignore_carry, sub_borrow, subtract_ignore_carry};
pub use cmp::{compare, compare_mixed};
pub use decimal::ParseBigIntError;
pub use div::{DivRem, div_rem, div_rem_limb, div_rem_limb_wide, rem_wide};
pub use limb::Limb;
pub use modular::{gcd, mod_add, mod_exp, mod_inv, mod_mul, mod_sub};
pub use montgomery::{MontgomeryParams, from_mont, montgomery_mul, to_mont};
pub use mul::{mul, mul_wide, square, square_wide};
pub use random::random_mod;
pub use reduce::BarrettReducer;
pub use shift::{shl, shr};
pub use uint::BigInt;
