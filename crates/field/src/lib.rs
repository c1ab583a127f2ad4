// Copyright 2025 Irreducible Inc.
//! Prime-field elements over compile-time moduli.
//!
//! [`Zq<M, N>`] wraps a reduced [`BigInt`](bigmod_int::BigInt) and binds the modulus into
//! the type through the [`Modulus`] trait, so arithmetic between different rings is a type
//! error and the derived constants are folded at build time. [`define_modulus!`] declares a
//! modulus from a decimal literal:
//!
//! ```
//! use bigmod_field::{define_modulus, sqrt};
//!
//! define_modulus!(Mod17, F17, 1, "17");
//!
//! let four = F17::from_u64(4);
//! let root = sqrt(&four).unwrap();
//! assert_eq!(root.square(), four);
//! ```
//!
//! On top of the ring operators sit the partial root-extraction functions [`sqrt`] and
//! [`cbrt`], both gated by the Miller–Rabin test in [`is_prime`]: absence means "no root,
//! or the modulus is not prime".

pub mod cbrt;
pub mod prime;
pub mod sqrt;
pub mod zq;


pub use bigmod_int as bigint;
pub use cbrt::cbrt;
pub use prime::{is_prime, is_prime_with_rng};
pub use sqrt::{is_quadratic_residue, sqrt};
pub use zq::{Modulus, Zq};
