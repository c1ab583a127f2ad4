// Copyright 2025 Irreducible Inc.
//! The typed residue ring `Z/m`.

use std::{
	fmt,
	marker::PhantomData,
	ops::{Add, Div, Mul, Neg, Sub},
};

use bigmod_int::{
	BigInt, div_rem, mod_add, mod_exp, mod_inv, mod_mul, mod_sub, subtract_ignore_carry,
};
use rand::{
	Rng,
	distr::{Distribution, StandardUniform},
};

/// A compile-time modulus: a unit type carrying the modulus value as an associated constant.
///
/// Binding the modulus into the type means elements of different rings cannot be mixed by
/// accident, and the derived constants below are computed once per instantiation during
/// compilation. Declare implementations with [`define_modulus!`](crate::define_modulus).
pub trait Modulus<const N: usize>: Copy + Eq + fmt::Debug {
	/// The modulus value; must be non-zero.
	const MODULUS: BigInt<N>;

	/// Bit length of the modulus.
	const BIT_LENGTH: usize = Self::MODULUS.bit_length();

	/// Whether the modulus is odd, the gate for Montgomery arithmetic.
	const IS_ODD: bool = Self::MODULUS.is_odd();
}

/// An element of `Z/m`: a [`BigInt`] guaranteed to lie in `[0, m)`.
///
/// The ring operators `+`, `-`, `*` dispatch to the modular layer against the type-level
/// modulus; `/` multiplies by the inverse and therefore panics on a non-invertible divisor.
/// The inherent operations are `const fn`, so field arithmetic folds at compile time:
///
/// ```
/// use bigmod_field::define_modulus;
///
/// define_modulus!(Mod17, F17, 1, "17");
///
/// const X: F17 = F17::from_u64(20).mul(F17::from_u64(5));
/// assert_eq!(X, F17::from_u64(15));
/// ```
pub struct Zq<M: Modulus<N>, const N: usize> {
	data: BigInt<N>,
	_modulus: PhantomData<M>,
}

impl<M: Modulus<N>, const N: usize> Zq<M, N> {
	/// Wraps a value already known to be reduced.
	const fn from_reduced(data: BigInt<N>) -> Self {
		Self {
			data,
			_modulus: PhantomData,
		}
	}

	/// Constructs an element, reducing the value modulo `m`.
	pub const fn new(value: BigInt<N>) -> Self {
		Self::from_reduced(div_rem(&value, &M::MODULUS).remainder)
	}

	/// Constructs an element from a wider value, reducing modulo `m`.
	pub const fn new_wide<const W: usize>(value: BigInt<W>) -> Self {
		Self::from_reduced(div_rem(&value, &M::MODULUS).remainder)
	}

	/// Constructs an element from a decimal literal, reducing modulo `m`.
	pub const fn from_decimal(s: &str) -> Self {
		Self::new(BigInt::from_decimal(s))
	}

	/// Constructs an element from a machine word, reducing modulo `m`.
	pub const fn from_u64(value: u64) -> Self {
		Self::new(BigInt::from_u64(value))
	}

	/// The underlying reduced integer.
	pub const fn data(&self) -> BigInt<N> {
		self.data
	}

	/// The additive identity, `0 mod m`.
	pub const fn additive_identity() -> Self {
		Self::new(BigInt::ZERO)
	}

	/// Alias for [`additive_identity`](Self::additive_identity).
	pub const fn zero() -> Self {
		Self::additive_identity()
	}

	/// The multiplicative identity, `1 mod m`.
	pub const fn multiplicative_identity() -> Self {
		Self::new(BigInt::ONE)
	}

	/// Alias for [`multiplicative_identity`](Self::multiplicative_identity).
	pub const fn one() -> Self {
		Self::multiplicative_identity()
	}

	/// True iff the element is zero.
	pub const fn is_zero(&self) -> bool {
		self.data.is_zero()
	}

	/// Modular addition.
	pub const fn add(self, rhs: Self) -> Self {
		Self::from_reduced(mod_add(&self.data, &rhs.data, &M::MODULUS))
	}

	/// Modular subtraction.
	pub const fn sub(self, rhs: Self) -> Self {
		Self::from_reduced(mod_sub(&self.data, &rhs.data, &M::MODULUS))
	}

	/// Modular multiplication.
	pub const fn mul(self, rhs: Self) -> Self {
		Self::from_reduced(mod_mul(&self.data, &rhs.data, &M::MODULUS))
	}

	/// Modular squaring.
	pub const fn square(self) -> Self {
		self.mul(self)
	}

	/// Additive inverse: `(m - v) mod m`, with zero fixed.
	pub const fn neg(self) -> Self {
		if self.data.is_zero() {
			self
		} else {
			Self::from_reduced(subtract_ignore_carry(&M::MODULUS, &self.data))
		}
	}

	/// Raises the element to an exponent of any width.
	pub const fn pow<const E: usize>(self, exp: &BigInt<E>) -> Self {
		Self::from_reduced(mod_exp(&self.data, exp, &M::MODULUS))
	}

	/// Multiplicative inverse.
	///
	/// Inverting an element that is not coprime with the modulus (zero included) is a
	/// precondition violation and panics.
	pub const fn inv(self) -> Self {
		match mod_inv(&self.data, &M::MODULUS) {
			Some(inv) => Self::from_reduced(inv),
			None => panic!("element is not invertible"),
		}
	}
}

impl<M: Modulus<N>, const N: usize> Clone for Zq<M, N> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<M: Modulus<N>, const N: usize> Copy for Zq<M, N> {}

impl<M: Modulus<N>, const N: usize> PartialEq for Zq<M, N> {
	fn eq(&self, other: &Self) -> bool {
		self.data == other.data
	}
}

impl<M: Modulus<N>, const N: usize> Eq for Zq<M, N> {}

impl<M: Modulus<N>, const N: usize> Default for Zq<M, N> {
	fn default() -> Self {
		Self::zero()
	}
}

impl<M: Modulus<N>, const N: usize> Add for Zq<M, N> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Zq::add(self, rhs)
	}
}

impl<M: Modulus<N>, const N: usize> Sub for Zq<M, N> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Zq::sub(self, rhs)
	}
}

impl<M: Modulus<N>, const N: usize> Mul for Zq<M, N> {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		Zq::mul(self, rhs)
	}
}

impl<M: Modulus<N>, const N: usize> Div for Zq<M, N> {
	type Output = Self;

	/// Multiplication by the inverse; panics if `rhs` is not invertible.
	fn div(self, rhs: Self) -> Self {
		Zq::mul(self, rhs.inv())
	}
}

impl<M: Modulus<N>, const N: usize> Neg for Zq<M, N> {
	type Output = Self;

	fn neg(self) -> Self {
		Zq::neg(self)
	}
}

impl<M: Modulus<N>, const N: usize> From<BigInt<N>> for Zq<M, N> {
	fn from(value: BigInt<N>) -> Self {
		Self::new(value)
	}
}

impl<M: Modulus<N>, const N: usize> From<u64> for Zq<M, N> {
	fn from(value: u64) -> Self {
		Self::from_u64(value)
	}
}

impl<M: Modulus<N>, const N: usize> From<Zq<M, N>> for BigInt<N> {
	fn from(element: Zq<M, N>) -> Self {
		element.data
	}
}

impl<M: Modulus<N>, const N: usize> fmt::Display for Zq<M, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.data)
	}
}

impl<M: Modulus<N>, const N: usize> fmt::Debug for Zq<M, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Zq({} mod {})", self.data, M::MODULUS)
	}
}

impl<M: Modulus<N>, const N: usize> Distribution<Zq<M, N>> for StandardUniform {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Zq<M, N> {
		Zq::from_reduced(bigmod_int::random_mod(rng, &M::MODULUS))
	}
}

/// Declares a [`Modulus`] type and an element alias for it from a decimal literal.
///
/// ```
/// use bigmod_field::define_modulus;
///
/// define_modulus!(Mod101, F101, 1, "101");
///
/// let x = F101::from_u64(100) + F101::from_u64(2);
/// assert_eq!(x, F101::from_u64(1));
/// ```
///
/// The literal is parsed at compile time; a value that does not fit the limb count fails to
/// compile.
#[macro_export]
macro_rules! define_modulus {
	($modulus:ident, $element:ident, $limbs:literal, $value:literal) => {
		#[derive(Clone, Copy, Debug, PartialEq, Eq)]
		pub struct $modulus;

		impl $crate::Modulus<$limbs> for $modulus {
			const MODULUS: $crate::bigint::BigInt<$limbs> =
				$crate::bigint::BigInt::from_decimal($value);
		}

		pub type $element = $crate::Zq<$modulus, $limbs>;
	};
}
