// Copyright 2025 Irreducible Inc.
//! Cross-cutting properties, checked against `num_bigint` as reference and against the
//! compile-time evaluation path.

use std::cmp::Ordering;

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::*;

fn to_oracle<const N: usize>(x: &BigInt<N>) -> BigUint {
	let mut bytes = Vec::with_capacity(N * 8);
	for limb in x.iter() {
		bytes.extend_from_slice(&limb.0.to_le_bytes());
	}
	BigUint::from_bytes_le(&bytes)
}

fn arb_bigint<const N: usize>() -> impl Strategy<Value = BigInt<N>> {
	any::<[u64; N]>().prop_map(BigInt::from_words)
}

/// secp256k1 field prime, the 4-limb workhorse modulus of the suite.
const SECP_P: BigInt<4> = BigInt::from_decimal(
	"115792089237316195423570985008687907853269984665640564039457584007908834671663",
);

proptest! {
	#[test]
	fn add_matches_oracle(a in arb_bigint::<4>(), b in arb_bigint::<4>()) {
		let (sum, carry) = add(&a, &b);
		let expect = to_oracle(&a) + to_oracle(&b);
		prop_assert_eq!(to_oracle(&sum) + (BigUint::from(carry.0) << 256), expect);
	}

	#[test]
	fn sub_is_twos_complement(a in arb_bigint::<4>(), b in arb_bigint::<4>()) {
		let diff = subtract_ignore_carry(&a, &b);
		let expect =
			((BigUint::from(1u32) << 256) + to_oracle(&a) - to_oracle(&b)) % (BigUint::from(1u32) << 256);
		prop_assert_eq!(to_oracle(&diff), expect);
	}

	#[test]
	fn mul_widens_exactly(a in arb_bigint::<2>(), b in arb_bigint::<3>()) {
		let p: BigInt<5> = mul(&a, &b);
		prop_assert_eq!(to_oracle(&p), to_oracle(&a) * to_oracle(&b));
	}

	#[test]
	fn mul_wide_halves_agree(a in arb_bigint::<4>(), b in arb_bigint::<4>()) {
		let (lo, hi) = mul_wide(&a, &b);
		let expect = to_oracle(&a) * to_oracle(&b);
		prop_assert_eq!(to_oracle(&lo) + (to_oracle(&hi) << 256), expect);
	}

	#[test]
	fn div_rem_reconstructs(n in arb_bigint::<4>(), d in arb_bigint::<3>()) {
		prop_assume!(!d.is_zero());
		let DivRem { quotient, remainder } = div_rem(&n, &d);
		prop_assert!(to_oracle(&remainder) < to_oracle(&d));
		let expect_q = to_oracle(&n) / to_oracle(&d);
		let expect_r = to_oracle(&n) % to_oracle(&d);
		prop_assert_eq!(to_oracle(&quotient), expect_q);
		prop_assert_eq!(to_oracle(&remainder), expect_r);
	}

	#[test]
	fn small_divisors_hit_the_limb_path(n in arb_bigint::<4>(), d in 1u64..) {
		let (q, r) = div_rem_limb(&n, Limb(d));
		prop_assert_eq!(to_oracle(&q), to_oracle(&n) / d);
		prop_assert_eq!(BigUint::from(r.0), to_oracle(&n) % d);
	}

	#[test]
	fn shifts_match_oracle(a in arb_bigint::<3>(), bits in 0usize..200) {
		let expect_shl = (to_oracle(&a) << bits) % (BigUint::from(1u32) << 192);
		prop_assert_eq!(to_oracle(&shl(&a, bits)), expect_shl);
		prop_assert_eq!(to_oracle(&shr(&a, bits)), to_oracle(&a) >> bits);
	}

	#[test]
	fn comparison_matches_oracle(a in arb_bigint::<3>(), b in arb_bigint::<3>()) {
		prop_assert_eq!(compare(&a, &b), to_oracle(&a).cmp(&to_oracle(&b)));
	}

	#[test]
	fn mixed_comparison_zero_extends(a in arb_bigint::<2>(), b in arb_bigint::<4>()) {
		prop_assert_eq!(compare_mixed(&a, &b), to_oracle(&a).cmp(&to_oracle(&b)));
	}

	#[test]
	fn mod_mul_matches_oracle(a in arb_bigint::<4>(), b in arb_bigint::<4>()) {
		let got = mod_mul(&a, &b, &SECP_P);
		let expect = to_oracle(&a) * to_oracle(&b) % to_oracle(&SECP_P);
		prop_assert_eq!(to_oracle(&got), expect);
	}

	#[test]
	fn barrett_agrees_with_division(lo in arb_bigint::<4>(), hi in arb_bigint::<4>()) {
		let reducer = BarrettReducer::new(SECP_P);
		prop_assert_eq!(reducer.reduce(&lo, &hi), rem_wide(&lo, &hi, &SECP_P));
	}

	#[test]
	fn montgomery_round_trip(a in arb_bigint::<4>()) {
		let params = MontgomeryParams::new(SECP_P);
		let a = a % SECP_P;
		prop_assert_eq!(params.from_mont(&params.to_mont(&a)), a);
	}

	#[test]
	fn montgomery_mul_is_modmul(a in arb_bigint::<4>(), b in arb_bigint::<4>()) {
		let params = MontgomeryParams::new(SECP_P);
		let a = a % SECP_P;
		let b = b % SECP_P;
		let got = params.from_mont(&params.mul(&params.to_mont(&a), &params.to_mont(&b)));
		prop_assert_eq!(got, mod_mul(&a, &b, &SECP_P));
	}

	#[test]
	fn mod_exp_matches_oracle(a in arb_bigint::<4>(), e in arb_bigint::<2>()) {
		let got = mod_exp(&a, &e, &SECP_P);
		let expect = to_oracle(&a).modpow(&to_oracle(&e), &to_oracle(&SECP_P));
		prop_assert_eq!(to_oracle(&got), expect);
	}

	#[test]
	fn squaring_coheres_with_exponentiation(a in arb_bigint::<4>()) {
		let a = a % SECP_P;
		let two = BigInt::<1>::from_u64(2);
		prop_assert_eq!(mod_exp(&a, &two, &SECP_P), mod_mul(&a, &a, &SECP_P));
	}

	#[test]
	fn fermat_little_theorem(a in arb_bigint::<4>()) {
		let a = a % SECP_P;
		prop_assume!(!a.is_zero());
		let p_minus_1 = subtract_ignore_carry(&SECP_P, &BigInt::ONE);
		prop_assert_eq!(mod_exp(&a, &p_minus_1, &SECP_P), BigInt::ONE);
	}

	#[test]
	fn mod_inv_inverts(a in arb_bigint::<4>()) {
		let a = a % SECP_P;
		prop_assume!(!a.is_zero());
		let inv = mod_inv(&a, &SECP_P).expect("prime modulus");
		prop_assert_eq!(mod_mul(&a, &inv, &SECP_P), BigInt::ONE);
	}

	#[test]
	fn gcd_matches_oracle(a in arb_bigint::<3>(), b in arb_bigint::<3>()) {
		use num_integer::Integer;
		prop_assert_eq!(to_oracle(&gcd(&a, &b)), to_oracle(&a).gcd(&to_oracle(&b)));
	}

	#[test]
	fn decimal_display_matches_oracle(a in arb_bigint::<4>()) {
		prop_assert_eq!(a.to_string(), to_oracle(&a).to_string());
	}

	#[test]
	fn decimal_parse_round_trips(a in arb_bigint::<4>()) {
		let s = a.to_string();
		prop_assert_eq!(s.parse::<BigInt<4>>().unwrap(), a);
		prop_assert_eq!(BigInt::<4>::from_decimal(&s), a);
	}

	#[test]
	fn random_mod_is_uniformly_bounded(seed in any::<u64>()) {
		use rand::{SeedableRng, rngs::StdRng};
		let mut rng = StdRng::seed_from_u64(seed);
		let v: BigInt<4> = random_mod(&mut rng, &SECP_P);
		prop_assert!(v < SECP_P);
	}
}

// Literal initialization pinned to its known limbs, evaluated at compile time.
const S1: BigInt<3> = BigInt::from_decimal("6513020836420374401749667047018991798096360820");
const _: () = {
	assert!(S1.limbs[0].0 == 1315566964);
	assert!(S1.limbs[1].0 == 326042948);
	assert!(S1.limbs[2].0 == 19140048);
};

// Modular inverse over the secp256k1 prime, evaluated at compile time.
const S2_A: BigInt<4> = BigInt::from_decimal(
	"65341020041517633956166170261014086368942546761318486551877808671514674964848",
);
const S2_INV: BigInt<4> = match mod_inv(&S2_A, &SECP_P) {
	Some(inv) => inv,
	None => panic!("a and p are coprime"),
};
const S2_EXPECT: BigInt<4> = BigInt::from_decimal(
	"83174505189910067536517124096019359197644205712500122884473429251812128958118",
);
const _: () = assert!(matches!(compare(&S2_INV, &S2_EXPECT), Ordering::Equal));

// Curve25519 prime arithmetic, evaluated at compile time.
const P25519: BigInt<4> = BigInt::from_decimal(
	"57896044618658097711785492504343953926634992332820282019728792003956564819949",
);
const S6_SUM: BigInt<4> = {
	let p_plus_1 = add_ignore_carry(&P25519, &BigInt::ONE);
	div_rem(&p_plus_1, &P25519).remainder
};
const _: () = assert!(matches!(compare(&S6_SUM, &BigInt::ONE), Ordering::Equal));
const S6_PROD: BigInt<4> = mod_mul(
	&BigInt::from_u64(12345),
	&BigInt::from_u64(67890),
	&P25519,
);
const _: () =
	assert!(matches!(compare(&S6_PROD, &BigInt::from_u64(838102050)), Ordering::Equal));

// Montgomery domain round trip, evaluated at compile time.
const MONT_RT: BigInt<4> = {
	let params = MontgomeryParams::new(P25519);
	params.from_mont(&params.to_mont(&BigInt::from_u64(987654321)))
};
const _: () = assert!(MONT_RT.limbs[0].0 == 987654321);

/// Closed expressions evaluated as `const` above must yield the same bits at run time.
#[test]
fn compile_time_equals_run_time() {
	assert_eq!(
		S1,
		BigInt::from_decimal("6513020836420374401749667047018991798096360820")
	);
	assert_eq!(mod_inv(&S2_A, &SECP_P), Some(S2_EXPECT));
	assert_eq!(
		div_rem(&add_ignore_carry(&P25519, &BigInt::ONE), &P25519).remainder,
		S6_SUM
	);
	assert_eq!(
		mod_mul(&BigInt::from_u64(12345), &BigInt::from_u64(67890), &P25519),
		S6_PROD
	);
	let params = MontgomeryParams::new(P25519);
	assert_eq!(
		params.from_mont(&params.to_mont(&BigInt::from_u64(987654321))),
		MONT_RT
	);
}

#[test]
fn s2_inverse_at_run_time() {
	let inv = mod_inv(&S2_A, &SECP_P).unwrap();
	assert_eq!(inv, S2_EXPECT);
	assert_eq!(mod_mul(&S2_A, &inv, &SECP_P), BigInt::ONE);
}
