//! Property-based tests for the bignum engine and the Fibonacci modes.
//!
//! `num-bigint` serves as an independent oracle for the arithmetic.

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use proptest::prelude::*;

use bnfib_core::bignum::{add, mul, shift_left, sub, Bignum};
use bnfib_core::{compute, to_decimal_string, Mode};

fn to_oracle(b: &Bignum) -> BigInt {
    let bytes: Vec<u8> = b.words().iter().flat_map(|w| w.to_le_bytes()).collect();
    let magnitude = BigUint::from_bytes_le(&bytes);
    let sign = if b.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

fn assert_canonical(b: &Bignum) {
    assert!(b.size() >= 1);
    if b.size() > 1 {
        assert_ne!(*b.words().last().unwrap(), 0, "untrimmed: {b:?}");
    }
    if b.is_zero() {
        assert!(!b.is_negative(), "negative zero: {b:?}");
    }
}

fn bignum() -> impl Strategy<Value = Bignum> {
    (
        prop::collection::vec(
            prop_oneof![Just(0u64), Just(u64::MAX), any::<u64>()],
            1..6,
        ),
        any::<bool>(),
    )
        .prop_map(|(words, negative)| Bignum::from_words(&words, negative))
}

fn sum(a: &Bignum, b: &Bignum) -> Bignum {
    let mut c = Bignum::zero();
    add(a, b, &mut c).unwrap();
    c
}

fn difference(a: &Bignum, b: &Bignum) -> Bignum {
    let mut c = Bignum::zero();
    sub(a, b, &mut c).unwrap();
    c
}

fn product(a: &Bignum, b: &Bignum) -> Bignum {
    let mut c = Bignum::zero();
    mul(a, b, &mut c).unwrap();
    c
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_matches_oracle(a in bignum(), b in bignum()) {
        let c = sum(&a, &b);
        assert_canonical(&c);
        prop_assert_eq!(to_oracle(&c), to_oracle(&a) + to_oracle(&b));
    }

    #[test]
    fn sub_matches_oracle(a in bignum(), b in bignum()) {
        let c = difference(&a, &b);
        assert_canonical(&c);
        prop_assert_eq!(to_oracle(&c), to_oracle(&a) - to_oracle(&b));
    }

    #[test]
    fn mul_matches_oracle(a in bignum(), b in bignum()) {
        let c = product(&a, &b);
        assert_canonical(&c);
        prop_assert_eq!(to_oracle(&c), to_oracle(&a) * to_oracle(&b));
    }

    #[test]
    fn add_commutes(a in bignum(), b in bignum()) {
        prop_assert_eq!(sum(&a, &b), sum(&b, &a));
    }

    #[test]
    fn sub_is_add_of_negation(a in bignum(), b in bignum()) {
        prop_assert_eq!(sum(&a, &b.negated()), difference(&a, &b));
    }

    #[test]
    fn add_negation_is_canonical_zero(a in bignum()) {
        let z = sum(&a, &a.negated());
        prop_assert_eq!(z.size(), 1);
        prop_assert_eq!(z.words()[0], 0);
        prop_assert!(!z.is_negative());
    }

    #[test]
    fn mul_associates(a in bignum(), b in bignum(), c in bignum()) {
        prop_assert_eq!(
            product(&product(&a, &b), &c),
            product(&a, &product(&b, &c))
        );
    }

    #[test]
    fn mul_distributes_over_add(a in bignum(), b in bignum(), c in bignum()) {
        prop_assert_eq!(
            product(&a, &sum(&b, &c)),
            sum(&product(&a, &b), &product(&a, &c))
        );
    }

    #[test]
    fn compare_magnitude_is_numeric_order(a in bignum(), b in bignum()) {
        let expected = to_oracle(&a).magnitude().cmp(to_oracle(&b).magnitude());
        prop_assert_eq!(a.compare_magnitude(&b), expected);
        prop_assert_eq!(b.compare_magnitude(&a), expected.reverse());
        prop_assert_eq!(a.compare_magnitude(&a), Ordering::Equal);
    }

    #[test]
    fn aliased_destinations_match_fresh(a in bignum(), b in bignum()) {
        let mut aliased = a.clone();
        aliased.square_in_place().unwrap();
        prop_assert_eq!(&aliased, &product(&a, &a));

        let mut aliased = a.clone();
        aliased.mul_in_place(&b).unwrap();
        prop_assert_eq!(&aliased, &product(&a, &b));

        let mut aliased = a.clone();
        aliased.add_in_place(&b).unwrap();
        prop_assert_eq!(&aliased, &sum(&a, &b));

        let mut aliased = a.clone();
        aliased.sub_in_place(&b).unwrap();
        prop_assert_eq!(&aliased, &difference(&a, &b));
    }

    #[test]
    fn shift_matches_oracle(a in bignum(), shift in 0usize..64) {
        let mut dest = Bignum::zero();
        shift_left(&a, shift, &mut dest).unwrap();
        assert_canonical(&dest);
        prop_assert_eq!(to_oracle(&dest), to_oracle(&a) << shift);
    }

    #[test]
    fn decimal_matches_oracle(a in bignum()) {
        let s = to_decimal_string(&a);
        prop_assert_eq!(&s, &to_oracle(&a).to_string());
        if a.is_negative() {
            prop_assert!(s.starts_with('-'));
            prop_assert!(!s[1..].starts_with('0'));
        }
    }

    #[test]
    fn modes_agree(n in 0u64..3000) {
        let reference = compute(Mode::FastDoublingV1, n).unwrap();
        for mode in Mode::ALL {
            prop_assert_eq!(&compute(mode, n).unwrap(), &reference, "{} F({})", mode, n);
        }
    }

    #[test]
    fn fibonacci_addition_property(n in 0u64..2000) {
        let f0 = compute(Mode::FastDoublingV0, n).unwrap();
        let f1 = compute(Mode::FastDoublingV0, n + 1).unwrap();
        let f2 = compute(Mode::FastDoublingV0, n + 2).unwrap();
        prop_assert_eq!(sum(&f0, &f1), f2);
    }
}

#[test]
fn canonical_zero_renders_as_zero() {
    assert_eq!(to_decimal_string(&Bignum::zero()), "0");
    let z = difference(&Bignum::from(7u64), &Bignum::from(7u64));
    assert_eq!(to_decimal_string(&z), "0");
}

#[test]
fn every_mode_matches_oracle_recurrence() {
    let mut a = BigInt::from(0u8);
    let mut b = BigInt::from(1u8);
    for n in 0..=400u64 {
        for mode in Mode::ALL {
            assert_eq!(to_oracle(&compute(mode, n).unwrap()), a, "{mode} F({n})");
        }
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
}
