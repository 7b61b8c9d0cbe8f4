#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, BigUint, Sign};

use bnfib_core::bignum::{add, mul, shift_left, sub, Bignum};

fn to_oracle(b: &Bignum) -> BigInt {
    let bytes: Vec<u8> = b.words().iter().flat_map(|w| w.to_le_bytes()).collect();
    let sign = if b.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, BigUint::from_bytes_le(&bytes))
}

fn operand(bytes: &[u8], negative: bool) -> Bignum {
    let words: Vec<u64> = bytes
        .chunks(8)
        .map(|c| {
            let mut buf = [0u8; 8];
            buf[..c.len()].copy_from_slice(c);
            u64::from_le_bytes(buf)
        })
        .collect();
    if words.is_empty() {
        Bignum::zero()
    } else {
        Bignum::from_words(&words, negative)
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let flags = data[0];
    let rest = &data[1..];
    let split = usize::from(data[1]) % rest.len();
    let (left, right) = rest.split_at(split);
    let a = operand(&left[..left.len().min(64)], flags & 1 == 1);
    let b = operand(&right[..right.len().min(64)], flags & 2 == 2);
    let (oa, ob) = (to_oracle(&a), to_oracle(&b));

    let mut c = Bignum::zero();
    add(&a, &b, &mut c).unwrap();
    assert_eq!(to_oracle(&c), &oa + &ob);

    sub(&a, &b, &mut c).unwrap();
    assert_eq!(to_oracle(&c), &oa - &ob);

    mul(&a, &b, &mut c).unwrap();
    assert_eq!(to_oracle(&c), &oa * &ob);

    let mut sq = a.clone();
    sq.square_in_place().unwrap();
    assert_eq!(to_oracle(&sq), &oa * &oa);

    let shift = usize::from(flags >> 2);
    shift_left(&a, shift, &mut c).unwrap();
    assert_eq!(to_oracle(&c), &oa << (shift % 64));

    assert_eq!(a.to_decimal_string(), oa.to_string());
});
