//! Schoolbook multiplication with double-width partial products.

use super::arith::mul_add_carry;
use super::{Bignum, BnError, Word, WORD_BITS};

/// `c += a * k` over the overlapping prefix; returns the carry out of it.
fn mul_partial(a: &[Word], k: Word, c: &mut [Word]) -> Word {
    if k == 0 {
        return 0;
    }
    let mut carry = 0;
    for (&x, acc) in a.iter().zip(c.iter_mut()) {
        (*acc, carry) = mul_add_carry(x, k, *acc, carry);
    }
    carry
}

/// `c = a * b` on zeroed `c`, one row per word of `b`.
///
/// `c` may be shorter than `a.len() + b.len()`. Every partial sum is bounded
/// by the full product, so words past the end of `c` are always zero.
fn mul_words(a: &[Word], b: &[Word], c: &mut [Word]) {
    for (j, &k) in b.iter().enumerate() {
        let carry = mul_partial(a, k, &mut c[j..]);
        match c.get_mut(a.len() + j) {
            Some(top) => *top = carry,
            None => debug_assert_eq!(carry, 0),
        }
    }
}

/// Words needed for `a * b`: `ceil((msb(a) + msb(b)) / WORD_BITS)`, at least one.
fn product_size(a: &Bignum, b: &Bignum) -> usize {
    (a.msb() + b.msb()).div_ceil(WORD_BITS).max(1)
}

/// `c = a * b`. The sign is the XOR of the operand signs.
///
/// # Example
/// ```
/// use bnfib_core::bignum::{mul, Bignum};
///
/// let a = Bignum::from(u64::MAX);
/// let mut c = Bignum::zero();
/// mul(&a, &a, &mut c).unwrap();
/// assert_eq!(c.words(), &[1, u64::MAX - 1]);
/// ```
pub fn mul(a: &Bignum, b: &Bignum, c: &mut Bignum) -> Result<(), BnError> {
    c.resize(product_size(a, b))?;
    c.number.fill(0);
    mul_words(
        &a.number[..a.significant_len()],
        &b.number[..b.significant_len()],
        &mut c.number,
    );
    c.sign = a.sign ^ b.sign;
    c.normalize();
    Ok(())
}

impl Bignum {
    /// `self = self * rhs`.
    ///
    /// The product is built in a temporary and committed only once complete;
    /// on error `self` is unchanged.
    pub fn mul_in_place(&mut self, rhs: &Bignum) -> Result<(), BnError> {
        let mut product = Bignum::allocate(product_size(self, rhs))?;
        mul(self, rhs, &mut product)?;
        *self = product;
        Ok(())
    }

    /// `self = self * self`, with the same copy-then-commit rule as [`Bignum::mul_in_place`].
    pub fn square_in_place(&mut self) -> Result<(), BnError> {
        let mut product = Bignum::allocate(product_size(self, self))?;
        mul(self, self, &mut product)?;
        *self = product;
        Ok(())
    }
}
