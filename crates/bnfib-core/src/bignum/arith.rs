//! Word-level carry, borrow and widening-multiply primitives.

use super::{DoubleWord, SignedDoubleWord, Word, WORD_BITS};

/// Add with carry: `a + carry + b -> (sum, new_carry)`.
///
/// The carry is folded into `a` first and the two overflow checks are
/// chained, so `new_carry` is at most 1.
#[inline]
#[must_use]
pub fn add_with_carry(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let (t, c1) = a.overflowing_add(carry);
    let (sum, c2) = t.overflowing_add(b);
    (sum, Word::from(c1) + Word::from(c2))
}

/// Subtract with borrow: `a - b - borrow -> (diff, new_borrow)`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sub_with_borrow(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let diff =
        SignedDoubleWord::from(a) - SignedDoubleWord::from(b) - SignedDoubleWord::from(borrow);
    if diff < 0 {
        ((diff + (1 << WORD_BITS)) as Word, 1)
    } else {
        (diff as Word, 0)
    }
}

/// Multiply and accumulate: `acc + a * k + carry -> (low, high)`.
///
/// The widened sum never overflows: `(2^w - 1)^2 + 2 * (2^w - 1) = 2^2w - 1`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_add_carry(a: Word, k: Word, acc: Word, carry: Word) -> (Word, Word) {
    let wide = DoubleWord::from(a) * DoubleWord::from(k)
        + DoubleWord::from(acc)
        + DoubleWord::from(carry);
    (wide as Word, (wide >> WORD_BITS) as Word)
}
