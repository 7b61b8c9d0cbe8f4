//! Unsigned add/subtract and comparison on word arrays, ignoring sign.

use std::cmp::Ordering;

use super::arith::{add_with_carry, sub_with_borrow};
use super::{Bignum, BnError, Word};

/// `acc += other` where `acc.len() >= other.len()`; returns the carry out.
fn add_assign_words(acc: &mut [Word], other: &[Word]) -> Word {
    let (low, high) = acc.split_at_mut(other.len());
    let mut carry = 0;
    for (a, &b) in low.iter_mut().zip(other) {
        (*a, carry) = add_with_carry(*a, b, carry);
    }
    for a in high {
        if carry == 0 {
            break;
        }
        (*a, carry) = add_with_carry(*a, 0, carry);
    }
    carry
}

/// `acc -= other`; returns the borrow out (zero when `acc >= other`).
fn sub_assign_words(acc: &mut [Word], other: &[Word]) -> Word {
    let mut borrow = 0;
    for (i, a) in acc.iter_mut().enumerate() {
        let b = other.get(i).copied().unwrap_or(0);
        (*a, borrow) = sub_with_borrow(*a, b, borrow);
    }
    borrow
}

/// `acc = other - acc` with `acc.len() == other.len()`; returns the borrow out.
fn rsub_assign_words(acc: &mut [Word], other: &[Word]) -> Word {
    let mut borrow = 0;
    for (a, &b) in acc.iter_mut().zip(other) {
        (*a, borrow) = sub_with_borrow(b, *a, borrow);
    }
    borrow
}

impl Bignum {
    /// Compare `|self|` with `|other|`.
    ///
    /// Word counts are compared first; words are only walked from the top
    /// when both values need the same number of words.
    #[must_use]
    pub fn compare_magnitude(&self, other: &Bignum) -> Ordering {
        let len = self.significant_len();
        len.cmp(&other.significant_len()).then_with(|| {
            self.number[..len]
                .iter()
                .rev()
                .cmp(other.number[..len].iter().rev())
        })
    }

    /// `|self| = |self| + |other|`, keeping the sign of `self`.
    pub(crate) fn add_magnitude_assign(&mut self, other: &Bignum) -> Result<(), BnError> {
        let other_words = &other.number[..other.significant_len()];
        // Widening plus the final carry word, reserved in one step so nothing
        // fails after mutation starts.
        self.reserve(other_words.len().saturating_sub(self.size()) + 1)?;
        if self.size() < other_words.len() {
            self.resize(other_words.len())?;
        }
        let carry = add_assign_words(&mut self.number, other_words);
        if carry != 0 {
            self.number.push(carry);
        }
        Ok(())
    }

    /// `|self| = |self| - |other|`; requires `|self| >= |other|`.
    pub(crate) fn sub_magnitude_assign(&mut self, other: &Bignum) -> Result<(), BnError> {
        if self.compare_magnitude(other) == Ordering::Less {
            return Err(BnError::PreconditionViolation(
                "magnitude subtraction with |a| < |b|",
            ));
        }
        let other_words = &other.number[..other.significant_len()];
        let borrow = sub_assign_words(&mut self.number, other_words);
        debug_assert_eq!(borrow, 0);
        self.normalize();
        Ok(())
    }

    /// `|self| = |other| - |self|`; requires `|other| >= |self|`.
    pub(crate) fn rsub_magnitude_assign(&mut self, other: &Bignum) -> Result<(), BnError> {
        if self.compare_magnitude(other) == Ordering::Greater {
            return Err(BnError::PreconditionViolation(
                "reverse magnitude subtraction with |a| > |b|",
            ));
        }
        let other_words = &other.number[..other.significant_len()];
        // Only zero words are dropped when self is wider than other.
        self.resize(other_words.len())?;
        let borrow = rsub_assign_words(&mut self.number, other_words);
        debug_assert_eq!(borrow, 0);
        self.normalize();
        Ok(())
    }
}

/// `c = |a| + |b|`. The result is non-negative.
///
/// # Example
/// ```
/// use bnfib_core::bignum::{add_magnitude, Bignum};
///
/// let a = Bignum::from_words(&[u64::MAX], true);
/// let b = Bignum::from(1u64);
/// let mut c = Bignum::zero();
/// add_magnitude(&a, &b, &mut c).unwrap();
/// assert_eq!(c.words(), &[0, 1]);
/// ```
pub fn add_magnitude(a: &Bignum, b: &Bignum, c: &mut Bignum) -> Result<(), BnError> {
    let (long, short) = if a.significant_len() >= b.significant_len() {
        (a, b)
    } else {
        (b, a)
    };
    let needed = long.significant_len() + 1;
    c.reserve(needed.saturating_sub(c.size()))?;
    c.copy_from(long)?;
    c.sign = false;
    c.add_magnitude_assign(short)?;
    c.normalize();
    Ok(())
}

/// `c = |a| - |b|`; requires `|a| >= |b|`. The result is non-negative and trimmed.
pub fn sub_magnitude(a: &Bignum, b: &Bignum, c: &mut Bignum) -> Result<(), BnError> {
    if a.compare_magnitude(b) == Ordering::Less {
        return Err(BnError::PreconditionViolation(
            "magnitude subtraction with |a| < |b|",
        ));
    }
    c.copy_from(a)?;
    c.sign = false;
    c.sub_magnitude_assign(b)
}
