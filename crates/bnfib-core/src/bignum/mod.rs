//! Variable-length signed integers over a little-endian word array.
//!
//! `number[0]` holds the least significant word and `number[size - 1]` the
//! most significant one. Zero is always `size == 1`, word `0`, non-negative.
//!
//! Operations that write into a destination come in two call styles:
//! a three-address form taking a distinct `&mut` destination, and an
//! in-place form (`*_in_place`) where the destination is also an input.
//! Every value leaving a public operation is normalized.

pub(crate) mod arith;
mod bits;
mod decimal;
mod magnitude;
mod mul;
mod shift;
mod signed;

use std::collections::TryReserveError;
use std::fmt;
use std::hash::{Hash, Hasher};

pub use magnitude::{add_magnitude, sub_magnitude};
pub use mul::mul;
pub use shift::shift_left;
pub use signed::{add, sub};

/// One limb of the representation.
pub type Word = u64;

/// Unsigned accumulator wide enough for a word-by-word product plus carry.
pub type DoubleWord = u128;

/// Signed accumulator used for borrow propagation.
pub type SignedDoubleWord = i128;

/// Width of a [`Word`] in bits.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Errors raised by the bignum engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BnError {
    /// The word array could not be grown.
    #[error("out of memory growing word array to {words} words")]
    OutOfMemory {
        /// Requested size in words.
        words: usize,
    },

    /// A resize to zero words was requested.
    #[error("cannot resize a bignum to zero words")]
    InvalidResize,

    /// An internal primitive was called outside its contract.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
}

impl BnError {
    fn oom(words: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |_| Self::OutOfMemory { words }
    }
}

/// Arbitrary-precision signed integer.
///
/// Equality and hashing compare values: high zero words left by
/// `allocate` or `resize` do not make two equal numbers differ.
#[derive(Clone)]
pub struct Bignum {
    number: Vec<Word>,
    sign: bool,
}

impl Bignum {
    /// Allocate a zero-valued bignum holding exactly `size` words.
    ///
    /// A request for zero words is rounded up to one, since the
    /// representation always carries at least one word.
    ///
    /// # Example
    /// ```
    /// use bnfib_core::Bignum;
    ///
    /// let b = Bignum::allocate(4).unwrap();
    /// assert_eq!(b.size(), 4);
    /// assert!(b.is_zero());
    /// ```
    pub fn allocate(size: usize) -> Result<Self, BnError> {
        let size = size.max(1);
        let mut number = Vec::new();
        number.try_reserve_exact(size).map_err(BnError::oom(size))?;
        number.resize(size, 0);
        Ok(Self {
            number,
            sign: false,
        })
    }

    /// Canonical zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            number: vec![0],
            sign: false,
        }
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self::from(1u64)
    }

    /// Build a bignum from little-endian words and a sign, normalizing the result.
    #[must_use]
    pub fn from_words(words: &[Word], negative: bool) -> Self {
        let mut number = words.to_vec();
        if number.is_empty() {
            number.push(0);
        }
        let mut b = Self {
            number,
            sign: negative,
        };
        b.normalize();
        b
    }

    /// Number of words currently held.
    #[must_use]
    pub fn size(&self) -> usize {
        self.number.len()
    }

    /// The word array, least significant word first.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.number
    }

    /// Whether the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// Whether the value is zero, regardless of how many words hold it.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.number.iter().all(|&w| w == 0)
    }

    /// Flip the sign. Zero stays non-negative.
    pub fn negate(&mut self) {
        self.sign = !self.sign && !self.is_zero();
    }

    /// Return the negation of `self`.
    #[must_use]
    pub fn negated(&self) -> Self {
        let mut b = self.clone();
        b.negate();
        b
    }

    /// Grow or shrink the word array in place.
    ///
    /// Growing zero-fills the new high words. Shrinking truncates and loses
    /// whatever the dropped words held; only shrink over known-zero words.
    pub fn resize(&mut self, new_size: usize) -> Result<(), BnError> {
        if new_size == 0 {
            return Err(BnError::InvalidResize);
        }
        let size = self.size();
        if new_size > size {
            self.number
                .try_reserve_exact(new_size - size)
                .map_err(BnError::oom(new_size))?;
            self.number.resize(new_size, 0);
        } else if new_size < size {
            self.number.truncate(new_size);
        }
        Ok(())
    }

    /// Make `self` an independent copy of `src`.
    pub fn copy_from(&mut self, src: &Bignum) -> Result<(), BnError> {
        self.resize(src.size())?;
        self.number.copy_from_slice(&src.number);
        self.sign = src.sign;
        Ok(())
    }

    /// Exchange the whole representation of two bignums in constant time.
    pub fn swap(a: &mut Bignum, b: &mut Bignum) {
        std::mem::swap(a, b);
    }

    /// Set the value to canonical zero, keeping the allocation.
    pub fn set_zero(&mut self) {
        self.number.truncate(1);
        self.number[0] = 0;
        self.sign = false;
    }

    /// Trim superfluous leading zero words and clear the sign of zero.
    pub(crate) fn normalize(&mut self) {
        let len = self.significant_len();
        self.number.truncate(len);
        if len == 1 && self.number[0] == 0 {
            self.sign = false;
        }
    }

    /// Minimal number of words needed to hold the value (at least one).
    pub(crate) fn significant_len(&self) -> usize {
        self.number
            .iter()
            .rposition(|&w| w != 0)
            .map_or(1, |top| top + 1)
    }

    /// Reserve room for `extra` more words without changing the value.
    pub(crate) fn reserve(&mut self, extra: usize) -> Result<(), BnError> {
        let words = self.size() + extra;
        self.number
            .try_reserve(extra)
            .map_err(BnError::oom(words))
    }
}

impl PartialEq for Bignum {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign
            && self.number[..self.significant_len()] == other.number[..other.significant_len()]
    }
}

impl Eq for Bignum {}

impl Hash for Bignum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.number[..self.significant_len()].hash(state);
    }
}

impl Default for Bignum {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Bignum {
    fn from(value: u64) -> Self {
        Self {
            number: vec![value],
            sign: false,
        }
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl fmt::Debug for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bignum")
            .field("size", &self.size())
            .field("sign", &self.sign)
            .field("number", &format_args!("{:x?}", self.number))
            .finish()
    }
}
