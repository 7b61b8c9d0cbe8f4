//! Leading-zero count and most significant bit over the whole word array.

use super::{Bignum, WORD_BITS};

impl Bignum {
    /// Count leading zero bits, scanning from the most significant word down.
    ///
    /// Zero (of any size) yields `size * WORD_BITS`.
    #[must_use]
    pub fn count_leading_zeros(&self) -> usize {
        let mut count = 0;
        for &word in self.number.iter().rev() {
            if word != 0 {
                return count + word.leading_zeros() as usize;
            }
            count += WORD_BITS;
        }
        count
    }

    /// One-based index of the highest set bit; zero for the value zero.
    #[must_use]
    pub fn msb(&self) -> usize {
        self.size() * WORD_BITS - self.count_leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clz_of_zero_is_full_width() {
        assert_eq!(Bignum::zero().count_leading_zeros(), WORD_BITS);
        let wide_zero = Bignum::allocate(3).unwrap();
        assert_eq!(wide_zero.count_leading_zeros(), 3 * WORD_BITS);
        assert_eq!(wide_zero.msb(), 0);
    }

    #[test]
    fn clz_single_word() {
        assert_eq!(Bignum::one().count_leading_zeros(), WORD_BITS - 1);
        assert_eq!(Bignum::from(u64::MAX).count_leading_zeros(), 0);
    }

    #[test]
    fn clz_skips_zero_high_words() {
        let mut b = Bignum::from(1u64);
        b.resize(2).unwrap();
        assert_eq!(b.count_leading_zeros(), 2 * WORD_BITS - 1);
        assert_eq!(b.msb(), 1);
    }

    #[test]
    fn msb_multi_word() {
        let b = Bignum::from_words(&[0, 0b100], false);
        assert_eq!(b.msb(), WORD_BITS + 3);
    }

    #[test]
    fn msb_ignores_sign() {
        let b = Bignum::from_words(&[8], true);
        assert_eq!(b.msb(), 4);
    }
}
