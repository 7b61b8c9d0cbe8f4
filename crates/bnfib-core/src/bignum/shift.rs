//! Left shift by less than one word.

use super::{Bignum, BnError, WORD_BITS};

/// `dest = src << (shift % WORD_BITS)`.
///
/// Only sub-word shifts are supported; the amount is reduced modulo the word
/// width. A zero amount copies `src` into `dest`. `dest` grows by one word
/// when set bits would leave the top word.
///
/// # Example
/// ```
/// use bnfib_core::bignum::{shift_left, Bignum};
///
/// let src = Bignum::from(1u64 << 63);
/// let mut dest = Bignum::zero();
/// shift_left(&src, 1, &mut dest).unwrap();
/// assert_eq!(dest.words(), &[0, 1]);
/// ```
pub fn shift_left(src: &Bignum, shift: usize, dest: &mut Bignum) -> Result<(), BnError> {
    let shift = shift % WORD_BITS;
    if shift == 0 {
        return dest.copy_from(src);
    }

    let size = src.size();
    let overflow = shift > src.count_leading_zeros();
    dest.resize(if overflow { size + 1 } else { size })?;

    let s = &src.number;
    let d = &mut dest.number;
    if overflow {
        d[size] = s[size - 1] >> (WORD_BITS - shift);
    }
    for i in (1..size).rev() {
        d[i] = (s[i] << shift) | (s[i - 1] >> (WORD_BITS - shift));
    }
    d[0] = s[0] << shift;

    dest.sign = src.sign;
    dest.normalize();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shifted(src: &Bignum, shift: usize) -> Bignum {
        let mut dest = Bignum::zero();
        shift_left(src, shift, &mut dest).unwrap();
        dest
    }

    #[test]
    fn doubles_single_word() {
        assert_eq!(shifted(&Bignum::from(21u64), 1), Bignum::from(42u64));
    }

    #[test]
    fn carries_bits_between_words() {
        let src = Bignum::from_words(&[1 << 63, 1], false);
        assert_eq!(shifted(&src, 1).words(), &[0, 3]);
    }

    #[test]
    fn grows_when_top_bits_overflow() {
        let src = Bignum::from_words(&[0, u64::MAX], false);
        let dest = shifted(&src, 4);
        assert_eq!(dest.words(), &[0, u64::MAX << 4, 0xf]);
    }

    #[test]
    fn does_not_grow_when_room_remains() {
        let src = Bignum::from(1u64 << 59);
        let dest = shifted(&src, 4);
        assert_eq!(dest.words(), &[1 << 63]);
    }

    #[test]
    fn amount_taken_modulo_word_width() {
        let src = Bignum::from(3u64);
        assert_eq!(shifted(&src, WORD_BITS + 2), Bignum::from(12u64));
    }

    #[test]
    fn zero_shift_copies_source() {
        let src = Bignum::from_words(&[1, 2], true);
        let mut dest = Bignum::from(77u64);
        shift_left(&src, 0, &mut dest).unwrap();
        assert_eq!(dest, src);

        shift_left(&src, WORD_BITS, &mut dest).unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn keeps_sign() {
        let src = Bignum::from_words(&[5], true);
        assert_eq!(shifted(&src, 1), Bignum::from_words(&[10], true));
    }

    #[test]
    fn wide_destination_is_shrunk() {
        let mut dest = Bignum::from_words(&[1, 2, 3, 4], false);
        shift_left(&Bignum::from(1u64), 3, &mut dest).unwrap();
        assert_eq!(dest, Bignum::from(8u64));
    }
}
