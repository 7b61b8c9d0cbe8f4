//! Binary to decimal rendering by repeated doubling in base 10.

use super::{Bignum, WORD_BITS};

impl Bignum {
    /// Render as a minimal decimal string, with a leading `-` when negative.
    ///
    /// Walks the bits from the top; each bit doubles the decimal buffer and
    /// adds itself into the lowest digit.
    ///
    /// # Example
    /// ```
    /// use bnfib_core::Bignum;
    ///
    /// assert_eq!(Bignum::zero().to_decimal_string(), "0");
    /// assert_eq!(Bignum::from_words(&[0, 1], true).to_decimal_string(), "-18446744073709551616");
    /// ```
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        // log10(2) < 1/3, so a third of the bit count always suffices.
        let len = WORD_BITS * self.size() / 3 + 1;
        let mut digits = vec![0u8; len];

        for &word in self.number.iter().rev() {
            for bit in (0..WORD_BITS).rev() {
                let mut carry = u8::from((word >> bit) & 1 == 1);
                for d in digits.iter_mut().rev() {
                    let doubled = *d * 2 + carry;
                    carry = u8::from(doubled >= 10);
                    *d = doubled % 10;
                }
            }
        }

        let first = digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(len - 1);
        let mut out = String::with_capacity(len - first + usize::from(self.sign));
        if self.sign {
            out.push('-');
        }
        out.extend(digits[first..].iter().map(|&d| char::from(b'0' + d)));
        out
    }
}
