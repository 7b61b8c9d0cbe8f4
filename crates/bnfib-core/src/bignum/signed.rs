//! Signed addition and subtraction.

use std::cmp::Ordering;

use super::{Bignum, BnError};

impl Bignum {
    /// `self = self + rhs`.
    ///
    /// # Example
    /// ```
    /// use bnfib_core::Bignum;
    ///
    /// let mut a = Bignum::from(2u64);
    /// a.add_in_place(&Bignum::from_words(&[5], true)).unwrap();
    /// assert_eq!(a.to_string(), "-3");
    /// ```
    pub fn add_in_place(&mut self, rhs: &Bignum) -> Result<(), BnError> {
        self.add_signed(rhs, rhs.sign)
    }

    /// `self = self - rhs`. `rhs` is read with its sign flipped and never mutated.
    pub fn sub_in_place(&mut self, rhs: &Bignum) -> Result<(), BnError> {
        self.add_signed(rhs, !rhs.sign)
    }

    /// `self = self + (-1)^rhs_negative * |rhs|`.
    fn add_signed(&mut self, rhs: &Bignum, rhs_negative: bool) -> Result<(), BnError> {
        if self.sign == rhs_negative {
            self.add_magnitude_assign(rhs)?;
        } else {
            // The larger magnitude decides the sign.
            match self.compare_magnitude(rhs) {
                Ordering::Greater => self.sub_magnitude_assign(rhs)?,
                Ordering::Less => {
                    self.rsub_magnitude_assign(rhs)?;
                    self.sign = rhs_negative;
                }
                Ordering::Equal => self.set_zero(),
            }
        }
        self.normalize();
        Ok(())
    }
}

/// Reserve every word `c = a ± b` can need. On failure `c` is untouched.
fn reserve_sum(a: &Bignum, b: &Bignum, c: &mut Bignum) -> Result<(), BnError> {
    let needed = a.size().max(b.significant_len()) + 1;
    c.reserve(needed.saturating_sub(c.size()))
}

/// `c = a + b`. `c` keeps its old value if growth fails.
pub fn add(a: &Bignum, b: &Bignum, c: &mut Bignum) -> Result<(), BnError> {
    reserve_sum(a, b, c)?;
    c.copy_from(a)?;
    c.add_in_place(b)
}

/// `c = a - b`. `c` keeps its old value if growth fails.
pub fn sub(a: &Bignum, b: &Bignum, c: &mut Bignum) -> Result<(), BnError> {
    reserve_sum(a, b, c)?;
    c.copy_from(a)?;
    c.sub_in_place(b)
}
