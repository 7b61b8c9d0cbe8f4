//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates over the bits of n from MSB to LSB, so the cost is
//! O(log n) bignum multiplications.

use tracing::trace;

use crate::bignum::{shift_left, Bignum, BnError};
use crate::calculator::{small_index, CoreCalculator, FibError};

/// How scratch registers are reused across doubling steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchStrategy {
    /// Two scratch registers; the next pair is copied back into place.
    CopyBack,
    /// One scratch register; the next pair is rotated in with swaps.
    Swap,
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use bnfib_core::calculator::CoreCalculator;
/// use bnfib_core::fastdoubling::{FastDoubling, ScratchStrategy};
///
/// let calc = FastDoubling::new(ScratchStrategy::Swap);
/// let result = calc.calculate_core(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling {
    scratch: ScratchStrategy,
}

impl FastDoubling {
    /// Create a fast doubling calculator with the given scratch strategy.
    #[must_use]
    pub fn new(scratch: ScratchStrategy) -> Self {
        Self { scratch }
    }

    fn copy_back(n: u64) -> Result<Bignum, BnError> {
        let mut f1 = Bignum::zero(); // F(k)
        let mut f2 = Bignum::one(); // F(k+1)
        let mut k1 = Bignum::allocate(1)?;
        let mut k2 = Bignum::allocate(1)?;

        let num_bits = u64::BITS - n.leading_zeros();
        for i in (0..num_bits).rev() {
            // k1 = F(2k)
            shift_left(&f2, 1, &mut k1)?;
            k1.sub_in_place(&f1)?;
            k1.mul_in_place(&f1)?;

            // k2 = F(2k+1)
            f1.square_in_place()?;
            f2.square_in_place()?;
            k2.copy_from(&f1)?;
            k2.add_in_place(&f2)?;

            if (n >> i) & 1 == 1 {
                f1.copy_from(&k2)?;
                f2.copy_from(&k1)?;
                f2.add_in_place(&k2)?;
            } else {
                f1.copy_from(&k1)?;
                f2.copy_from(&k2)?;
            }
            trace!(bit = i, words = f1.size(), "doubling step");
        }
        Ok(f1)
    }

    fn swap(n: u64) -> Result<Bignum, BnError> {
        let mut f1 = Bignum::zero(); // F(k)
        let mut f2 = Bignum::one(); // F(k+1)
        let mut k = Bignum::allocate(1)?;

        let num_bits = u64::BITS - n.leading_zeros();
        for i in (0..num_bits).rev() {
            shift_left(&f2, 1, &mut k)?;
            k.sub_in_place(&f1)?;
            k.mul_in_place(&f1)?;

            f1.square_in_place()?;
            f2.square_in_place()?;
            f2.add_in_place(&f1)?;
            // f1 = F(2k), f2 = F(2k+1)
            Bignum::swap(&mut f1, &mut k);

            if (n >> i) & 1 == 1 {
                // f1 = F(2k+1), f2 = F(2k+2)
                Bignum::swap(&mut f1, &mut f2);
                f2.add_in_place(&f1)?;
            }
            trace!(bit = i, words = f1.size(), "doubling step");
        }
        Ok(f1)
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: u64) -> Result<Bignum, FibError> {
        if let Some(value) = small_index(n) {
            return Ok(value);
        }
        let result = match self.scratch {
            ScratchStrategy::CopyBack => Self::copy_back(n)?,
            ScratchStrategy::Swap => Self::swap(n)?,
        };
        Ok(result)
    }

    fn name(&self) -> &'static str {
        match self.scratch {
            ScratchStrategy::CopyBack => "fast-doubling-v0",
            ScratchStrategy::Swap => "fast-doubling-v1",
        }
    }
}
