//! Linear iteration: one bignum addition per index.

use crate::bignum::{Bignum, BnError};
use crate::calculator::{small_index, CoreCalculator, FibError};

/// How the two running registers are reused between iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStrategy {
    /// Add into the older register, then swap the two.
    Rotating,
    /// Two slots indexed by the parity of the loop counter.
    Parity,
}

/// Linear Fibonacci engine, O(n) additions.
///
/// # Example
/// ```
/// use bnfib_core::calculator::CoreCalculator;
/// use bnfib_core::linear::{LinearIteration, RegisterStrategy};
///
/// let calc = LinearIteration::new(RegisterStrategy::Parity);
/// assert_eq!(calc.calculate_core(100).unwrap().to_string(), "354224848179261915075");
/// ```
pub struct LinearIteration {
    strategy: RegisterStrategy,
}

impl LinearIteration {
    /// Create a linear engine with the given register strategy.
    #[must_use]
    pub fn new(strategy: RegisterStrategy) -> Self {
        Self { strategy }
    }

    /// `a = F(k-1)`, `b = F(k)`; each step turns `a` into `F(k+1)` and swaps.
    fn rotating(n: u64) -> Result<Bignum, BnError> {
        let mut a = Bignum::zero();
        let mut b = Bignum::one();
        for _ in 1..n {
            a.add_in_place(&b)?;
            Bignum::swap(&mut a, &mut b);
        }
        Ok(b)
    }

    /// `state[i & 1]` holds F(i) after step `i`.
    fn parity(n: u64) -> Result<Bignum, BnError> {
        let mut state = [Bignum::zero(), Bignum::one()];
        for i in 2..=n {
            let [even, odd] = &mut state;
            if i & 1 == 1 {
                odd.add_in_place(even)?;
            } else {
                even.add_in_place(odd)?;
            }
        }
        Ok(std::mem::take(&mut state[usize::from(n & 1 == 1)]))
    }
}

impl CoreCalculator for LinearIteration {
    fn calculate_core(&self, n: u64) -> Result<Bignum, FibError> {
        if let Some(value) = small_index(n) {
            return Ok(value);
        }
        let result = match self.strategy {
            RegisterStrategy::Rotating => Self::rotating(n)?,
            RegisterStrategy::Parity => Self::parity(n)?,
        };
        Ok(result)
    }

    fn name(&self) -> &'static str {
        match self.strategy {
            RegisterStrategy::Rotating => "linear-v0",
            RegisterStrategy::Parity => "linear-v1",
        }
    }
}
