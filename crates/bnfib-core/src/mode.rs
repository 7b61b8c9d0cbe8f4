//! Algorithm selector and the two entry points exposed to drivers.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::bignum::Bignum;
use crate::calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
use crate::fastdoubling::{FastDoubling, ScratchStrategy};
use crate::linear::{LinearIteration, RegisterStrategy};

/// The four Fibonacci engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    /// Linear iteration, two rotating registers.
    LinearV0,
    /// Linear iteration, registers indexed by parity.
    LinearV1,
    /// Fast doubling, two scratch registers copied back.
    FastDoublingV0,
    /// Fast doubling, one scratch register rotated with swaps.
    FastDoublingV1,
}

impl Mode {
    /// Every mode, in selector order.
    pub const ALL: [Mode; 4] = [
        Mode::LinearV0,
        Mode::LinearV1,
        Mode::FastDoublingV0,
        Mode::FastDoublingV1,
    ];

    /// Stable name, also accepted by `FromStr`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::LinearV0 => "linear-v0",
            Mode::LinearV1 => "linear-v1",
            Mode::FastDoublingV0 => "fast-doubling-v0",
            Mode::FastDoublingV1 => "fast-doubling-v1",
        }
    }

    /// Build the engine behind this mode.
    #[must_use]
    pub fn core(self) -> Arc<dyn CoreCalculator> {
        match self {
            Mode::LinearV0 => Arc::new(LinearIteration::new(RegisterStrategy::Rotating)),
            Mode::LinearV1 => Arc::new(LinearIteration::new(RegisterStrategy::Parity)),
            Mode::FastDoublingV0 => Arc::new(FastDoubling::new(ScratchStrategy::CopyBack)),
            Mode::FastDoublingV1 => Arc::new(FastDoubling::new(ScratchStrategy::Swap)),
        }
    }

    /// Whether this mode runs in O(log n) multiplications.
    #[must_use]
    pub fn is_logarithmic(self) -> bool {
        matches!(self, Mode::FastDoublingV0 | Mode::FastDoublingV1)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FibError;

    /// Accepts the mode name or its numeric selector (`0`..`3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Mode::ALL
                .get(index)
                .copied()
                .ok_or_else(|| FibError::UnknownMode(s.to_string()));
        }
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FibError::UnknownMode(s.to_string()))
    }
}

/// Compute F(n) with the selected engine.
///
/// # Example
/// ```
/// use bnfib_core::{compute, to_decimal_string, Mode};
///
/// let f = compute(Mode::LinearV0, 10).unwrap();
/// assert_eq!(to_decimal_string(&f), "55");
/// ```
pub fn compute(mode: Mode, n: u64) -> Result<Bignum, FibError> {
    FibCalculator::new(mode.core()).calculate(n)
}

/// Render a bignum as its minimal decimal string.
#[must_use]
pub fn to_decimal_string(value: &Bignum) -> String {
    value.to_decimal_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn numeric_selectors() {
        assert_eq!("0".parse::<Mode>().unwrap(), Mode::LinearV0);
        assert_eq!("3".parse::<Mode>().unwrap(), Mode::FastDoublingV1);
        assert!(matches!("4".parse::<Mode>(), Err(FibError::UnknownMode(_))));
    }

    #[test]
    fn unknown_name() {
        assert!(matches!("matrix".parse::<Mode>(), Err(FibError::UnknownMode(_))));
    }

    #[test]
    fn core_names_match_modes() {
        for mode in Mode::ALL {
            assert_eq!(mode.core().name(), mode.as_str());
        }
    }

    #[test]
    fn compute_boundaries() {
        for mode in Mode::ALL {
            assert_eq!(to_decimal_string(&compute(mode, 0).unwrap()), "0");
            assert_eq!(to_decimal_string(&compute(mode, 1).unwrap()), "1");
            assert_eq!(to_decimal_string(&compute(mode, 10).unwrap()), "55");
            assert_eq!(
                to_decimal_string(&compute(mode, 92).unwrap()),
                "7540113804746346429"
            );
            assert_eq!(
                to_decimal_string(&compute(mode, 100).unwrap()),
                "354224848179261915075"
            );
        }
    }

    #[test]
    fn all_modes_bit_identical_up_to_1000() {
        for n in 0..=1000 {
            let reference = compute(Mode::FastDoublingV1, n).unwrap();
            for mode in [Mode::LinearV0, Mode::LinearV1, Mode::FastDoublingV0] {
                assert_eq!(compute(mode, n).unwrap(), reference, "{mode} F({n})");
            }
        }
    }

    #[test]
    fn logarithmic_modes() {
        assert!(Mode::FastDoublingV0.is_logarithmic());
        assert!(!Mode::LinearV1.is_logarithmic());
    }
}
