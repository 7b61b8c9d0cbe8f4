//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by the engines.
//! `FibCalculator` is a decorator that adds the small-index short-circuit and logging.

use std::sync::Arc;

use tracing::debug;

use crate::bignum::{Bignum, BnError};

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The bignum engine failed.
    #[error(transparent)]
    Bignum(#[from] BnError),

    /// The requested mode does not exist.
    #[error("unknown mode: {0}")]
    UnknownMode(String),
}

/// Public trait for Fibonacci calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: u64) -> Result<Bignum, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for engine implementations.
/// Wrapped by `FibCalculator` which adds the short-circuit and logging.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation.
    fn calculate_core(&self, n: u64) -> Result<Bignum, FibError>;

    /// Get the name of this engine.
    fn name(&self) -> &str;
}

/// F(0) and F(1) are their own index.
pub(crate) fn small_index(n: u64) -> Option<Bignum> {
    (n < 2).then(|| Bignum::from(n))
}

/// Decorator that wraps a `CoreCalculator` with the small-index short-circuit.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: u64) -> Result<Bignum, FibError> {
        if let Some(value) = small_index(n) {
            return Ok(value);
        }

        debug!(mode = self.inner.name(), n, "computing");
        let result = self.inner.calculate_core(n)?;
        debug!(
            mode = self.inner.name(),
            n,
            words = result.size(),
            bits = result.msb(),
            "computed"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
