//! Orchestration interfaces.

use std::time::Duration;

use bnfib_core::Bignum;

use crate::error::OrchestrationError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        result: &Bignum,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison result.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Mode name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<Bignum, OrchestrationError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The computed value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&Bignum> {
        self.outcome.as_ref().ok()
    }
}
