//! Orchestration errors.

use bnfib_core::FibError;

/// Errors raised while running, validating or measuring modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrchestrationError {
    /// The engine failed.
    #[error(transparent)]
    Fib(#[from] FibError),

    /// Cancelled before the next computation started.
    #[error("calculation cancelled")]
    Cancelled,

    /// Two sources produced different values for the same index.
    #[error("result mismatch for F({n}): {first} and {second} disagree")]
    Mismatch {
        /// Fibonacci index.
        n: u64,
        /// Name of the reference source.
        first: String,
        /// Name of the disagreeing source.
        second: String,
    },

    /// No computation succeeded.
    #[error("no valid results")]
    NoResults,

    /// Invalid run parameters.
    #[error("configuration error: {0}")]
    Config(String),
}
