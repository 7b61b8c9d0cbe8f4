//! Error handling and exit codes.

use bnfib_core::calculator::FibError;
use bnfib_core::constants::exit_codes;
use bnfib_orchestration::OrchestrationError;

/// Exit code for an engine error.
#[must_use]
pub fn fib_exit_code(err: &FibError) -> i32 {
    match err {
        FibError::Bignum(_) => exit_codes::ERROR_GENERIC,
        FibError::UnknownMode(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an orchestration error.
#[must_use]
pub fn handle_error(err: &OrchestrationError) -> i32 {
    match err {
        OrchestrationError::Fib(e) => fib_exit_code(e),
        OrchestrationError::Cancelled => exit_codes::ERROR_CANCELED,
        OrchestrationError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        OrchestrationError::NoResults => exit_codes::ERROR_GENERIC,
        OrchestrationError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for any application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<OrchestrationError>() {
        handle_error(e)
    } else if let Some(e) = err.downcast_ref::<FibError>() {
        fib_exit_code(e)
    } else {
        exit_codes::ERROR_GENERIC
    }
}
