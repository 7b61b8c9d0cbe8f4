//! # bnfib-core
//!
//! Arbitrary-precision Fibonacci numbers on a self-contained bignum engine.
//! Provides linear and fast doubling recurrences over a little-endian
//! word array with schoolbook multiplication and double-dabble decimal output.
//!
//! Drivers need only [`compute`] and [`to_decimal_string`].

pub mod bignum;
pub mod calculator;
pub mod constants;
pub mod fastdoubling;
pub mod linear;
pub mod mode;
pub mod native;
pub mod registry;

// Re-exports
pub use bignum::{Bignum, BnError};
pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, MAX_FIB_U64};
pub use mode::{compute, to_decimal_string, Mode};
pub use registry::{CalculatorFactory, DefaultFactory};
