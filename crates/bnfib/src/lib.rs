//! bnfib library: application logic for the Fibonacci calculator.

pub mod app;
pub mod config;
pub mod errors;
