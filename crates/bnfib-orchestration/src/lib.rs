//! # bnfib-orchestration
//!
//! Mode selection, parallel execution, cross-validation, and latency statistics.
//! Everything here sits on top of `compute` and never reaches into the engine.

pub mod calculator_selection;
pub mod cancel;
pub mod error;
pub mod interfaces;
pub mod orchestrator;
pub mod statistics;

pub use cancel::CancellationToken;
pub use error::OrchestrationError;
pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculations};
pub use statistics::{measure_latency, sweep, LatencyStats};
