//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use bnfib_core::calculator::Calculator;
use bnfib_core::native::fib_sequence;
use bnfib_core::Bignum;

use crate::cancel::CancellationToken;
use crate::error::OrchestrationError;
use crate::interfaces::CalculationResult;

/// Name reported for the machine-word baseline in mismatch errors.
pub const NATIVE_BASELINE: &str = "native-u64";

fn run_one(calc: &dyn Calculator, n: u64, cancel: &CancellationToken) -> CalculationResult {
    let start = Instant::now();
    let outcome = cancel
        .check_cancelled()
        .and_then(|()| calc.calculate(n).map_err(OrchestrationError::from));
    CalculationResult {
        algorithm: calc.name().to_string(),
        outcome,
        duration: start.elapsed(),
    }
}

/// Execute F(n) with all given calculators.
///
/// A single calculator runs on the calling thread; several run in parallel
/// on the rayon pool. The token is checked before each calculation starts.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: u64,
    cancel: &CancellationToken,
) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), n, cancel)];
    }

    calculators
        .par_iter()
        .map(|calc| run_one(calc.as_ref(), n, cancel))
        .collect()
}

/// Analyze results for mismatches.
///
/// Every successful result must equal the first one. For indices that fit in
/// a machine word they must also equal the native baseline.
pub fn analyze_comparison_results(
    n: u64,
    results: &[CalculationResult],
) -> Result<(), OrchestrationError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.value().map(|v| (r.algorithm.as_str(), v)));

    let Some((first_name, first_value)) = valid.next() else {
        warn!(n, "no calculation succeeded");
        return Err(OrchestrationError::NoResults);
    };

    if let Some(expected) = fib_sequence(n) {
        if *first_value != Bignum::from(expected) {
            warn!(n, mode = first_name, "disagrees with native baseline");
            return Err(OrchestrationError::Mismatch {
                n,
                first: NATIVE_BASELINE.to_string(),
                second: first_name.to_string(),
            });
        }
    }

    for (name, value) in valid {
        if value != first_value {
            warn!(n, first = first_name, second = name, "result mismatch");
            return Err(OrchestrationError::Mismatch {
                n,
                first: first_name.to_string(),
                second: name.to_string(),
            });
        }
    }

    info!(n, "all results agree");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use bnfib_core::registry::DefaultFactory;
    use bnfib_core::Mode;

    fn ok(name: &str, value: u64) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome: Ok(Bignum::from(value)),
            duration: Duration::from_millis(1),
        }
    }

    fn failed(name: &str) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome: Err(OrchestrationError::Cancelled),
            duration: Duration::from_millis(1),
        }
    }

    fn all_calculators() -> Vec<Arc<dyn Calculator>> {
        let factory = DefaultFactory::new();
        Mode::ALL.iter().map(|&m| factory.get_mode(m)).collect()
    }

    #[test]
    fn execute_single_calculator() {
        let factory = DefaultFactory::new();
        let calc = factory.get_mode(Mode::FastDoublingV1);
        let results = execute_calculations(&[calc], 100, &CancellationToken::new());
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].value().unwrap().to_string(),
            "354224848179261915075"
        );
    }

    #[test]
    fn execute_all_calculators_parallel() {
        let results = execute_calculations(&all_calculators(), 500, &CancellationToken::new());
        assert_eq!(results.len(), 4);
        for r in &results {
            assert!(r.outcome.is_ok(), "{} failed: {:?}", r.algorithm, r.outcome);
        }
        assert!(analyze_comparison_results(500, &results).is_ok());
    }

    #[test]
    fn execute_preserves_calculator_order() {
        let results = execute_calculations(&all_calculators(), 10, &CancellationToken::new());
        let names: Vec<&str> = results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(
            names,
            ["linear-v0", "linear-v1", "fast-doubling-v0", "fast-doubling-v1"]
        );
    }

    #[test]
    fn execute_with_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let results = execute_calculations(&all_calculators(), 1000, &cancel);
        assert!(results
            .iter()
            .all(|r| r.outcome == Err(OrchestrationError::Cancelled)));
        assert_eq!(
            analyze_comparison_results(1000, &results),
            Err(OrchestrationError::NoResults)
        );
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok("a", 55), ok("b", 55)];
        assert!(analyze_comparison_results(10, &results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("a", 55), ok("b", 55), ok("c", 56)];
        assert_eq!(
            analyze_comparison_results(500, &results),
            Err(OrchestrationError::Mismatch {
                n: 500,
                first: "a".into(),
                second: "c".into(),
            })
        );
    }

    #[test]
    fn analyze_checks_native_baseline() {
        let results = vec![ok("a", 56)];
        assert_eq!(
            analyze_comparison_results(10, &results),
            Err(OrchestrationError::Mismatch {
                n: 10,
                first: NATIVE_BASELINE.into(),
                second: "a".into(),
            })
        );
    }

    #[test]
    fn analyze_skips_baseline_past_u64() {
        // F(94) does not fit in a word, so only pairwise agreement is checked.
        let results = vec![ok("a", 7), ok("b", 7)];
        assert!(analyze_comparison_results(94, &results).is_ok());
    }

    #[test]
    fn analyze_mixed_valid_and_error_results() {
        let results = vec![failed("a"), ok("b", 55)];
        assert!(analyze_comparison_results(10, &results).is_ok());
    }

    #[test]
    fn analyze_empty_results() {
        assert_eq!(
            analyze_comparison_results(10, &[]),
            Err(OrchestrationError::NoResults)
        );
    }
}
