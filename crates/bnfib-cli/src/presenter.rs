//! CLI result presenter.

use std::time::Duration;

use bnfib_core::{to_decimal_string, Bignum, Mode};
use bnfib_orchestration::{CalculationResult, ResultPresenter};

use crate::output::{format_decimal, format_duration, format_number};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    /// Create a presenter. `verbose` prints long results in full; `quiet` prints only the number.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render one result as the lines `present_result` prints.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        n: u64,
        result: &Bignum,
        duration: Duration,
        details: bool,
    ) -> Vec<String> {
        let decimal = to_decimal_string(result);
        if self.quiet {
            return vec![decimal];
        }

        let mut lines = vec![
            format!("Mode: {algorithm}"),
            format!("N: {}", format_number(n)),
            format!("Duration: {}", format_duration(duration)),
        ];

        if details {
            lines.push(format!("Result words: {}", result.size()));
            lines.push(format!("Result bits: {}", result.msb()));
            lines.push(format!("Result digits: {}", decimal.len()));
            if let Ok(mode) = algorithm.parse::<Mode>() {
                let growth = if mode.is_logarithmic() {
                    "O(log n) multiplications"
                } else {
                    "O(n) additions"
                };
                lines.push(format!("Steps: {growth}"));
            }
        }

        lines.push(format!(
            "F({}) = {}",
            format_number(n),
            format_decimal(&decimal, self.verbose)
        ));
        lines
    }

    /// Render the rows of the comparison table, below its header.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult]) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }

        let mut lines = vec!["-".repeat(60)];
        for result in results {
            let status = match &result.outcome {
                Ok(_) => "OK".to_string(),
                Err(e) => format!("ERROR: {e}"),
            };
            lines.push(format!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            ));
        }
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        result: &Bignum,
        duration: Duration,
        details: bool,
    ) {
        for line in self.render_result(algorithm, n, result, duration, details) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }
        println!();
        ui::print_header("Comparison Results");
        for line in self.render_comparison(results) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
