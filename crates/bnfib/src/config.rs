//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use bnfib_orchestration::OrchestrationError;

/// bnfib: arbitrary-precision Fibonacci numbers on a word-array bignum engine.
#[derive(Parser, Debug)]
#[command(name = "bnfib", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(short, long, default_value_t = 100, env = "BNFIB_N")]
    pub n: u64,

    /// Mode: linear-v0, linear-v1, fast-doubling-v0, fast-doubling-v1 (or 0-3), or all.
    #[arg(short, long, default_value = "fast-doubling-v1", env = "BNFIB_MODE")]
    pub mode: String,

    /// Quiet mode (only output the number or the statistics).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output; repeat for debug logging. Disables result truncation.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Show word count, bit length and digit count of each result.
    #[arg(short, long)]
    pub details: bool,

    /// Write the full decimal result to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Measure the latency of F(n) instead of printing it.
    #[arg(long)]
    pub bench: bool,

    /// Samples taken per index when benchmarking.
    #[arg(long, default_value_t = 1000)]
    pub samples: usize,

    /// Measure every index from 0 up to and including this one.
    #[arg(long, value_name = "MAX_N")]
    pub sweep_to: Option<u64>,

    /// Write statistics to this file instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub stats_out: Option<PathBuf>,

    /// Export statistics as JSON instead of plot data.
    #[arg(long)]
    pub json: bool,

    /// Pin the measuring thread to this CPU core.
    #[arg(long, value_name = "CORE_ID")]
    pub pin_core: Option<usize>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether a latency measurement was requested.
    #[must_use]
    pub fn is_benchmark(&self) -> bool {
        self.bench || self.sweep_to.is_some()
    }

    /// Reject flag combinations that have no effect.
    pub fn validate(&self) -> Result<(), OrchestrationError> {
        if self.is_benchmark() {
            if self.samples == 0 {
                return Err(OrchestrationError::Config(
                    "--samples must be at least 1".into(),
                ));
            }
            if self.output.is_some() {
                return Err(OrchestrationError::Config(
                    "--output cannot be combined with --bench; use --stats-out".into(),
                ));
            }
        } else if self.json || self.stats_out.is_some() || self.pin_core.is_some() {
            return Err(OrchestrationError::Config(
                "--json, --stats-out and --pin-core require --bench or --sweep-to".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("bnfib").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.mode, "fast-doubling-v1");
        assert_eq!(config.verbose, 0);
        assert!(!config.is_benchmark());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }

    #[test]
    fn sweep_implies_benchmark() {
        let config = parse(&["--sweep-to", "50", "--samples", "3"]);
        assert!(config.is_benchmark());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_samples_rejected() {
        let config = parse(&["--bench", "--samples", "0"]);
        assert!(matches!(config.validate(), Err(OrchestrationError::Config(_))));
    }

    #[test]
    fn export_flags_need_benchmark() {
        let config = parse(&["--json"]);
        assert!(matches!(config.validate(), Err(OrchestrationError::Config(_))));
    }

    #[test]
    fn output_conflicts_with_benchmark() {
        let config = parse(&["--bench", "-o", "f.txt"]);
        assert!(config.validate().is_err());
    }
}
