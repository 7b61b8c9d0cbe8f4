//! Latency statistics for repeated `compute` calls.
//!
//! Each index is sampled several times. Samples outside `mean ± 2·sd`
//! (the 95% band) are dropped before the reported mean is taken.

use std::ops::RangeInclusive;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use bnfib_core::calculator::Calculator;

use crate::cancel::CancellationToken;
use crate::error::OrchestrationError;

/// Summary of the samples taken for one index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencyStats {
    /// Fibonacci index.
    pub n: u64,
    /// Number of samples taken.
    pub samples: usize,
    /// Mean of all samples, in nanoseconds.
    pub mean_ns: f64,
    /// Sample standard deviation (divisor `samples - 1`), in nanoseconds.
    pub std_dev_ns: f64,
    /// Mean of the samples inside the 2σ band, in nanoseconds.
    pub filtered_mean_ns: f64,
    /// Number of samples inside the 2σ band.
    pub kept: usize,
}

impl LatencyStats {
    /// Summarize raw nanosecond samples. Returns `None` for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_samples(n: u64, samples_ns: &[f64]) -> Option<Self> {
        if samples_ns.is_empty() {
            return None;
        }
        let count = samples_ns.len() as f64;
        let mean = samples_ns.iter().sum::<f64>() / count;
        let std_dev = if samples_ns.len() > 1 {
            let sq: f64 = samples_ns.iter().map(|x| (x - mean) * (x - mean)).sum();
            (sq / (count - 1.0)).sqrt()
        } else {
            0.0
        };

        let (lo, hi) = (mean - 2.0 * std_dev, mean + 2.0 * std_dev);
        let (sum, kept) = samples_ns
            .iter()
            .filter(|&&x| x >= lo && x <= hi)
            .fold((0.0, 0usize), |(s, k), x| (s + x, k + 1));

        let filtered_mean = if kept == 0 { mean } else { sum / kept as f64 };

        Some(Self {
            n,
            samples: samples_ns.len(),
            mean_ns: mean,
            std_dev_ns: std_dev,
            filtered_mean_ns: filtered_mean,
            kept,
        })
    }

    /// One line of plot data: `<n> <filtered-mean-ns> samples: <kept>`.
    #[must_use]
    pub fn plot_line(&self) -> String {
        format!("{} {:.5} samples: {}", self.n, self.filtered_mean_ns, self.kept)
    }
}

/// Time `samples` calls of F(n) and summarize them.
///
/// The token is checked before every sample.
#[allow(clippy::cast_precision_loss)]
pub fn measure_latency(
    calc: &dyn Calculator,
    n: u64,
    samples: usize,
    cancel: &CancellationToken,
) -> Result<LatencyStats, OrchestrationError> {
    if samples == 0 {
        return Err(OrchestrationError::Config(
            "sample count must be at least 1".into(),
        ));
    }

    let mut times = Vec::with_capacity(samples);
    for _ in 0..samples {
        cancel.check_cancelled()?;
        let start = Instant::now();
        calc.calculate(n)?;
        times.push(start.elapsed().as_nanos() as f64);
    }

    let stats = LatencyStats::from_samples(n, &times).ok_or(OrchestrationError::NoResults)?;
    debug!(
        mode = calc.name(),
        n,
        mean_ns = stats.filtered_mean_ns,
        kept = stats.kept,
        "measured"
    );
    Ok(stats)
}

/// Measure every index in `range`, calling `on_point` after each one.
pub fn sweep<F>(
    calc: &dyn Calculator,
    range: RangeInclusive<u64>,
    samples: usize,
    cancel: &CancellationToken,
    mut on_point: F,
) -> Result<Vec<LatencyStats>, OrchestrationError>
where
    F: FnMut(&LatencyStats),
{
    let mut points = Vec::new();
    for n in range {
        let stats = measure_latency(calc, n, samples, cancel)?;
        on_point(&stats);
        points.push(stats);
    }
    Ok(points)
}
