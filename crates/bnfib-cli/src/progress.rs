//! Progress bar for latency sweeps.

use indicatif::{ProgressBar, ProgressStyle};

use bnfib_orchestration::LatencyStats;

const TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} F({msg}) eta {eta}";

/// Sweep progress display, one tick per measured index.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar for `points` indices. A hidden bar is used when `quiet`.
    #[must_use]
    pub fn new(points: u64, quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new(points);
        match ProgressStyle::with_template(TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("=> ")),
            Err(e) => tracing::debug!(error = %e, "falling back to default progress style"),
        }
        Self { bar }
    }

    /// Record one measured index.
    pub fn on_point(&self, stats: &LatencyStats) {
        self.bar.set_message(stats.n.to_string());
        self.bar.inc(1);
    }

    /// Number of indices recorded so far.
    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
