//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use bnfib_core::{to_decimal_string, Bignum};
use bnfib_orchestration::LatencyStats;

/// Digits kept on each side when a result is truncated.
const EDGE_DIGITS: usize = 50;

/// Format a decimal string for display, potentially truncating.
#[must_use]
pub fn format_decimal(s: &str, verbose: bool) -> String {
    let digits = s.trim_start_matches('-').len();
    if !verbose && digits > 2 * EDGE_DIGITS {
        format!(
            "{}...{} ({digits} digits)",
            &s[..EDGE_DIGITS],
            &s[s.len() - EDGE_DIGITS..]
        )
    } else {
        s.to_string()
    }
}

/// Format a `Bignum` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &Bignum, verbose: bool) -> String {
    format_decimal(&to_decimal_string(value), verbose)
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Write the full decimal result to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &Bignum) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", to_decimal_string(value))?;
    Ok(())
}

/// Write latency statistics as plot data (one line per index) or as JSON.
///
/// # Errors
///
/// Returns an I/O error if writing or serialization fails.
pub fn write_stats(out: &mut dyn Write, stats: &[LatencyStats], json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, stats)?;
        writeln!(out)?;
    } else {
        for point in stats {
            writeln!(out, "{}", point.plot_line())?;
        }
    }
    out.flush()
}
