//! Application entry point and dispatch.

use std::fs::File;
use std::io::{self, BufWriter};
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use tracing::{info, warn};

use bnfib_cli::output::{write_stats, write_to_file};
use bnfib_cli::presenter::CLIResultPresenter;
use bnfib_cli::progress::SweepProgress;
use bnfib_cli::ui;
use bnfib_core::registry::DefaultFactory;
use bnfib_orchestration::calculator_selection::get_calculators_to_run;
use bnfib_orchestration::{
    analyze_comparison_results, execute_calculations, sweep, CalculationResult,
    CancellationToken, OrchestrationError, ResultPresenter,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bnfib_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    config.validate()?;

    if config.is_benchmark() {
        return run_bench(config);
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.mode, &factory)?;
    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    ctrlc_handler(cancel.clone());

    info!(n = config.n, mode = %config.mode, "computing");
    let results = execute_calculations(&calculators, config.n, &cancel);

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose > 0, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(value) => presenter.present_result(
                &result.algorithm,
                config.n,
                value,
                result.duration,
                config.details,
            ),
            Err(e) => presenter.present_error(&format!("{}: {e}", result.algorithm)),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    if let Some(summary) = failure_summary(&results) {
        ui::print_warning(&summary);
    }

    // Write to file if requested
    if let Some(path) = &config.output {
        match results.iter().find_map(CalculationResult::value) {
            Some(value) => write_to_file(path, value)
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => ui::print_warning(&format!("no result to write to {}", path.display())),
        }
    }

    // With nothing to compare, the first failure is the run's error.
    if results.iter().all(|r| r.outcome.is_err()) {
        if let Some(Err(err)) = results.first().map(|r| &r.outcome) {
            return Err(err.clone().into());
        }
    }

    analyze_comparison_results(config.n, &results)?;
    Ok(())
}

/// Summarize failed modes when at least one other mode succeeded.
fn failure_summary(results: &[CalculationResult]) -> Option<String> {
    let failed: Vec<&str> = results
        .iter()
        .filter(|r| r.outcome.is_err())
        .map(|r| r.algorithm.as_str())
        .collect();
    if failed.is_empty() || failed.len() == results.len() {
        return None;
    }
    Some(format!(
        "{} of {} modes failed: {}",
        failed.len(),
        results.len(),
        failed.join(", ")
    ))
}

fn run_bench(config: &AppConfig) -> Result<()> {
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.mode, &factory)?;
    let [calc] = calculators.as_slice() else {
        return Err(OrchestrationError::Config(
            "benchmarking measures a single mode; pick one instead of all".into(),
        )
        .into());
    };

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    if let Some(core) = config.pin_core {
        pin_current_thread(core);
    }

    let range = bench_range(config);
    let points = (range.end() - range.start()).saturating_add(1);
    info!(
        mode = calc.name(),
        from = *range.start(),
        to = *range.end(),
        samples = config.samples,
        "measuring"
    );

    let progress = SweepProgress::new(points, config.quiet || config.sweep_to.is_none());
    let measured = sweep(calc.as_ref(), range, config.samples, &cancel, |p| {
        progress.on_point(p);
    });
    progress.finish();
    let stats = measured?;

    match &config.stats_out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_stats(&mut BufWriter::new(file), &stats, config.json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !config.quiet {
                ui::print_success(&format!(
                    "{} points for {} written to {}",
                    stats.len(),
                    calc.name(),
                    path.display()
                ));
            }
        }
        None => write_stats(&mut io::stdout().lock(), &stats, config.json)?,
    }
    Ok(())
}

fn bench_range(config: &AppConfig) -> RangeInclusive<u64> {
    match config.sweep_to {
        Some(max_n) => 0..=max_n,
        None => config.n..=config.n,
    }
}

fn pin_current_thread(core: usize) {
    let Some(ids) = core_affinity::get_core_ids() else {
        warn!(core, "core ids unavailable, not pinning");
        return;
    };
    match ids.into_iter().find(|id| id.id == core) {
        Some(id) if core_affinity::set_for_current(id) => info!(core, "pinned measuring thread"),
        _ => warn!(core, "could not pin measuring thread"),
    }
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || {
        cancel.cancel();
    }) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }
}
