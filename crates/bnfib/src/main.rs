//! bnfib: arbitrary-precision Fibonacci calculator.

use bnfib_cli::ui;
use bnfib_lib::{app, config, errors};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // RUST_LOG, when set, takes precedence over -v.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Parse CLI args and run
    let config = config::AppConfig::parse();
    init_tracing(config.verbose);

    if let Err(err) = app::run(&config) {
        ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
