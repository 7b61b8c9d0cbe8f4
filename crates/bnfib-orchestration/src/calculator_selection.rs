//! Calculator selection logic.

use std::sync::Arc;

use bnfib_core::calculator::{Calculator, FibError};
use bnfib_core::registry::CalculatorFactory;

/// Selector that runs every registered mode.
pub const ALL_MODES: &str = "all";

/// Get calculators to run based on mode selection.
pub fn get_calculators_to_run(
    selection: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    if selection.eq_ignore_ascii_case(ALL_MODES) {
        factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect()
    } else {
        Ok(vec![factory.get(selection)?])
    }
}
