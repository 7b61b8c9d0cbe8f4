//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, FibCalculator, FibError};
use crate::mode::Mode;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by mode name or selector.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available mode names.
    fn available(&self) -> Vec<&'static str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<Mode, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get or create the calculator for a mode.
    pub fn get_mode(&self, mode: Mode) -> Arc<dyn Calculator> {
        if let Some(calc) = self.cache.read().get(&mode) {
            return Arc::clone(calc);
        }

        let calc: Arc<dyn Calculator> = Arc::new(FibCalculator::new(mode.core()));
        Arc::clone(self.cache.write().entry(mode).or_insert(calc))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let mode: Mode = name.parse()?;
        Ok(self.get_mode(mode))
    }

    fn available(&self) -> Vec<&'static str> {
        Mode::ALL.iter().map(|m| m.as_str()).collect()
    }
}
