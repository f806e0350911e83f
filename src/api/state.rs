//! Application state for the Tax Computation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::TaxYearConfig;
use crate::error::{EngineError, EngineResult};

/// Shared application state.
///
/// Holds the immutable rate configurations for every loaded tax year,
/// keyed by tax-year identifier. Configurations are shared read-only
/// across handlers; each computation receives the one it asked for by
/// value reference, so computations for different tax years cannot
/// interfere.
#[derive(Clone)]
pub struct AppState {
    configs: Arc<HashMap<String, TaxYearConfig>>,
}

impl AppState {
    /// Creates a new application state from loaded tax-year configurations.
    pub fn new(configs: HashMap<String, TaxYearConfig>) -> Self {
        Self {
            configs: Arc::new(configs),
        }
    }

    /// Returns the configuration for a tax year.
    ///
    /// A missing tax year is a fatal configuration error for the request:
    /// no computation can proceed without a rate table.
    pub fn config_for(&self, tax_year: &str) -> EngineResult<&TaxYearConfig> {
        self.configs
            .get(tax_year)
            .ok_or_else(|| EngineError::TaxYearNotFound {
                tax_year: tax_year.to_string(),
            })
    }

    /// Returns the loaded tax-year identifiers.
    pub fn tax_years(&self) -> Vec<&str> {
        self.configs.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_config_for_known_year() {
        let configs = ConfigLoader::load_all("./config").unwrap();
        let state = AppState::new(configs);

        assert!(state.config_for("2025-26").is_ok());
    }

    #[test]
    fn test_tax_years_lists_loaded_years() {
        let configs = ConfigLoader::load_all("./config").unwrap();
        let state = AppState::new(configs);

        assert!(state.tax_years().contains(&"2025-26"));
    }

    #[test]
    fn test_config_for_unknown_year_is_error() {
        let configs = ConfigLoader::load_all("./config").unwrap();
        let state = AppState::new(configs);

        match state.config_for("2019-20") {
            Err(EngineError::TaxYearNotFound { tax_year }) => {
                assert_eq!(tax_year, "2019-20");
            }
            other => panic!("Expected TaxYearNotFound, got {:?}", other.err()),
        }
    }
}
