//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax-year
//! rate configurations from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{CapsConfig, SlabsConfig, TaxYearConfig, TaxYearMetadata, WithholdingConfig};

/// Loads tax-year rate configurations from a directory of YAML files.
///
/// # Directory Structure
///
/// A tax-year configuration directory has the following structure:
/// ```text
/// config/2025-26/
/// ├── year.yaml        # Tax year metadata
/// ├── slabs.yaml       # Progressive slabs and surcharge
/// ├── withholding.yaml # Withholding rates per collection head
/// └── caps.yaml        # Statutory caps (medical allowance, ...)
/// ```
///
/// # Example
///
/// ```no_run
/// use tax_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/2025-26").unwrap();
/// println!("Loaded rates for {}", loader.config().tax_year());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxYearConfig,
}

impl ConfigLoader {
    /// Loads the rate configuration for one tax year from a directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tax-year directory (e.g., "./config/2025-26")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TaxYearMetadata>(&path.join("year.yaml"))?;
        let slabs_config = Self::load_yaml::<SlabsConfig>(&path.join("slabs.yaml"))?;
        let withholding_config = Self::load_yaml::<WithholdingConfig>(&path.join("withholding.yaml"))?;
        let caps_config = Self::load_yaml::<CapsConfig>(&path.join("caps.yaml"))?;

        let config = TaxYearConfig::new(
            metadata,
            slabs_config.slabs,
            slabs_config.surcharge,
            withholding_config.rates,
            caps_config.caps,
        );

        info!(
            tax_year = config.tax_year(),
            slabs = config.slabs().len(),
            withholding_rates = config.withholding_rates().len(),
            "Loaded tax year configuration"
        );

        Ok(Self { config })
    }

    /// Loads every tax-year configuration found under a root directory.
    ///
    /// Each subdirectory of `root` is expected to be one tax-year
    /// configuration directory; the returned map is keyed by the tax-year
    /// identifier from each directory's `year.yaml`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tax_engine::config::ConfigLoader;
    ///
    /// let configs = ConfigLoader::load_all("./config").unwrap();
    /// assert!(configs.contains_key("2025-26"));
    /// ```
    pub fn load_all<P: AsRef<Path>>(root: P) -> EngineResult<HashMap<String, TaxYearConfig>> {
        let root = root.as_ref();
        let root_str = root.display().to_string();

        let entries = fs::read_dir(root).map_err(|_| EngineError::ConfigNotFound {
            path: root_str.clone(),
        })?;

        let mut configs = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: root_str.clone(),
            })?;

            let path = entry.path();
            if path.is_dir() {
                let loader = Self::load(&path)?;
                let config = loader.into_config();
                configs.insert(config.tax_year().to_string(), config);
            }
        }

        if configs.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax year directories found)", root_str),
            });
        }

        Ok(configs)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tax year configuration.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Consumes the loader and returns the owned configuration.
    pub fn into_config(self) -> TaxYearConfig {
        self.config
    }
}
