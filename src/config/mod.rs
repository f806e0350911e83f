//! Configuration loading and management for the Tax Computation Engine.
//!
//! This module provides functionality to load per-tax-year rate
//! configurations from YAML files: progressive slabs, surcharge,
//! withholding rates per statutory collection head, and statutory caps.
//!
//! # Example
//!
//! ```no_run
//! use tax_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/2025-26").unwrap();
//! println!("Loaded rates: {}", loader.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CapsConfig, SlabsConfig, StatutoryCaps, Surcharge, TaxSlab, TaxYearConfig, TaxYearMetadata,
    WithholdingConfig, WithholdingRate,
};
