//! Configuration types for tax computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the per-tax-year YAML configuration files.
//!
//! A [`TaxYearConfig`] is an immutable value: it is loaded (or built) once
//! and passed explicitly into every computation call, never shared as a
//! mutable singleton, so computations for different tax years cannot
//! interfere with one another.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about a tax year configuration.
///
/// Contains identifying information about the rate tables, including the
/// tax year they apply to and the statutory instrument they came from.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearMetadata {
    /// The tax year identifier (e.g., "2025-26").
    pub tax_year: String,
    /// The human-readable name of the rate configuration.
    pub name: String,
    /// The statutory instrument the rates were taken from.
    pub version: String,
    /// URL to the official FBR documentation.
    pub source_url: String,
}

/// A single progressive tax slab.
///
/// Slabs are half-open bands of taxable income: income strictly above
/// `min_income` and up to `max_income` is taxed at the marginal `rate`.
/// The last slab of a year is open-ended (`max_income` is `None`).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlab {
    /// The lower boundary of the slab (exclusive for taxation purposes).
    pub min_income: Decimal,
    /// The upper boundary of the slab, or `None` for the open-ended slab.
    #[serde(default)]
    pub max_income: Option<Decimal>,
    /// The marginal rate applied to income falling inside this slab.
    pub rate: Decimal,
}

/// Surcharge applied on top of normal income tax for high incomes.
#[derive(Debug, Clone, Deserialize)]
pub struct Surcharge {
    /// Taxable income must strictly exceed this threshold for the
    /// surcharge to apply.
    pub threshold: Decimal,
    /// The surcharge rate, applied to the normal income tax amount.
    pub rate: Decimal,
}

/// Slab configuration file structure (`slabs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct SlabsConfig {
    /// Progressive tax slabs, not necessarily sorted in the file.
    pub slabs: Vec<TaxSlab>,
    /// Surcharge configuration for the year.
    pub surcharge: Surcharge,
}

/// A withholding ("adjustable") tax rate for one statutory collection head.
///
/// Each code corresponds to one gross-receipt line in the adjustable tax
/// form; the snapshot field holding the gross receipt is derived from the
/// code via [`WithholdingRate::gross_receipt_field`].
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingRate {
    /// The collection-head code (e.g., "directorship_fee_149_3").
    pub code: String,
    /// The section of the Income Tax Ordinance 2001 (e.g., "149(3)").
    pub section: String,
    /// The withholding rate applied to the gross receipt.
    pub rate: Decimal,
    /// A description of the collection head.
    pub description: String,
}

impl WithholdingRate {
    /// Returns the adjustable-tax snapshot field holding the gross
    /// receipt for this collection head.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use tax_engine::config::WithholdingRate;
    ///
    /// let rate = WithholdingRate {
    ///     code: "rent_section_155".to_string(),
    ///     section: "155".to_string(),
    ///     rate: Decimal::new(10, 2),
    ///     description: "Rent of immovable property".to_string(),
    /// };
    /// assert_eq!(rate.gross_receipt_field(), "rent_section_155_gross_receipt");
    /// ```
    pub fn gross_receipt_field(&self) -> String {
        format!("{}_gross_receipt", self.code)
    }
}

/// Withholding configuration file structure (`withholding.yaml`).
///
/// The declaration order of the rates is preserved; it determines the
/// order of line items in the withholding ledger.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingConfig {
    /// The rated collection heads for the year.
    pub rates: Vec<WithholdingRate>,
}

/// Statutory caps applied while normalizing income.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryCaps {
    /// Annual cap on the exempt medical allowance (120,000 for 2025-26).
    pub medical_allowance_cap: Decimal,
}

/// Caps configuration file structure (`caps.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CapsConfig {
    /// Statutory caps for the year.
    pub caps: StatutoryCaps,
}

/// The complete rate configuration for one tax year.
///
/// This struct aggregates everything loaded from a tax-year configuration
/// directory. It is immutable after construction; slabs are sorted by
/// their lower boundary at construction time.
#[derive(Debug, Clone)]
pub struct TaxYearConfig {
    /// Metadata for the tax year.
    metadata: TaxYearMetadata,
    /// Progressive tax slabs, sorted ascending by `min_income`.
    slabs: Vec<TaxSlab>,
    /// Surcharge configuration.
    surcharge: Surcharge,
    /// Withholding rates in declaration order.
    withholding: Vec<WithholdingRate>,
    /// Statutory caps.
    caps: StatutoryCaps,
}

impl TaxYearConfig {
    /// Creates a new TaxYearConfig from its component parts.
    pub fn new(
        metadata: TaxYearMetadata,
        slabs: Vec<TaxSlab>,
        surcharge: Surcharge,
        withholding: Vec<WithholdingRate>,
        caps: StatutoryCaps,
    ) -> Self {
        let mut sorted_slabs = slabs;
        sorted_slabs.sort_by(|a, b| a.min_income.cmp(&b.min_income));
        Self {
            metadata,
            slabs: sorted_slabs,
            surcharge,
            withholding,
            caps,
        }
    }

    /// Returns the tax year identifier (e.g., "2025-26").
    pub fn tax_year(&self) -> &str {
        &self.metadata.tax_year
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &TaxYearMetadata {
        &self.metadata
    }

    /// Returns the progressive tax slabs, sorted ascending.
    pub fn slabs(&self) -> &[TaxSlab] {
        &self.slabs
    }

    /// Returns the surcharge configuration.
    pub fn surcharge(&self) -> &Surcharge {
        &self.surcharge
    }

    /// Returns the withholding rates in declaration order.
    pub fn withholding_rates(&self) -> &[WithholdingRate] {
        &self.withholding
    }

    /// Looks up the withholding rate for a collection-head code.
    pub fn withholding_rate(&self, code: &str) -> Option<&WithholdingRate> {
        self.withholding.iter().find(|r| r.code == code)
    }

    /// Returns the statutory caps.
    pub fn caps(&self) -> &StatutoryCaps {
        &self.caps
    }
}
