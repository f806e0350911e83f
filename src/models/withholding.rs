//! Withholding ledger models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One withholding line item: a rated collection head with its gross
/// receipt and the tax collected on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingLine {
    /// The collection-head code (e.g., "directorship_fee_149_3").
    pub code: String,
    /// The section of the Income Tax Ordinance 2001 (e.g., "149(3)").
    pub section: String,
    /// The gross receipt subject to withholding.
    pub gross_receipt: Decimal,
    /// The tax collected, rounded half-up to the nearest rupee.
    pub tax_collected: Decimal,
}

/// The aggregated withholding position derived from the adjustable-tax
/// snapshot and the year's withholding rate table.
///
/// Lines appear in rate-table order. Totals cover rated collection heads
/// only: a snapshot line with no configured rate is ignored entirely so
/// unknown line items are never silently taxed or totalled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingLedger {
    /// Ordered line items for the rated collection heads in the snapshot.
    pub lines: Vec<WithholdingLine>,
    /// Sum of gross receipts over rated collection heads.
    pub total_gross_receipt: Decimal,
    /// Sum of tax collected over rated collection heads.
    pub total_tax_collected: Decimal,
}
