//! Tax computation result models.
//!
//! This module contains the [`TaxComputationResult`] produced by the tax
//! computation assembler and the [`ReturnComputation`] envelope returned
//! for one full recomputation of a tax return.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::income::AggregatedIncome;
use super::wealth::WealthReconciliationResult;
use super::withholding::WithholdingLedger;

/// The assembled tax position for one return.
///
/// Invariant: `refund_due = max(0, total_tax_paid - total_tax_liability)`
/// and `additional_tax_due = max(0, total_tax_liability - total_tax_paid)`;
/// at most one of the two is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputationResult {
    /// Income chargeable under the normal regime (after deductible
    /// allowances, excluding capital gains).
    pub taxable_income: Decimal,
    /// Normal income tax from the progressive slab walk.
    pub normal_income_tax: Decimal,
    /// Surcharge on normal tax for incomes above the threshold.
    pub surcharge: Decimal,
    /// Tax on capital gains, taken from the capital-gains section.
    pub capital_gains_tax: Decimal,
    /// Total tax reductions claimed.
    pub tax_reductions: Decimal,
    /// Total tax credits claimed.
    pub tax_credits: Decimal,
    /// Net tax payable after reductions and credits (never negative).
    pub total_tax_liability: Decimal,
    /// Tax already paid: salary deductions plus withholding collected.
    pub total_tax_paid: Decimal,
    /// Refund due when payments exceed the liability.
    pub refund_due: Decimal,
    /// Balance payable when the liability exceeds payments.
    pub additional_tax_due: Decimal,
}

/// The complete result of recomputing a tax return.
///
/// Wraps the derived value objects from every stage of the pipeline
/// together with identification metadata. The caller owns persistence of
/// both the input snapshots and this result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnComputation {
    /// Unique identifier for this computation.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The tax year the rate configuration was taken from.
    pub tax_year: String,
    /// The normalized annual income position.
    pub income: AggregatedIncome,
    /// The aggregated withholding position.
    pub withholding: WithholdingLedger,
    /// The assembled tax position.
    pub tax: TaxComputationResult,
    /// The wealth reconciliation that gates submission.
    pub wealth: WealthReconciliationResult,
}
