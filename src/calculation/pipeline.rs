//! Full-return computation pipeline.
//!
//! One call recomputes everything for a return from its nine form
//! snapshots: income normalization, cross-form linking, withholding
//! aggregation, tax assembly, and wealth reconciliation. Re-running the
//! whole pipeline after any single form edit is the only refresh
//! strategy; there is no incremental recomputation to get out of sync.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::TaxYearConfig;
use crate::models::{FormSnapshot, ReturnComputation};

use super::assembler::assemble_tax_computation;
use super::cross_form_linker::link_adjustable_tax;
use super::income_normalizer::normalize_income;
use super::section_totals::{final_tax_income_total, personal_expenses_total};
use super::wealth_reconciliation::reconcile_wealth;
use super::withholding::aggregate_withholding;

/// The nine per-section form snapshots making up one tax return.
///
/// Owned by the caller; sections the user has not filled in yet default
/// to empty snapshots and contribute zero everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnForms {
    /// The income form (salary, allowances, other income, tax deducted).
    #[serde(default)]
    pub income: FormSnapshot,
    /// The adjustable (withholding) tax form.
    #[serde(default)]
    pub adjustable_tax: FormSnapshot,
    /// The tax reductions form.
    #[serde(default)]
    pub reductions: FormSnapshot,
    /// The tax credits form.
    #[serde(default)]
    pub credits: FormSnapshot,
    /// The deductible allowances form.
    #[serde(default)]
    pub deductions: FormSnapshot,
    /// The final/fixed tax form.
    #[serde(default)]
    pub final_tax: FormSnapshot,
    /// The capital gains form.
    #[serde(default)]
    pub capital_gain: FormSnapshot,
    /// The household expenses form.
    #[serde(default)]
    pub expenses: FormSnapshot,
    /// The wealth statement and reconciliation form.
    #[serde(default)]
    pub wealth: FormSnapshot,
}

/// Recomputes the full tax position for a return.
///
/// The stages run in dependency order: the income snapshot is normalized,
/// its linked amounts are materialized into the adjustable-tax snapshot,
/// withholding is aggregated over the result, the tax position is
/// assembled, and the wealth statement is reconciled against the income
/// and expense totals. Every stage is a pure function of its inputs, so
/// identical snapshots and configuration always produce identical
/// figures; only the envelope's computation id and timestamp differ
/// between calls.
pub fn compute_tax_return(forms: &ReturnForms, config: &TaxYearConfig) -> ReturnComputation {
    let income = normalize_income(&forms.income, config.caps());

    let adjustable_tax = link_adjustable_tax(&forms.income, &forms.adjustable_tax);
    let withholding = aggregate_withholding(&adjustable_tax, config);

    let tax = assemble_tax_computation(
        &income,
        &withholding,
        &forms.reductions,
        &forms.credits,
        &forms.deductions,
        &forms.capital_gain,
        config,
    );

    let wealth = reconcile_wealth(
        &forms.wealth,
        &income,
        final_tax_income_total(&forms.final_tax),
        personal_expenses_total(&forms.expenses),
    );

    ReturnComputation {
        computation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year: config.tax_year().to_string(),
        income,
        withholding,
        tax,
        wealth,
    }
}
