//! Tax computation assembly functionality.
//!
//! This module combines normal income tax, surcharge, capital-gains tax,
//! reductions, credits, and tax already paid into the final net
//! payable/refundable position for a return.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;
use crate::models::{AggregatedIncome, FormSnapshot, TaxComputationResult, WithholdingLedger};

use super::progressive::{calculate_progressive_tax, calculate_surcharge};
use super::section_totals::{
    capital_gains_tax_total, credits_total, deductions_total, reductions_total,
};

/// Assembles the tax computation for a return.
///
/// The slab base is the normalized taxable income net of deductible
/// allowances, floored at zero; capital gains stay outside the slab base
/// and contribute the tax figure from their own section. Reductions and
/// credits are then applied, and the result can never drive the liability
/// negative:
///
/// - `total_before = normal_income_tax + surcharge + capital_gains_tax`
/// - `total_tax_liability = max(0, total_before - reductions - credits)`
/// - `total_tax_paid = salary_tax_deducted + additional_tax_deducted +
///   withholding.total_tax_collected`
///
/// Exactly one of `refund_due` / `additional_tax_due` is non-zero, or
/// both are zero. Pure arithmetic; deterministic for identical inputs.
pub fn assemble_tax_computation(
    income: &AggregatedIncome,
    withholding: &WithholdingLedger,
    reductions: &FormSnapshot,
    credits: &FormSnapshot,
    deductions: &FormSnapshot,
    capital_gain: &FormSnapshot,
    config: &TaxYearConfig,
) -> TaxComputationResult {
    let tax_reductions = reductions_total(reductions);
    let tax_credits = credits_total(credits);
    let allowable_deductions = deductions_total(deductions);
    let capital_gains_tax = capital_gains_tax_total(capital_gain);

    let taxable_income = (income.taxable_income - allowable_deductions).max(Decimal::ZERO);

    let normal_income_tax = calculate_progressive_tax(taxable_income, config.slabs());
    let surcharge = calculate_surcharge(taxable_income, normal_income_tax, config.surcharge());

    let total_before_adjustments = normal_income_tax + surcharge + capital_gains_tax;
    let total_tax_liability =
        (total_before_adjustments - tax_reductions - tax_credits).max(Decimal::ZERO);

    let total_tax_paid = income.salary_tax_deducted
        + income.additional_tax_deducted
        + withholding.total_tax_collected;

    let balance = total_tax_liability - total_tax_paid;

    TaxComputationResult {
        taxable_income,
        normal_income_tax,
        surcharge,
        capital_gains_tax,
        tax_reductions,
        tax_credits,
        total_tax_liability,
        total_tax_paid,
        refund_due: (-balance).max(Decimal::ZERO),
        additional_tax_due: balance.max(Decimal::ZERO),
    }
}
