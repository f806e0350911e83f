//! Section total functionality.
//!
//! The reductions, credits, deductions, final-tax, capital-gains, and
//! household-expenses sections all reduce to simple field-sums over fixed
//! field lists, with missing or invalid fields reading as zero. The
//! totals feed the tax computation assembler and the wealth
//! reconciliation engine.

use rust_decimal::Decimal;

use crate::models::FormSnapshot;

const REDUCTION_FIELDS: [&str; 5] = [
    "teacher_reduction",
    "behbood_reduction",
    "export_income_reduction",
    "industrial_undertaking_reduction",
    "other_reductions",
];

const CREDIT_FIELDS: [&str; 5] = [
    "charitable_donation",
    "pension_contribution",
    "life_insurance_premium",
    "investment_tax_credit",
    "other_credits",
];

const DEDUCTION_FIELDS: [&str; 5] = [
    "zakat",
    "ushr",
    "tax_paid_foreign_country",
    "advance_tax",
    "other_deductions",
];

const FINAL_TAX_TAX_FIELDS: [&str; 4] = [
    "sukuk_bonds_tax_amount",
    "debt_securities_tax_amount",
    "prize_bonds_tax_amount",
    "other_final_tax_tax_amount",
];

const FINAL_TAX_GROSS_FIELDS: [&str; 4] = [
    "sukuk_bonds_gross_amount",
    "debt_securities_gross_amount",
    "prize_bonds_gross_amount",
    "other_final_tax_gross_amount",
];

const CAPITAL_GAIN_FIELDS: [&str; 5] = [
    "property_1_year",
    "property_2_3_years",
    "property_4_plus_years",
    "securities",
    "other_capital_gains",
];

const CAPITAL_GAIN_TAX_FIELDS: [&str; 5] = [
    "property_1_year_tax_deducted",
    "property_2_3_years_tax_deducted",
    "property_4_plus_years_tax_deducted",
    "securities_tax_deducted",
    "other_capital_gains_tax_deducted",
];

const EXPENSE_FIELDS: [&str; 13] = [
    "rent",
    "rates",
    "income_tax",
    "vehicle",
    "travelling",
    "electricity",
    "water",
    "gas",
    "telephone",
    "medical",
    "educational",
    "donations",
    "other_expenses",
];

fn sum_fields(snapshot: &FormSnapshot, fields: &[&str]) -> Decimal {
    fields.iter().map(|field| snapshot.amount(field)).sum()
}

/// Total tax reductions claimed in the reductions form.
pub fn reductions_total(reductions: &FormSnapshot) -> Decimal {
    sum_fields(reductions, &REDUCTION_FIELDS)
}

/// Total tax credits claimed in the credits form.
pub fn credits_total(credits: &FormSnapshot) -> Decimal {
    sum_fields(credits, &CREDIT_FIELDS)
}

/// Total deductible allowances claimed in the deductions form.
pub fn deductions_total(deductions: &FormSnapshot) -> Decimal {
    sum_fields(deductions, &DEDUCTION_FIELDS)
}

/// Total tax due under the final/fixed tax regime.
pub fn final_tax_total(final_tax: &FormSnapshot) -> Decimal {
    sum_fields(final_tax, &FINAL_TAX_TAX_FIELDS)
}

/// Total income received under the final/fixed tax regime.
///
/// This is the gross side of the final-tax form; it feeds the wealth
/// reconciliation inflows.
pub fn final_tax_income_total(final_tax: &FormSnapshot) -> Decimal {
    sum_fields(final_tax, &FINAL_TAX_GROSS_FIELDS)
}

/// Total capital gains declared in the capital-gains form.
pub fn capital_gains_income_total(capital_gain: &FormSnapshot) -> Decimal {
    sum_fields(capital_gain, &CAPITAL_GAIN_FIELDS)
}

/// Total tax deducted on capital gains.
pub fn capital_gains_tax_total(capital_gain: &FormSnapshot) -> Decimal {
    sum_fields(capital_gain, &CAPITAL_GAIN_TAX_FIELDS)
}

/// Total declared household/personal expenses.
///
/// Feeds the wealth reconciliation outflows.
pub fn personal_expenses_total(expenses: &FormSnapshot) -> Decimal {
    sum_fields(expenses, &EXPENSE_FIELDS)
}
