//! Income normalization functionality.
//!
//! This module converts the raw income-form snapshot into an annual
//! [`AggregatedIncome`] position: monthly entries are annualized, the
//! medical allowance is capped at the statutory limit, and gross, exempt,
//! and taxable income are derived.

use rust_decimal::Decimal;

use crate::config::StatutoryCaps;
use crate::models::{AggregatedIncome, FormSnapshot};

/// Months in a tax year; monthly entries are annualized by this factor.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Direct-annual income fields summed into gross income alongside the
/// salary components.
const ANNUAL_INCOME_FIELDS: [&str; 8] = [
    "directorship_fee",
    "bonus_commission",
    "employment_termination_payment",
    "retirement_from_approved_funds",
    "profit_on_debt_15",
    "profit_on_debt_12_5",
    "rent_income",
    "other_taxable_income",
];

/// Returns the effective annual figure for a dual-entry salary component:
/// the direct annual field plus twelve times the monthly field, so a
/// return entered either way normalizes to the same totals.
fn annualized(snapshot: &FormSnapshot, component: &str) -> Decimal {
    snapshot.amount(&format!("annual_{component}"))
        + snapshot.amount(&format!("monthly_{component}")) * MONTHS_PER_YEAR
}

/// Normalizes the income snapshot into an annual income position.
///
/// Monthly fields are annualized as `monthly × 12`; negative and
/// non-numeric inputs read as zero through the snapshot accessors. The
/// medical allowance is capped at the statutory limit, with the excess
/// dropped rather than carried elsewhere.
///
/// Exempt income is produced as a NEGATIVE adjustment (the FBR return
/// template convention): `-(capped medical + employment termination
/// payment + retirement from approved funds)`, so that
/// `taxable_income = gross_income + exempt_income`.
///
/// Pure function of the snapshot and caps; no side effects.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use tax_engine::calculation::normalize_income;
/// use tax_engine::config::StatutoryCaps;
/// use tax_engine::models::FormSnapshot;
///
/// let mut income = FormSnapshot::new();
/// income.set_amount("monthly_basic_salary", Decimal::from(100_000));
///
/// let caps = StatutoryCaps { medical_allowance_cap: Decimal::from(120_000) };
/// let aggregated = normalize_income(&income, &caps);
/// assert_eq!(aggregated.annual_basic_salary, Decimal::from(1_200_000));
/// ```
pub fn normalize_income(snapshot: &FormSnapshot, caps: &StatutoryCaps) -> AggregatedIncome {
    let annual_basic_salary = annualized(snapshot, "basic_salary");
    let annual_allowances_total = annualized(snapshot, "allowances")
        + annualized(snapshot, "house_rent_allowance")
        + annualized(snapshot, "conveyance_allowance");

    // Excess over the cap is dropped, not taxed and not carried elsewhere.
    let annual_medical_allowance =
        annualized(snapshot, "medical_allowance").min(caps.medical_allowance_cap);

    let annual_fields: Decimal = ANNUAL_INCOME_FIELDS
        .iter()
        .map(|field| snapshot.amount(field))
        .sum();

    let employment_termination_payment = snapshot.amount("employment_termination_payment");
    let retirement_from_approved_funds = snapshot.amount("retirement_from_approved_funds");

    // Negative-exempt convention: exempt income enters as a negative
    // adjustment added to gross, never subtracted a second time.
    let exempt_income = -(annual_medical_allowance
        + employment_termination_payment
        + retirement_from_approved_funds);

    let gross_income =
        annual_basic_salary + annual_allowances_total + annual_medical_allowance + annual_fields;

    let taxable_income = gross_income + exempt_income;

    AggregatedIncome {
        annual_basic_salary,
        annual_allowances_total,
        annual_medical_allowance,
        gross_income,
        exempt_income,
        taxable_income,
        salary_tax_deducted: snapshot.amount("salary_tax_deducted"),
        additional_tax_deducted: snapshot.amount("additional_tax_deducted"),
    }
}
