//! Wealth reconciliation functionality.
//!
//! This module computes the movement in declared net assets between two
//! years and compares it against declared inflows minus outflows. The
//! resulting unreconciled difference gates submission of the return: the
//! statement must net to zero within tolerance before filing is allowed.

use rust_decimal::Decimal;

use crate::models::{AggregatedIncome, FormSnapshot, WealthReconciliationResult};

/// Asset categories declared per year in the wealth statement.
const ASSET_FIELDS: [&str; 8] = [
    "property",
    "investment",
    "vehicle",
    "jewellery",
    "cash",
    "bank_balance",
    "provident_fund",
    "other_assets",
];

/// Liability categories declared per year in the wealth statement.
const LIABILITY_FIELDS: [&str; 2] = ["loan", "other_liabilities"];

/// Sums a category list for one year suffix ("current_year"/"previous_year").
fn year_total(wealth: &FormSnapshot, fields: &[&str], year: &str) -> Decimal {
    fields
        .iter()
        .map(|field| wealth.amount(&format!("{field}_{year}")))
        .sum()
}

/// Net assets (assets minus liabilities) declared for one year.
fn net_assets(wealth: &FormSnapshot, year: &str) -> Decimal {
    year_total(wealth, &ASSET_FIELDS, year) - year_total(wealth, &LIABILITY_FIELDS, year)
}

/// Reconciles the wealth statement against declared inflows and outflows.
///
/// Inflows are income declared subject to normal tax, the exempt-income
/// magnitude, income under the final tax regime, plus the declared
/// reconciliation lines: foreign remittance, inheritance, gift received,
/// asset-disposal gain/loss (signed; a loss reduces inflows), and other
/// inflows. Outflows are household expenses, outflow adjustments, gift
/// value, and loss on disposal.
///
/// The gift value appears on BOTH sides. That mirrors the FBR return
/// template this engine reproduces; the net effect cancels, and whether
/// it is a deliberate wash entry or a double-count awaits product
/// sign-off, so neither side is dropped here.
///
/// A failed reconciliation is returned as data; the caller blocks the
/// submit action while [`is_reconciled`] is false and shows the exact
/// difference to the user.
///
/// [`is_reconciled`]: WealthReconciliationResult::is_reconciled
pub fn reconcile_wealth(
    wealth: &FormSnapshot,
    income: &AggregatedIncome,
    final_tax_income: Decimal,
    personal_expenses: Decimal,
) -> WealthReconciliationResult {
    let net_assets_current_year = net_assets(wealth, "current_year");
    let net_assets_previous_year = net_assets(wealth, "previous_year");
    let net_assets_increase = net_assets_current_year - net_assets_previous_year;

    // Exempt income is stored with the template's negative sign; the money
    // that actually flowed in is its magnitude.
    let income_exempt_from_tax = -income.exempt_income;

    let gift_value = wealth.amount("gift_value");

    let total_inflows = income.taxable_income
        + income_exempt_from_tax
        + final_tax_income
        + wealth.amount("foreign_remittance")
        + wealth.amount("inheritance")
        + gift_value
        + wealth.signed_amount("asset_disposal_gain_loss")
        + wealth.amount("other_inflows");

    let total_outflows = personal_expenses
        + wealth.amount("adjustments_outflows")
        + gift_value
        + wealth.amount("loss_on_disposal");

    let calculated_net_increase = total_inflows - total_outflows;
    let unreconciled_difference = net_assets_increase - calculated_net_increase;

    WealthReconciliationResult {
        net_assets_current_year,
        net_assets_previous_year,
        net_assets_increase,
        total_inflows,
        total_outflows,
        calculated_net_increase,
        unreconciled_difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn zero_income() -> AggregatedIncome {
        AggregatedIncome {
            annual_basic_salary: Decimal::ZERO,
            annual_allowances_total: Decimal::ZERO,
            annual_medical_allowance: Decimal::ZERO,
            gross_income: Decimal::ZERO,
            exempt_income: Decimal::ZERO,
            taxable_income: Decimal::ZERO,
            salary_tax_deducted: Decimal::ZERO,
            additional_tax_deducted: Decimal::ZERO,
        }
    }

    fn income_with(taxable: Decimal, exempt: Decimal) -> AggregatedIncome {
        AggregatedIncome {
            taxable_income: taxable,
            exempt_income: exempt,
            ..zero_income()
        }
    }

    /// Wealth statement netting 5,000,000 current / 4,500,000 previous.
    fn sample_wealth() -> FormSnapshot {
        let mut wealth = FormSnapshot::new();
        wealth.set_amount("property_current_year", dec("3500000"));
        wealth.set_amount("cash_current_year", dec("1000000"));
        wealth.set_amount("bank_balance_current_year", dec("900000"));
        wealth.set_amount("loan_current_year", dec("400000"));
        wealth.set_amount("property_previous_year", dec("3500000"));
        wealth.set_amount("cash_previous_year", dec("800000"));
        wealth.set_amount("bank_balance_previous_year", dec("500000"));
        wealth.set_amount("loan_previous_year", dec("300000"));
        wealth
    }

    /// WE-001: net assets derive from the category sums
    #[test]
    fn test_net_assets_from_category_sums() {
        let result = reconcile_wealth(
            &sample_wealth(),
            &zero_income(),
            Decimal::ZERO,
            Decimal::ZERO,
        );

        assert_eq!(result.net_assets_current_year, dec("5000000"));
        assert_eq!(result.net_assets_previous_year, dec("4500000"));
        assert_eq!(result.net_assets_increase, dec("500000"));
    }

    /// WE-002: a 50,000 shortfall blocks submission
    #[test]
    fn test_unreconciled_difference_blocks_submission() {
        let mut wealth = sample_wealth();
        wealth.set_amount("foreign_remittance", dec("700000"));

        // Inflows 700,000, outflows 150,000, net assets moved 500,000.
        let result = reconcile_wealth(&wealth, &zero_income(), Decimal::ZERO, dec("150000"));

        assert_eq!(result.total_inflows, dec("700000"));
        assert_eq!(result.total_outflows, dec("150000"));
        assert_eq!(result.calculated_net_increase, dec("550000"));
        assert_eq!(result.unreconciled_difference, dec("-50000"));
        assert!(!result.is_reconciled());
    }

    /// WE-003: a statement that nets to zero reconciles
    #[test]
    fn test_balanced_statement_reconciles() {
        let mut wealth = sample_wealth();
        wealth.set_amount("foreign_remittance", dec("650000"));

        let result = reconcile_wealth(&wealth, &zero_income(), Decimal::ZERO, dec("150000"));

        assert_eq!(result.unreconciled_difference, Decimal::ZERO);
        assert!(result.is_reconciled());
    }

    /// WE-004: taxable and exempt income both flow in
    #[test]
    fn test_income_feeds_inflows() {
        let income = income_with(dec("2400000"), dec("-120000"));

        let result = reconcile_wealth(&FormSnapshot::new(), &income, dec("500000"), Decimal::ZERO);

        // 2,400,000 taxable + 120,000 exempt magnitude + 500,000 final tax.
        assert_eq!(result.total_inflows, dec("3020000"));
    }

    /// WE-005: the gift value is counted on both sides and cancels
    #[test]
    fn test_gift_dual_counted() {
        let mut wealth = FormSnapshot::new();
        wealth.set_amount("gift_value", dec("300000"));

        let result = reconcile_wealth(&wealth, &zero_income(), Decimal::ZERO, Decimal::ZERO);

        assert_eq!(result.total_inflows, dec("300000"));
        assert_eq!(result.total_outflows, dec("300000"));
        assert_eq!(result.calculated_net_increase, Decimal::ZERO);
    }

    /// WE-006: a disposal loss reduces inflows through the signed field
    #[test]
    fn test_disposal_loss_reduces_inflows() {
        let mut wealth = FormSnapshot::new();
        wealth.set_amount("asset_disposal_gain_loss", dec("-75000"));
        wealth.set_amount("other_inflows", dec("100000"));

        let result = reconcile_wealth(&wealth, &zero_income(), Decimal::ZERO, Decimal::ZERO);

        assert_eq!(result.total_inflows, dec("25000"));
    }

    /// WE-007: the reconciliation identity holds exactly
    #[test]
    fn test_reconciliation_identity() {
        let mut wealth = sample_wealth();
        wealth.set_amount("foreign_remittance", dec("123456"));
        wealth.set_amount("inheritance", dec("78910"));
        wealth.set_amount("gift_value", dec("11121"));
        wealth.set_amount("adjustments_outflows", dec("3141"));
        wealth.set_amount("loss_on_disposal", dec("592"));

        let income = income_with(dec("1234567"), dec("-89012"));
        let result = reconcile_wealth(&wealth, &income, dec("34567"), dec("654321"));

        assert_eq!(
            result.unreconciled_difference,
            result.net_assets_increase - (result.total_inflows - result.total_outflows)
        );
        assert_eq!(
            result.calculated_net_increase,
            result.total_inflows - result.total_outflows
        );
    }

    /// WE-008: idempotent for identical inputs
    #[test]
    fn test_idempotent_for_identical_inputs() {
        let wealth = sample_wealth();
        let income = income_with(dec("500000"), Decimal::ZERO);

        let first = reconcile_wealth(&wealth, &income, Decimal::ZERO, dec("100000"));
        let second = reconcile_wealth(&wealth, &income, Decimal::ZERO, dec("100000"));

        assert_eq!(first, second);
    }
}
