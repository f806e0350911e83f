//! Aggregated income model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The normalized annual income position derived from the income form.
///
/// All figures are annual rupee amounts. `exempt_income` follows the FBR
/// return template's spreadsheet convention: it is a NEGATIVE adjustment
/// added to gross income, not a positive figure to subtract. The sign is
/// preserved deliberately so the engine never double-negates; consumers
/// that need the exempt magnitude (the wealth reconciliation inflows)
/// negate it explicitly at the use site.
///
/// Derived on every call from the income snapshot and the statutory caps;
/// never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedIncome {
    /// Annual basic salary (direct annual entry plus annualized monthly).
    pub annual_basic_salary: Decimal,
    /// Annual allowances excluding medical: general, house rent, conveyance.
    pub annual_allowances_total: Decimal,
    /// Annual medical allowance after the statutory cap.
    pub annual_medical_allowance: Decimal,
    /// Sum of all taxable income components before exemptions.
    pub gross_income: Decimal,
    /// Exempt income as a negative adjustment to gross income.
    pub exempt_income: Decimal,
    /// `gross_income + exempt_income` (exempt enters as a negative).
    pub taxable_income: Decimal,
    /// Tax deducted from salary at source, carried for the tax-paid total.
    pub salary_tax_deducted: Decimal,
    /// Additional tax deducted at source, carried for the tax-paid total.
    pub additional_tax_deducted: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> AggregatedIncome {
        AggregatedIncome {
            annual_basic_salary: dec("7200000"),
            annual_allowances_total: dec("960000"),
            annual_medical_allowance: dec("120000"),
            gross_income: dec("8320000"),
            exempt_income: dec("-120000"),
            taxable_income: dec("8200000"),
            salary_tax_deducted: dec("1800000"),
            additional_tax_deducted: dec("0"),
        }
    }

    #[test]
    fn test_taxable_income_is_gross_plus_negative_exempt() {
        let income = sample();
        assert_eq!(
            income.taxable_income,
            income.gross_income + income.exempt_income
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let income = sample();
        let json = serde_json::to_string(&income).unwrap();

        assert!(json.contains("\"annual_basic_salary\":\"7200000\""));
        assert!(json.contains("\"exempt_income\":\"-120000\""));

        let back: AggregatedIncome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, income);
    }
}
