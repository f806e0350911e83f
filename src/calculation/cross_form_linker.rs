//! Cross-form field linking functionality.
//!
//! Certain income-form amounts are also gross receipts subject to
//! withholding, and appear again in the adjustable-tax form. This module
//! propagates those amounts through an explicit, declarative mapping
//! table so the income form stays the single source of truth while the
//! adjustable-tax form still accepts a manual override.

use crate::models::FormSnapshot;

/// The declarative mapping from income-form fields to adjustable-tax
/// gross-receipt fields.
///
/// Each pair is `(income field, adjustable-tax gross-receipt field)`. The
/// targets match the collection-head codes in the withholding rate table.
pub const INCOME_TO_ADJUSTABLE_LINKS: [(&str, &str); 4] = [
    ("directorship_fee", "directorship_fee_149_3_gross_receipt"),
    ("profit_on_debt_15", "profit_debt_15_percent_gross_receipt"),
    ("profit_on_debt_12_5", "sukuk_12_5_percent_gross_receipt"),
    ("rent_income", "rent_section_155_gross_receipt"),
];

/// Materializes the adjustable-tax snapshot with linked income amounts.
///
/// For each mapping in [`INCOME_TO_ADJUSTABLE_LINKS`], the income amount
/// is copied into the adjustable-tax gross-receipt field only when the
/// target is unset or zero and the source is non-zero. A non-zero value
/// the user entered in the adjustable-tax form always wins, which is how
/// a user overrides the automatic link.
///
/// The inputs are not mutated; the returned snapshot is the one the
/// withholding aggregator consumes.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use tax_engine::calculation::link_adjustable_tax;
/// use tax_engine::models::FormSnapshot;
///
/// let mut income = FormSnapshot::new();
/// income.set_amount("directorship_fee", Decimal::from(40_000));
///
/// let linked = link_adjustable_tax(&income, &FormSnapshot::new());
/// assert_eq!(
///     linked.amount("directorship_fee_149_3_gross_receipt"),
///     Decimal::from(40_000),
/// );
/// ```
pub fn link_adjustable_tax(
    income: &FormSnapshot,
    adjustable_tax: &FormSnapshot,
) -> FormSnapshot {
    let mut linked = adjustable_tax.clone();

    for (source, target) in INCOME_TO_ADJUSTABLE_LINKS {
        let source_amount = income.amount(source);
        if !source_amount.is_zero() && linked.amount(target).is_zero() {
            linked.set_amount(target, source_amount);
        }
    }

    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// CF-001: unset target receives the income amount
    #[test]
    fn test_unset_target_receives_income_amount() {
        let mut income = FormSnapshot::new();
        income.set_amount("directorship_fee", dec("40000"));
        income.set_amount("rent_income", dec("240000"));

        let linked = link_adjustable_tax(&income, &FormSnapshot::new());

        assert_eq!(
            linked.amount("directorship_fee_149_3_gross_receipt"),
            dec("40000")
        );
        assert_eq!(linked.amount("rent_section_155_gross_receipt"), dec("240000"));
    }

    /// CF-002: an explicit user entry is never overwritten
    #[test]
    fn test_user_entry_wins_over_link() {
        let mut income = FormSnapshot::new();
        income.set_amount("directorship_fee", dec("40000"));

        let mut adjustable = FormSnapshot::new();
        adjustable.set_amount("directorship_fee_149_3_gross_receipt", dec("35000"));

        let linked = link_adjustable_tax(&income, &adjustable);

        assert_eq!(
            linked.amount("directorship_fee_149_3_gross_receipt"),
            dec("35000")
        );
    }

    /// CF-003: a zero target counts as unset and is overwritten
    #[test]
    fn test_zero_target_is_overwritten() {
        let mut income = FormSnapshot::new();
        income.set_amount("profit_on_debt_15", dec("150000"));

        let mut adjustable = FormSnapshot::new();
        adjustable.set_amount("profit_debt_15_percent_gross_receipt", Decimal::ZERO);

        let linked = link_adjustable_tax(&income, &adjustable);

        assert_eq!(
            linked.amount("profit_debt_15_percent_gross_receipt"),
            dec("150000")
        );
    }

    /// CF-004: a zero source leaves the target alone
    #[test]
    fn test_zero_source_leaves_target_alone() {
        let linked = link_adjustable_tax(&FormSnapshot::new(), &FormSnapshot::new());

        assert!(!linked.contains("directorship_fee_149_3_gross_receipt"));
        assert!(!linked.contains("sukuk_12_5_percent_gross_receipt"));
    }

    /// CF-005: unrelated adjustable-tax fields survive linking
    #[test]
    fn test_unrelated_fields_survive() {
        let mut income = FormSnapshot::new();
        income.set_amount("profit_on_debt_12_5", dec("80000"));

        let mut adjustable = FormSnapshot::new();
        adjustable.set_amount("electricity_domestic_gross_receipt", dec("96000"));

        let linked = link_adjustable_tax(&income, &adjustable);

        assert_eq!(
            linked.amount("electricity_domestic_gross_receipt"),
            dec("96000")
        );
        assert_eq!(linked.amount("sukuk_12_5_percent_gross_receipt"), dec("80000"));
    }

    /// CF-006: inputs are not mutated
    #[test]
    fn test_inputs_not_mutated() {
        let mut income = FormSnapshot::new();
        income.set_amount("rent_income", dec("240000"));
        let adjustable = FormSnapshot::new();

        let _ = link_adjustable_tax(&income, &adjustable);

        assert!(!adjustable.contains("rent_section_155_gross_receipt"));
        assert_eq!(income.amount("rent_income"), dec("240000"));
    }
}
