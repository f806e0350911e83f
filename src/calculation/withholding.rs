//! Withholding aggregation functionality.
//!
//! This module applies the year's withholding rates to the gross receipts
//! in the materialized adjustable-tax snapshot and aggregates the result
//! into a [`WithholdingLedger`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxYearConfig;
use crate::models::{FormSnapshot, WithholdingLedger, WithholdingLine};

/// Rounds a rupee amount half-up to the nearest whole rupee.
pub(crate) fn round_rupees(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregates withholding over the adjustable-tax snapshot.
///
/// For each collection head in the rate table, the snapshot field
/// `<code>_gross_receipt` is read and the tax collected is
/// `round(gross_receipt × rate)`, rounded half-up to the nearest rupee
/// once per line item (never accumulated in unrounded form). Collection
/// heads absent from the snapshot produce no line; snapshot fields with
/// no configured rate are ignored entirely, so unknown line items are
/// never silently taxed and never inflate the gross-receipt total.
///
/// A zero gross receipt yields zero tax, and a very small gross receipt
/// may round to zero tax; both are ordinary results, not errors.
pub fn aggregate_withholding(
    adjustable_tax: &FormSnapshot,
    config: &TaxYearConfig,
) -> WithholdingLedger {
    let mut lines = Vec::new();
    let mut total_gross_receipt = Decimal::ZERO;
    let mut total_tax_collected = Decimal::ZERO;

    for rate in config.withholding_rates() {
        let field = rate.gross_receipt_field();
        if !adjustable_tax.contains(&field) {
            continue;
        }

        let gross_receipt = adjustable_tax.amount(&field);
        let tax_collected = round_rupees(gross_receipt * rate.rate);

        total_gross_receipt += gross_receipt;
        total_tax_collected += tax_collected;

        lines.push(WithholdingLine {
            code: rate.code.clone(),
            section: rate.section.clone(),
            gross_receipt,
            tax_collected,
        });
    }

    WithholdingLedger {
        lines,
        total_gross_receipt,
        total_tax_collected,
    }
}
