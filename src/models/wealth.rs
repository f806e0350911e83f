//! Wealth reconciliation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tolerance inside which a wealth statement counts as reconciled, in
/// rupees.
pub const RECONCILIATION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// The wealth reconciliation position for one return.
///
/// The reconciliation compares the movement in declared net assets
/// against declared inflows minus outflows. A return may only be
/// submitted when the unreconciled difference is zero within
/// [`RECONCILIATION_TOLERANCE`]; a failed reconciliation is a normal,
/// recoverable state returned as data, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthReconciliationResult {
    /// Net assets declared for the current year.
    pub net_assets_current_year: Decimal,
    /// Net assets declared for the previous year.
    pub net_assets_previous_year: Decimal,
    /// Movement in net assets: current minus previous.
    pub net_assets_increase: Decimal,
    /// Declared inflows: income, remittances, inheritance, gifts,
    /// disposal gains, other inflows.
    pub total_inflows: Decimal,
    /// Declared outflows: household expenses, adjustments, gifts given,
    /// disposal losses.
    pub total_outflows: Decimal,
    /// `total_inflows - total_outflows`.
    pub calculated_net_increase: Decimal,
    /// `net_assets_increase - calculated_net_increase`; must be zero
    /// within tolerance before the return can be submitted.
    pub unreconciled_difference: Decimal,
}

impl WealthReconciliationResult {
    /// Returns true when the statement reconciles within tolerance and
    /// submission may proceed.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use tax_engine::models::WealthReconciliationResult;
    ///
    /// let result = WealthReconciliationResult {
    ///     net_assets_current_year: Decimal::from(5_000_000),
    ///     net_assets_previous_year: Decimal::from(4_500_000),
    ///     net_assets_increase: Decimal::from(500_000),
    ///     total_inflows: Decimal::from(650_000),
    ///     total_outflows: Decimal::from(150_000),
    ///     calculated_net_increase: Decimal::from(500_000),
    ///     unreconciled_difference: Decimal::ZERO,
    /// };
    /// assert!(result.is_reconciled());
    /// ```
    pub fn is_reconciled(&self) -> bool {
        self.unreconciled_difference.abs() < RECONCILIATION_TOLERANCE
    }
}
