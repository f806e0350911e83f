//! Progressive tax calculation functionality.
//!
//! This module walks the year's tax slabs cumulatively to compute normal
//! income tax, and applies the high-income surcharge on top of it.

use rust_decimal::Decimal;

use crate::config::{Surcharge, TaxSlab};

use super::withholding::round_rupees;

/// Computes normal income tax from the progressive slab table.
///
/// The slabs are walked in ascending order; each slab taxes the portion
/// of income strictly above its lower boundary and up to its upper
/// boundary (the last slab is open-ended). The marginal amounts are
/// accumulated unrounded and the total is rounded half-up to the nearest
/// rupee once at the end, so rounding error never compounds across slabs.
///
/// A taxable income of zero or below yields zero tax: taxation never goes
/// negative.
///
/// # Example
///
/// ```
/// use tax_engine::calculation::calculate_progressive_tax;
/// use tax_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// # fn main() -> Result<(), tax_engine::error::EngineError> {
/// let loader = ConfigLoader::load("./config/2025-26")?;
/// let tax = calculate_progressive_tax(Decimal::from(1_200_000), loader.config().slabs());
/// assert_eq!(tax, Decimal::from(30_000));
/// # Ok(())
/// # }
/// ```
pub fn calculate_progressive_tax(taxable_income: Decimal, slabs: &[TaxSlab]) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut total = Decimal::ZERO;

    for slab in slabs {
        // Slabs are sorted ascending; nothing above this floor remains.
        if taxable_income <= slab.min_income {
            break;
        }

        let upper = match slab.max_income {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        let taxed_in_slab = upper - slab.min_income;
        if taxed_in_slab > Decimal::ZERO {
            total += taxed_in_slab * slab.rate;
        }
    }

    round_rupees(total)
}

/// Computes the surcharge on normal income tax.
///
/// The surcharge applies only when taxable income STRICTLY exceeds the
/// threshold; income exactly at the threshold attracts no surcharge. The
/// product is rounded half-up to the nearest rupee.
pub fn calculate_surcharge(
    taxable_income: Decimal,
    normal_income_tax: Decimal,
    surcharge: &Surcharge,
) -> Decimal {
    if taxable_income > surcharge.threshold {
        round_rupees(normal_income_tax * surcharge.rate)
    } else {
        Decimal::ZERO
    }
}
