//! Calculation logic for the Tax Computation Engine.
//!
//! This module contains all the pure calculation functions: income
//! normalization, cross-form linking, withholding aggregation,
//! progressive tax and surcharge, section field-sums, tax computation
//! assembly, wealth reconciliation, and the pipeline that runs one full
//! recomputation of a return.

mod assembler;
mod cross_form_linker;
mod income_normalizer;
mod pipeline;
mod progressive;
mod section_totals;
mod wealth_reconciliation;
mod withholding;

pub use assembler::assemble_tax_computation;
pub use cross_form_linker::{INCOME_TO_ADJUSTABLE_LINKS, link_adjustable_tax};
pub use income_normalizer::normalize_income;
pub use pipeline::{ReturnForms, compute_tax_return};
pub use progressive::{calculate_progressive_tax, calculate_surcharge};
pub use section_totals::{
    capital_gains_income_total, capital_gains_tax_total, credits_total, deductions_total,
    final_tax_income_total, final_tax_total, personal_expenses_total, reductions_total,
};
pub use wealth_reconciliation::reconcile_wealth;
pub use withholding::aggregate_withholding;
