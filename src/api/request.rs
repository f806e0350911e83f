//! Request types for the Tax Computation Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::ReturnForms;

/// Request body for the `/calculate` endpoint.
///
/// Contains the tax year to compute under and the per-section form
/// snapshots for one return. Sections the user has not reached yet may
/// simply be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationRequest {
    /// The tax year whose rate configuration applies (e.g., "2025-26").
    pub tax_year: String,
    /// The per-section form snapshots.
    #[serde(default)]
    pub forms: ReturnForms,
}
