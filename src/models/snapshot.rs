//! Form snapshot model.
//!
//! A [`FormSnapshot`] is the raw, per-section form input the engine
//! consumes: a flat map of named fields to scalar values, owned by the
//! persistence layer and treated as a read-only value object per
//! invocation. All sanitization of user input happens at this boundary.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single scalar form-field value.
///
/// Numeric entries deserialize into [`Decimal`] whether they arrive as
/// JSON numbers or as numeric strings; anything else is kept as text or a
/// flag and contributes zero to every monetary sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A numeric entry (amounts, rates, counts).
    Number(Decimal),
    /// A free-text entry (reference numbers, descriptions, choices).
    Text(String),
    /// A yes/no choice.
    Flag(bool),
    /// A cleared field, submitted as JSON `null`.
    Empty,
}

/// A read-only snapshot of one form section.
///
/// Field names are fixed per section; unknown fields are carried but
/// ignored by the engine, and missing fields read as zero. The accessors
/// implement the engine's sanitization policy: a negative, missing, or
/// non-numeric field is treated as zero, never rejected.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use tax_engine::models::FormSnapshot;
///
/// let mut income = FormSnapshot::new();
/// income.set_amount("monthly_basic_salary", Decimal::from(600_000));
///
/// assert_eq!(income.amount("monthly_basic_salary"), Decimal::from(600_000));
/// assert_eq!(income.amount("bonus_commission"), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: HashMap<String, FieldValue>,
}

impl FormSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the field is present in the snapshot.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the sanitized non-negative amount for a field.
    ///
    /// Missing fields, non-numeric text, flags, and negative values all
    /// read as zero. Numeric text parses as a number, matching what the
    /// form clients submit for amount fields.
    pub fn amount(&self, field: &str) -> Decimal {
        self.signed_amount(field).max(Decimal::ZERO)
    }

    /// Returns the sanitized amount for a field, preserving its sign.
    ///
    /// Only line items that are legitimately negative (the asset-disposal
    /// gain/loss in the wealth reconciliation statement) are read through
    /// this accessor; everything else uses [`amount`](Self::amount).
    pub fn signed_amount(&self, field: &str) -> Decimal {
        match self.fields.get(field) {
            Some(FieldValue::Number(n)) => *n,
            Some(FieldValue::Text(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    /// Returns the text value of a field, if it holds one.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Sets a numeric field.
    pub fn set_amount(&mut self, field: &str, value: Decimal) {
        self.fields
            .insert(field.to_string(), FieldValue::Number(value));
    }

    /// Sets a text field.
    pub fn set_text(&mut self, field: &str, value: &str) {
        self.fields
            .insert(field.to_string(), FieldValue::Text(value.to_string()));
    }
}

impl FromIterator<(String, FieldValue)> for FormSnapshot {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
