//! Declarative per-column validation rules.

use super::ValidationReason;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive type a column is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    String,
    /// Integer or decimal number.
    Number,
}

impl FieldKind {
    /// Returns the canonical name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate applied to the raw value of a present field.
///
/// Predicates never panic; malformed input simply returns `false`.
pub type FieldPredicate = fn(&str) -> bool;

/// Validation rule for a single schema column.
///
/// Rules are built in `const` context so the product schema can live in a
/// static table.
///
/// # Examples
///
/// ```
/// use csv_gate::validation::domain::{FieldKind, FieldRule, ValidationReason};
///
/// fn is_short(raw: &str) -> bool {
///     raw.len() <= 3
/// }
///
/// let rule = FieldRule::new("sku", FieldKind::String, is_short, ValidationReason::InvalidValue)
///     .optional();
/// assert!(!rule.is_required());
/// assert!(rule.accepts("abc"));
/// assert!(!rule.accepts("abcd"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    min: Option<f64>,
    max: Option<f64>,
    allowed_values: &'static [&'static str],
    predicate: FieldPredicate,
    failure: ValidationReason,
}

impl FieldRule {
    /// Creates a required rule.
    ///
    /// `failure` is the reason reported when `predicate` rejects a present
    /// value.
    #[must_use]
    pub const fn new(
        name: &'static str,
        kind: FieldKind,
        predicate: FieldPredicate,
        failure: ValidationReason,
    ) -> Self {
        Self {
            name,
            kind,
            required: true,
            min: None,
            max: None,
            allowed_values: &[],
            predicate,
            failure,
        }
    }

    /// Marks the column as optional; blank values are skipped.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Records the inclusive lower bound enforced by the predicate.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Records the inclusive upper bound enforced by the predicate.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Records the closed set of values accepted by the predicate.
    #[must_use]
    pub const fn with_allowed_values(mut self, values: &'static [&'static str]) -> Self {
        self.allowed_values = values;
        self
    }

    /// Returns the column name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the expected value kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` when a blank value is an error.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the inclusive lower bound, if any.
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Returns the inclusive upper bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Returns the accepted values; empty when the column is unconstrained.
    #[must_use]
    pub const fn allowed_values(&self) -> &'static [&'static str] {
        self.allowed_values
    }

    /// Returns the reason reported when the predicate fails.
    #[must_use]
    pub const fn failure_reason(&self) -> ValidationReason {
        self.failure
    }

    /// Runs the predicate against a raw value.
    #[must_use]
    pub fn accepts(&self, raw: &str) -> bool {
        (self.predicate)(raw)
    }
}
