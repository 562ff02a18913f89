//! Row and field validation rules.
//!
//! Each rule is a pure function over a schema and tokenized input. Rules never
//! abort: every problem becomes a [`ValidationError`] value and all of them are
//! collected for the row.

use super::{
    domain::{DataRow, FieldRule, ValidationError, ValidationReason},
    schema::Schema,
};

/// Validates one data row against `schema`.
///
/// A row with the wrong number of columns yields exactly one structural error
/// and no field checks. Otherwise every column is checked in schema order and
/// all field errors are returned.
///
/// # Examples
///
/// ```
/// use csv_gate::validation::{
///     domain::{DataRow, ValidationReason},
///     rules::validate_row,
///     schema::Schema,
/// };
///
/// let row = DataRow::new(
///     2,
///     ["1", "", "Hardware", "10.00", "5", "ACME"].map(str::to_owned).to_vec(),
/// );
/// let errors = validate_row(&Schema::products(), &row);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].field, "nome");
/// assert_eq!(errors[0].reason, ValidationReason::RequiredField);
/// ```
#[must_use]
pub fn validate_row(schema: &Schema, row: &DataRow) -> Vec<ValidationError> {
    if let Some(error) = validate_column_count(schema, row) {
        return vec![error];
    }

    schema
        .fields()
        .iter()
        .zip(row.fields())
        .filter_map(|(rule, value)| validate_field(rule, row.line(), value))
        .collect()
}

/// Checks that the row has one value per schema column.
///
/// Returns the structural error when the count differs.
#[must_use]
pub fn validate_column_count(schema: &Schema, row: &DataRow) -> Option<ValidationError> {
    if row.len() == schema.column_count() {
        return None;
    }
    Some(ValidationError::column_count(row.line(), row.joined()))
}

/// Checks a single raw value against its column rule.
///
/// A blank required value reports [`ValidationReason::RequiredField`] and the
/// predicate is not run. A blank optional value is skipped.
#[must_use]
pub fn validate_field(rule: &FieldRule, line: usize, raw: &str) -> Option<ValidationError> {
    if raw.trim().is_empty() {
        return rule
            .is_required()
            .then(|| ValidationError::new(line, rule.name(), raw, ValidationReason::RequiredField));
    }

    if rule.accepts(raw) {
        return None;
    }
    Some(ValidationError::new(
        line,
        rule.name(),
        raw,
        rule.failure_reason(),
    ))
}
