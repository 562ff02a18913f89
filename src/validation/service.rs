//! Schema-backed implementation of the [`RowValidator`] port.

use crate::validation::{
    domain::{DataRow, ValidationError},
    ports::validator::RowValidator,
    rules,
    schema::Schema,
};

/// Validates rows against a [`Schema`].
///
/// # Examples
///
/// ```
/// use csv_gate::validation::{
///     domain::{DataRow, ValidationReason},
///     ports::validator::RowValidator,
///     service::SchemaRowValidator,
/// };
///
/// let validator = SchemaRowValidator::new();
/// let row = DataRow::new(2, vec!["1".into(), "Mouse".into()]);
/// let errors = validator.validate_row(&row);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].reason, ValidationReason::ColumnCountMismatch);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemaRowValidator {
    schema: Schema,
}

impl SchemaRowValidator {
    /// Creates a validator for the product schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: Schema::products(),
        }
    }

    /// Creates a validator for a custom schema.
    #[must_use]
    pub const fn with_schema(schema: Schema) -> Self {
        Self { schema }
    }

    /// Returns the schema in use.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Default for SchemaRowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowValidator for SchemaRowValidator {
    fn validate_row(&self, row: &DataRow) -> Vec<ValidationError> {
        rules::validate_row(&self.schema, row)
    }

    fn expected_columns(&self) -> usize {
        self.schema.column_count()
    }
}
