//! Reasons attached to row and field validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a row or field failed validation.
///
/// Serialised in `SCREAMING_SNAKE_CASE` so reports read the same on both
/// sides of the session protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationReason {
    /// The row does not have exactly one value per schema column.
    ColumnCountMismatch,
    /// A required value is empty or whitespace-only.
    RequiredField,
    /// A value does not parse as the column's type.
    InvalidType,
    /// A value was rejected by a generic rule.
    InvalidValue,
    /// The category is not one of the allowed names.
    InvalidCategory,
    /// The price is negative, not a number, or has more than two decimals.
    InvalidPrice,
    /// The stock is not an integer between 0 and 500.
    InvalidStock,
    /// The identifier is not a non-negative integer.
    InvalidId,
    /// A text value is empty after trimming.
    EmptyString,
}

impl ValidationReason {
    /// Returns the stable wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ColumnCountMismatch => "COLUMN_COUNT_MISMATCH",
            Self::RequiredField => "REQUIRED_FIELD",
            Self::InvalidType => "INVALID_TYPE",
            Self::InvalidValue => "INVALID_VALUE",
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidStock => "INVALID_STOCK",
            Self::InvalidId => "INVALID_ID",
            Self::EmptyString => "EMPTY_STRING",
        }
    }

    /// Returns a human readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ColumnCountMismatch => "wrong number of columns",
            Self::RequiredField => "field is required",
            Self::InvalidType => "invalid data type",
            Self::InvalidValue => "invalid value",
            Self::InvalidCategory => "category must be one of the allowed options",
            Self::InvalidPrice => "price must be a non-negative number with at most 2 decimals",
            Self::InvalidStock => "stock must be an integer between 0 and 500",
            Self::InvalidId => "id must be a non-negative integer",
            Self::EmptyString => "field cannot be empty",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
