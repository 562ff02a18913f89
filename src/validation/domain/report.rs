//! Validation errors, aggregated results and chunk progress.

use super::ValidationReason;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Field name used for row-level structural errors.
pub const STRUCTURAL_FIELD: &str = "all";

/// A single problem found in one data row.
///
/// A line may carry several errors; a structural error is always alone on its
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-indexed line number in the original text.
    pub line: usize,
    /// Column name, or [`STRUCTURAL_FIELD`] for column count mismatches.
    pub field: String,
    /// Raw, unparsed value.
    pub value: String,
    /// Why the value was rejected.
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Creates a field-level error.
    #[must_use]
    pub fn new(
        line: usize,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: ValidationReason,
    ) -> Self {
        Self {
            line,
            field: field.into(),
            value: value.into(),
            reason,
        }
    }

    /// Creates a structural error for a row with the wrong column count.
    #[must_use]
    pub fn column_count(line: usize, raw_row: impl Into<String>) -> Self {
        Self::new(
            line,
            STRUCTURAL_FIELD,
            raw_row,
            ValidationReason::ColumnCountMismatch,
        )
    }

    /// Returns `true` for row-level structural errors.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.field == STRUCTURAL_FIELD
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, field '{}': {} (value: {:?})",
            self.line, self.field, self.reason, self.value
        )
    }
}

/// Aggregated outcome of validating every data row of a document.
///
/// Invariants: `valid_lines + invalid_lines == total_lines` and
/// `is_valid == errors.is_empty()`. Built through [`ValidationTally`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    total_lines: usize,
    valid_lines: usize,
    invalid_lines: usize,
    errors: Vec<ValidationError>,
    validation_time_ms: f64,
}

impl ValidationResult {
    /// Returns `true` when no errors were found.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Number of non-empty data rows, header excluded.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Number of rows without errors.
    #[must_use]
    pub const fn valid_lines(&self) -> usize {
        self.valid_lines
    }

    /// Number of rows with at least one error.
    #[must_use]
    pub const fn invalid_lines(&self) -> usize {
        self.invalid_lines
    }

    /// All errors in row order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Wall time spent validating, in milliseconds.
    #[must_use]
    pub const fn validation_time_ms(&self) -> f64 {
        self.validation_time_ms
    }

    /// Distinct line numbers that carry at least one error, ascending.
    #[must_use]
    pub fn error_lines(&self) -> BTreeSet<usize> {
        self.errors.iter().map(|error| error.line).collect()
    }
}

/// Running counters used while rows are validated chunk by chunk.
#[derive(Debug, Default)]
pub struct ValidationTally {
    processed: usize,
    valid: usize,
    invalid: usize,
    errors: Vec<ValidationError>,
}

impl ValidationTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the errors produced by one row.
    ///
    /// The row counts as invalid when it produced at least one error,
    /// regardless of how many.
    pub fn record_row(&mut self, row_errors: Vec<ValidationError>) {
        self.processed += 1;
        if row_errors.is_empty() {
            self.valid += 1;
        } else {
            self.invalid += 1;
            self.errors.extend(row_errors);
        }
    }

    /// Number of rows recorded so far.
    #[must_use]
    pub const fn processed(&self) -> usize {
        self.processed
    }

    /// Closes the tally into an immutable result.
    #[must_use]
    pub fn finish(self, validation_time_ms: f64) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            total_lines: self.processed,
            valid_lines: self.valid,
            invalid_lines: self.invalid,
            errors: self.errors,
            validation_time_ms,
        }
    }
}

/// Progress reported after each processed chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkProgress {
    progress_fraction: f64,
    processed_lines: usize,
}

impl ChunkProgress {
    /// Progress before the first chunk completes.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            progress_fraction: 0.0,
            processed_lines: 0,
        }
    }

    /// Computes progress for `processed` rows out of `total`.
    ///
    /// The fraction is clamped to `[0, 1]`; an empty document is complete.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "row counts stay far below the f64 mantissa limit"
    )]
    pub fn new(processed: usize, total: usize) -> Self {
        let processed_lines = processed.min(total);
        let progress_fraction = if total == 0 {
            1.0
        } else {
            (processed_lines as f64 / total as f64).min(1.0)
        };
        Self {
            progress_fraction,
            processed_lines,
        }
    }

    /// Fraction of data rows processed.
    #[must_use]
    pub const fn progress_fraction(&self) -> f64 {
        self.progress_fraction
    }

    /// Absolute number of data rows processed.
    #[must_use]
    pub const fn processed_lines(&self) -> usize {
        self.processed_lines
    }
}

impl Default for ChunkProgress {
    fn default() -> Self {
        Self::start()
    }
}
