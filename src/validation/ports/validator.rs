//! Validator port and scan configuration.

use crate::validation::{
    domain::{DataRow, ValidationError},
    tokenizer::QuoteMode,
};
use serde::{Deserialize, Serialize};

/// Default number of data rows processed between progress reports.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Port for validating tokenized rows.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect every error in the row (not fail-fast)
/// - Report structural problems as a single error for the row
/// - Be stateless and thread-safe
pub trait RowValidator: Send + Sync {
    /// Validates one row, returning all of its errors.
    fn validate_row(&self, row: &DataRow) -> Vec<ValidationError>;

    /// Number of columns a well-formed row has.
    fn expected_columns(&self) -> usize;
}

/// Configuration for a validation scan.
///
/// Chunk size only changes how often progress is reported; the final result
/// is identical for every chunk size.
///
/// # Examples
///
/// ```
/// use csv_gate::validation::ports::validator::ScanConfig;
/// use csv_gate::validation::tokenizer::QuoteMode;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.chunk_size, 1000);
/// assert_eq!(config.quote_mode, QuoteMode::Rfc4180);
///
/// let config: ScanConfig = serde_json::from_str(r#"{"chunk_size": 50}"#).unwrap();
/// assert_eq!(config.chunk_size, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Data rows per chunk; zero is rejected when the scan starts.
    pub chunk_size: usize,
    /// Quote handling used by the tokenizer.
    pub quote_mode: QuoteMode,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            quote_mode: QuoteMode::Rfc4180,
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with frequent progress reports.
    ///
    /// Useful for interactive surfaces showing small files.
    #[must_use]
    pub const fn fine_grained() -> Self {
        Self {
            chunk_size: 100,
            quote_mode: QuoteMode::Rfc4180,
        }
    }

    /// Sets the chunk size.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the quote handling mode.
    #[must_use]
    pub const fn with_quote_mode(mut self, quote_mode: QuoteMode) -> Self {
        self.quote_mode = quote_mode;
        self
    }
}
