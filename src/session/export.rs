//! Error-line export.
//!
//! Builds a downloadable artifact holding only the lines of the original
//! content that produced at least one validation error. Line numbers in
//! errors are 1-indexed positions in the original text, so the filter is a
//! direct index lookup.

use crate::validation::{domain::ValidationError, tokenizer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default name of the exported file.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "erros_validacao.csv";

/// MIME type of the exported file.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Options for building the error artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Prepend the header line when it is not already an error line.
    pub include_header: bool,
    /// File name offered for download.
    pub file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_header: false,
            file_name: DEFAULT_EXPORT_FILE_NAME.to_owned(),
        }
    }
}

impl ExportOptions {
    /// Includes the header line in the artifact.
    #[must_use]
    pub const fn with_header(mut self) -> Self {
        self.include_header = true;
        self
    }

    /// Sets the file name offered for download.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

/// Downloadable artifact containing the offending rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorExport {
    file_name: String,
    bytes: Vec<u8>,
}

impl ErrorExport {
    /// Returns the suggested file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        CSV_CONTENT_TYPE
    }

    /// Returns the artifact bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the export, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Returns the lines of `content` that appear in `errors`, joined by `\n`.
///
/// Each line is emitted once, in file order, however many errors it has.
///
/// # Examples
///
/// ```
/// use csv_gate::session::export::error_lines;
/// use csv_gate::validation::domain::{ValidationError, ValidationReason};
///
/// let content = "id,nome\n1,ok\n2,\n3,ok";
/// let errors = [
///     ValidationError::new(3, "nome", "", ValidationReason::RequiredField),
///     ValidationError::new(3, "id", "2", ValidationReason::InvalidId),
/// ];
/// assert_eq!(error_lines(content, &errors), "2,");
/// ```
#[must_use]
pub fn error_lines(content: &str, errors: &[ValidationError]) -> String {
    let wanted: BTreeSet<usize> = errors.iter().map(|error| error.line).collect();
    select_lines(content, &wanted).join("\n")
}

/// Builds the artifact from the cached content and the last result's errors.
#[must_use]
pub fn export_error_lines(
    content: &str,
    errors: &[ValidationError],
    options: &ExportOptions,
) -> ErrorExport {
    let mut wanted: BTreeSet<usize> = errors.iter().map(|error| error.line).collect();
    if options.include_header
        && let Some(header) = tokenizer::split_lines(content).header()
    {
        wanted.insert(header.number);
    }

    ErrorExport {
        file_name: options.file_name.clone(),
        bytes: select_lines(content, &wanted).join("\n").into_bytes(),
    }
}

fn select_lines<'a>(content: &'a str, wanted: &BTreeSet<usize>) -> Vec<&'a str> {
    content
        .split('\n')
        .enumerate()
        .filter(|(index, _)| wanted.contains(&(index + 1)))
        .map(|(_, line)| line)
        .collect()
}
