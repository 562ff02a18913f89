//! Tokenized rows and documents.

/// One line of the input split into trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    line: usize,
    fields: Vec<String>,
}

impl DataRow {
    /// Creates a row for the given 1-indexed line number.
    #[must_use]
    pub const fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Returns the 1-indexed line number in the original text.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the trimmed fields in column order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Re-joins the fields with commas, as reported in structural errors.
    #[must_use]
    pub fn joined(&self) -> String {
        self.fields.join(",")
    }
}

/// A fully tokenized CSV document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedDocument {
    header: Option<DataRow>,
    rows: Vec<DataRow>,
}

impl TokenizedDocument {
    /// Creates a document from a header and its data rows.
    #[must_use]
    pub const fn new(header: Option<DataRow>, rows: Vec<DataRow>) -> Self {
        Self { header, rows }
    }

    /// Returns the header row, absent for blank input.
    #[must_use]
    pub const fn header(&self) -> Option<&DataRow> {
        self.header.as_ref()
    }

    /// Returns the data rows, header excluded.
    #[must_use]
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }
}
