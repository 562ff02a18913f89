//! Line and field splitting for comma-separated input.
//!
//! Lines are split on `\n` with a trailing `\r` removed; blank lines are
//! skipped but still count towards line numbering, so every row keeps the
//! line number it has in the original text. The first non-blank line is the
//! header.
//!
//! Quoted fields may contain commas in [`QuoteMode::Rfc4180`]. Quoted fields
//! spanning several lines are not supported in either mode.

use super::domain::{DataRow, TokenizedDocument};
use serde::{Deserialize, Serialize};

/// Field delimiter.
pub const DELIMITER: char = ',';

const QUOTE: char = '"';

/// How double quotes inside a line are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// A field starting with `"` runs to the matching closing quote; commas
    /// inside are literal and `""` is an escaped quote.
    #[default]
    Rfc4180,
    /// Every comma separates fields; quotes are ordinary characters.
    Naive,
}

/// A non-blank line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// 1-indexed line number in the original text.
    pub number: usize,
    /// Line text without its terminator.
    pub text: &'a str,
}

/// Non-blank lines of a document, header separated from data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitLines<'a> {
    header: Option<RawLine<'a>>,
    data: Vec<RawLine<'a>>,
}

impl<'a> SplitLines<'a> {
    /// Returns the header line, absent for blank input.
    #[must_use]
    pub const fn header(&self) -> Option<RawLine<'a>> {
        self.header
    }

    /// Returns the data lines in order.
    #[must_use]
    pub fn data(&self) -> &[RawLine<'a>] {
        &self.data
    }
}

/// Splits content into its header and data lines.
#[must_use]
pub fn split_lines(content: &str) -> SplitLines<'_> {
    let mut lines = content
        .split('\n')
        .enumerate()
        .map(|(index, text)| RawLine {
            number: index + 1,
            text: text.strip_suffix('\r').unwrap_or(text),
        })
        .filter(|line| !line.text.trim().is_empty());

    let header = lines.next();
    SplitLines {
        header,
        data: lines.collect(),
    }
}

/// Splits one line into trimmed fields.
#[must_use]
pub fn split_fields(text: &str, mode: QuoteMode) -> Vec<String> {
    match mode {
        QuoteMode::Naive => text
            .split(DELIMITER)
            .map(|field| field.trim().to_owned())
            .collect(),
        QuoteMode::Rfc4180 => split_quoted(text),
    }
}

/// Tokenizes a single raw line into a row.
#[must_use]
pub fn tokenize_line(line: RawLine<'_>, mode: QuoteMode) -> DataRow {
    DataRow::new(line.number, split_fields(line.text, mode))
}

/// Tokenizes a whole document.
///
/// # Examples
///
/// ```
/// use csv_gate::validation::tokenizer::{QuoteMode, tokenize};
///
/// let document = tokenize("id,nome\n\n7, \"Mesa, grande\" \n", QuoteMode::Rfc4180);
/// let row = &document.rows()[0];
/// assert_eq!(row.line(), 3);
/// assert_eq!(row.fields(), ["7", "Mesa, grande"]);
/// ```
#[must_use]
pub fn tokenize(content: &str, mode: QuoteMode) -> TokenizedDocument {
    let lines = split_lines(content);
    let header = lines.header().map(|line| tokenize_line(line, mode));
    let rows = lines
        .data()
        .iter()
        .map(|line| tokenize_line(*line, mode))
        .collect();
    TokenizedDocument::new(header, rows)
}

fn split_quoted(text: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            QUOTE if in_quotes => {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    current.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            }
            // An opening quote is only recognised at the start of a field.
            QUOTE if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            DELIMITER if !in_quotes => fields.push(take_field(&mut current)),
            other => current.push(other),
        }
    }

    fields.push(take_field(&mut current));
    fields
}

fn take_field(current: &mut String) -> String {
    let field = current.trim().to_owned();
    current.clear();
    field
}
