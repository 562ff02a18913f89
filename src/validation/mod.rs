//! CSV validation engine for product uploads.
//!
//! This module checks tabular product data against a fixed schema before the
//! file is handed to any downstream service. It is split the same way as the
//! rest of the crate:
//!
//! - **Domain**: field rules, reasons and result types ([`domain`])
//! - **Schema**: the product column registry ([`schema::Schema`])
//! - **Tokenizer**: line and field splitting ([`tokenizer`])
//! - **Rules**: pure row and field checks ([`rules`])
//! - **Ports**: the [`ports::validator::RowValidator`] seam and scan
//!   configuration
//! - **Service**: the schema-backed validator ([`service::SchemaRowValidator`])
//!
//! # Example
//!
//! ```
//! use csv_gate::validation::{
//!     ports::validator::RowValidator, service::SchemaRowValidator,
//!     tokenizer::{QuoteMode, tokenize},
//! };
//!
//! let document = tokenize(
//!     "id,nome,categoria,preco,estoque,fornecedor\n1,Mouse,Hardware,10.00,5,ACME",
//!     QuoteMode::default(),
//! );
//! let validator = SchemaRowValidator::new();
//! for row in document.rows() {
//!     assert!(validator.validate_row(row).is_empty());
//! }
//! ```

pub mod domain;
pub mod ports;
pub mod rules;
pub mod schema;
pub mod service;
pub mod tokenizer;

#[cfg(test)]
mod tests;
