//! Unit tests for the validation module.
//!
//! Tests are organised by component: schema predicates, tokenizer behaviour
//! and the row/field rules.

mod rules_tests;
mod schema_tests;
