//! Shared fixtures and helpers for session tests.

use crate::session::{
    protocol::WorkerMessage,
    scheduler::{ChunkScheduler, WorkerHandle},
};
use crate::validation::{
    domain::{DataRow, ValidationError},
    ports::validator::RowValidator,
    service::SchemaRowValidator,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

pub const HEADER: &str = "id,nome,categoria,preco,estoque,fornecedor";

pub type ProductScheduler = ChunkScheduler<SchemaRowValidator, DefaultClock>;

#[fixture]
pub fn scheduler() -> Arc<ProductScheduler> {
    Arc::new(ChunkScheduler::new(
        Arc::new(SchemaRowValidator::new()),
        Arc::new(DefaultClock),
    ))
}

/// Validator that panics on the first row it sees.
#[derive(Debug, Default)]
pub struct PanickingValidator;

impl RowValidator for PanickingValidator {
    fn validate_row(&self, row: &DataRow) -> Vec<ValidationError> {
        panic!("row {} exploded", row.line())
    }

    fn expected_columns(&self) -> usize {
        0
    }
}

/// Builds a CSV document with the product header.
pub fn document(rows: &[&str]) -> String {
    std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds `count` data rows cycling through valid and invalid templates.
pub fn mixed_document(count: usize) -> String {
    let rows: Vec<String> = (0..count)
        .map(|index| match index % 5 {
            0 => format!("{index},Mesa,Móveis,120.00,3,Fornecedor A"),
            1 => format!("{index},Mouse,Hardware,10.999,5,ACME"),
            2 => format!("{index},Teclado,Periféricos"),
            3 => format!("{index},,Alien,-1,900,"),
            _ => format!("{index},Cabo,Acessórios,9.9,500,ACME"),
        })
        .collect();
    let borrowed: Vec<&str> = rows.iter().map(String::as_str).collect();
    document(&borrowed)
}

/// Builds `count` valid data rows.
pub fn valid_document(count: usize) -> String {
    let rows: Vec<String> = (0..count)
        .map(|index| format!("{index},Produto {index},Hardware,10.50,5,ACME"))
        .collect();
    let borrowed: Vec<&str> = rows.iter().map(String::as_str).collect();
    document(&borrowed)
}

/// Collects every message a worker sends until it finishes.
pub async fn drain(mut handle: WorkerHandle) -> Vec<WorkerMessage> {
    let mut messages = Vec::new();
    while let Some(message) = handle.recv().await {
        messages.push(message);
    }
    messages
}
