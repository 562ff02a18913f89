//! Unit tests for the product schema predicates.

use super::fixtures::schema;
use crate::validation::{
    domain::{FieldKind, ValidationReason},
    schema::{CATEGORIES, Schema},
};
use rstest::rstest;

fn accepts(schema: &Schema, field: &str, raw: &str) -> bool {
    schema
        .field(field)
        .expect("field should exist in product schema")
        .accepts(raw)
}

#[rstest]
fn product_schema_lists_columns_in_order(schema: Schema) {
    let headers: Vec<_> = schema.headers().collect();
    assert_eq!(
        headers,
        ["id", "nome", "categoria", "preco", "estoque", "fornecedor"]
    );
}

#[rstest]
fn every_product_column_is_required(schema: Schema) {
    assert!(schema.fields().iter().all(|rule| rule.is_required()));
}

#[rstest]
fn unknown_column_has_no_rule(schema: Schema) {
    assert!(schema.field("descricao").is_none());
}

#[rstest]
fn column_metadata_matches_rules(schema: Schema) {
    let stock = schema.field("estoque").expect("estoque rule");
    assert_eq!(stock.kind(), FieldKind::Number);
    assert_eq!(stock.min(), Some(0.0));
    assert_eq!(stock.max(), Some(500.0));
    assert_eq!(stock.failure_reason(), ValidationReason::InvalidStock);

    let category = schema.field("categoria").expect("categoria rule");
    assert_eq!(category.allowed_values(), CATEGORIES);
    assert_eq!(category.kind(), FieldKind::String);
}

#[rstest]
#[case("0", true)]
#[case("42", true)]
#[case("-1", false)]
#[case("1.5", false)]
#[case("abc", false)]
fn id_must_be_non_negative_integer(schema: Schema, #[case] raw: &str, #[case] expected: bool) {
    assert_eq!(accepts(&schema, "id", raw), expected);
}

#[rstest]
#[case("Hardware", true)]
#[case("Móveis", true)]
#[case("Periféricos", true)]
#[case(" Acessórios ", true)]
#[case("hardware", false)]
#[case("Alien", false)]
fn category_must_be_allowed(schema: Schema, #[case] raw: &str, #[case] expected: bool) {
    assert_eq!(accepts(&schema, "categoria", raw), expected);
}

#[rstest]
#[case("10", true)]
#[case("10.00", true)]
#[case("10.5", true)]
#[case("19.99", true)]
#[case("0", true)]
#[case("10.999", false)]
#[case("-1.00", false)]
#[case("abc", false)]
#[case("inf", false)]
#[case("NaN", false)]
fn price_allows_at_most_two_decimals(schema: Schema, #[case] raw: &str, #[case] expected: bool) {
    assert_eq!(accepts(&schema, "preco", raw), expected);
}

#[rstest]
#[case("0", true)]
#[case("500", true)]
#[case("501", false)]
#[case("-1", false)]
#[case("5.5", false)]
fn stock_must_be_between_zero_and_five_hundred(
    schema: Schema,
    #[case] raw: &str,
    #[case] expected: bool,
) {
    assert_eq!(accepts(&schema, "estoque", raw), expected);
}

#[rstest]
#[case("nome")]
#[case("fornecedor")]
fn text_columns_reject_whitespace(schema: Schema, #[case] field: &str) {
    assert!(accepts(&schema, field, "ACME"));
    assert!(!accepts(&schema, field, "   "));
}
