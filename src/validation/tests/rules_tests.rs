//! Unit tests for row and field validation rules.

use super::fixtures::{row, schema, validator};
use crate::validation::{
    domain::{FieldKind, FieldRule, ValidationReason},
    ports::validator::RowValidator,
    rules::{validate_field, validate_row},
    schema::Schema,
    service::SchemaRowValidator,
};
use rstest::rstest;

fn single_error(schema: &Schema, text: &str) -> (String, ValidationReason) {
    let errors = validate_row(schema, &row(2, text));
    assert_eq!(errors.len(), 1, "expected exactly one error, got {errors:?}");
    let error = errors.into_iter().next().expect("one error");
    (error.field, error.reason)
}

#[rstest]
fn valid_row_has_no_errors(schema: Schema) {
    assert!(validate_row(&schema, &row(2, "1,Mouse,Hardware,10.00,5,ACME")).is_empty());
}

#[rstest]
#[case("1,,Hardware,10.00,5,ACME", "nome", ValidationReason::RequiredField)]
#[case("2,Mouse,Hardware,10.999,5,ACME", "preco", ValidationReason::InvalidPrice)]
#[case("3,Mouse,Hardware,10.00,501,ACME", "estoque", ValidationReason::InvalidStock)]
#[case("4,Mouse,Alien,10.00,5,ACME", "categoria", ValidationReason::InvalidCategory)]
#[case("x,Mouse,Hardware,10.00,5,ACME", "id", ValidationReason::InvalidId)]
#[case("5,Mouse,Hardware,10.00,5,   ", "fornecedor", ValidationReason::RequiredField)]
fn single_field_violation_is_reported(
    schema: Schema,
    #[case] text: &str,
    #[case] field: &str,
    #[case] reason: ValidationReason,
) {
    let (actual_field, actual_reason) = single_error(&schema, text);
    assert_eq!(actual_field, field);
    assert_eq!(actual_reason, reason);
}

#[rstest]
#[case("1,Mouse,Hardware,10.00")]
#[case("1,Mouse,Hardware,10.00,5,ACME,extra")]
fn wrong_column_count_is_one_structural_error(schema: Schema, #[case] text: &str) {
    let errors = validate_row(&schema, &row(7, text));
    assert_eq!(errors.len(), 1);
    let error = errors.first().expect("one error");
    assert!(error.is_structural());
    assert_eq!(error.field, "all");
    assert_eq!(error.line, 7);
    assert_eq!(error.reason, ValidationReason::ColumnCountMismatch);
    assert_eq!(error.value, text);
}

#[rstest]
fn structural_error_skips_field_checks(schema: Schema) {
    let errors = validate_row(&schema, &row(2, ",,Alien,-1"));
    assert_eq!(errors.len(), 1);
    assert!(errors.iter().all(|error| error.is_structural()));
}

#[rstest]
fn multiple_field_errors_are_all_kept(schema: Schema) {
    let errors = validate_row(&schema, &row(3, "-1,,Alien,1.234,900,"));
    let fields: Vec<_> = errors.iter().map(|error| error.field.as_str()).collect();
    assert_eq!(
        fields,
        ["id", "nome", "categoria", "preco", "estoque", "fornecedor"]
    );
    assert!(errors.iter().all(|error| error.line == 3));
}

#[rstest]
fn required_blank_value_does_not_run_predicate(schema: Schema) {
    let rule = schema.field("preco").expect("preco rule");
    let error = validate_field(rule, 4, "  ").expect("blank required value fails");
    assert_eq!(error.reason, ValidationReason::RequiredField);
    assert_eq!(error.value, "  ");
}

#[rstest]
fn optional_blank_value_is_skipped() {
    fn never(_: &str) -> bool {
        false
    }
    let rule =
        FieldRule::new("obs", FieldKind::String, never, ValidationReason::InvalidValue).optional();
    assert!(validate_field(&rule, 2, "").is_none());

    let error = validate_field(&rule, 2, "x").expect("predicate still runs on present values");
    assert_eq!(error.reason, ValidationReason::InvalidValue);
}

#[rstest]
fn custom_schema_drives_column_count() {
    fn always(_: &str) -> bool {
        true
    }
    static RULES: [FieldRule; 2] = [
        FieldRule::new("a", FieldKind::String, always, ValidationReason::InvalidValue),
        FieldRule::new("b", FieldKind::String, always, ValidationReason::InvalidValue),
    ];
    let validator = SchemaRowValidator::with_schema(Schema::new(&RULES));
    assert_eq!(validator.expected_columns(), 2);
    assert!(validator.validate_row(&row(2, "x,y")).is_empty());
    assert_eq!(validator.validate_row(&row(2, "x,y,z")).len(), 1);
}

#[rstest]
fn validator_port_delegates_to_rules(validator: SchemaRowValidator, schema: Schema) {
    let input = row(9, "4,Mouse,Alien,10.00,5,ACME");
    assert_eq!(validator.validate_row(&input), validate_row(&schema, &input));
    assert_eq!(validator.expected_columns(), 6);
}

#[rstest]
#[case(ValidationReason::ColumnCountMismatch)]
#[case(ValidationReason::RequiredField)]
#[case(ValidationReason::InvalidType)]
#[case(ValidationReason::InvalidValue)]
#[case(ValidationReason::InvalidCategory)]
#[case(ValidationReason::InvalidPrice)]
#[case(ValidationReason::InvalidStock)]
#[case(ValidationReason::InvalidId)]
#[case(ValidationReason::EmptyString)]
fn reason_code_matches_wire_form(#[case] reason: ValidationReason) {
    let wire = serde_json::to_value(reason).expect("serialize reason");
    assert_eq!(wire, serde_json::Value::from(reason.code()));
}
