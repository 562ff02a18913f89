//! Unit tests for the error-line exporter.

use crate::session::export::{ExportOptions, error_lines, export_error_lines};
use crate::validation::domain::{ValidationError, ValidationReason};
use rstest::rstest;

const CONTENT: &str = "id,nome\n1,a\n\n3,c\n4,d";

fn errors_on(lines: &[usize]) -> Vec<ValidationError> {
    lines
        .iter()
        .map(|line| ValidationError::new(*line, "nome", "", ValidationReason::RequiredField))
        .collect()
}

#[rstest]
#[case(&[], "")]
#[case(&[2], "1,a")]
#[case(&[5, 2, 5], "1,a\n4,d")]
#[case(&[4, 4, 4], "3,c")]
fn selects_distinct_lines_in_file_order(#[case] lines: &[usize], #[case] expected: &str) {
    assert_eq!(error_lines(CONTENT, &errors_on(lines)), expected);
}

#[rstest]
fn out_of_range_lines_are_ignored() {
    assert_eq!(error_lines(CONTENT, &errors_on(&[99])), "");
}

#[rstest]
fn carriage_returns_are_preserved() {
    let content = "id,nome\r\n1,\r\n2,b\r\n";
    assert_eq!(error_lines(content, &errors_on(&[2])), "1,\r");
}

#[rstest]
fn header_is_prepended_when_requested() {
    let export = export_error_lines(
        CONTENT,
        &errors_on(&[4]),
        &ExportOptions::default().with_header(),
    );
    assert_eq!(export.bytes(), b"id,nome\n3,c");
}

#[rstest]
fn header_is_skipped_by_default() {
    let export = export_error_lines(CONTENT, &errors_on(&[4]), &ExportOptions::default());
    assert_eq!(export.file_name(), "erros_validacao.csv");
    assert_eq!(export.bytes(), b"3,c");
}

#[rstest]
fn header_after_leading_blank_lines_uses_its_physical_line() {
    let content = "\n\nid,nome\n1,a";
    let export = export_error_lines(
        content,
        &errors_on(&[4]),
        &ExportOptions::default().with_header(),
    );
    assert_eq!(export.bytes(), b"id,nome\n1,a");
}
