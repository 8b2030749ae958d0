//! Tests for per-field classification and rewriting

use crate::app::services::field_normalizer::classify::{FieldKind, classify};

#[test]
fn test_parenthesized_negative_with_thousands() {
    let result = classify("(1,000.00)");
    assert_eq!(result.kind, FieldKind::NegativeNumber);
    assert_eq!(result.text, "-1000.00");
}

#[test]
fn test_parenthesized_negative_simple() {
    let result = classify("(1.01)");
    assert_eq!(result.kind, FieldKind::NegativeNumber);
    assert_eq!(result.text, "-1.01");
}

#[test]
fn test_positive_number_commas_stripped() {
    let result = classify("1,234");
    assert_eq!(result.kind, FieldKind::Number);
    assert_eq!(result.text, "1234");
}

#[test]
fn test_number_precision_preserved() {
    // The numeric value is never reformatted, only separators removed
    let result = classify("1,000.00");
    assert_eq!(result.text, "1000.00");

    let result = classify("0.12345678");
    assert_eq!(result.text, "0.12345678");
}

#[test]
fn test_plain_number_passes_unchanged() {
    let result = classify("42.5");
    assert_eq!(result.kind, FieldKind::Number);
    assert_eq!(result.text, "42.5");
}

#[test]
fn test_already_signed_number_unchanged() {
    let result = classify("-1000.00");
    assert_eq!(result.kind, FieldKind::Number);
    assert_eq!(result.text, "-1000.00");
}

#[test]
fn test_whitespace_padded_number_keeps_padding() {
    // Padding does not demote a number to a memo; separators still come out
    // while the padding stays in.
    let result = classify(" 1,000 ");
    assert_eq!(result.kind, FieldKind::Number);
    assert_eq!(result.text, " 1000 ");
}

#[test]
fn test_whitespace_only_field_is_memo() {
    let result = classify("   ");
    assert_eq!(result.kind, FieldKind::Memo);
    assert_eq!(result.text, "   ");
}

#[test]
fn test_memo_with_commas_untouched() {
    let result = classify("Paid to John, Inc.");
    assert_eq!(result.kind, FieldKind::Memo);
    assert_eq!(result.text, "Paid to John, Inc.");
}

#[test]
fn test_empty_field_is_memo_not_error() {
    let result = classify("");
    assert_eq!(result.kind, FieldKind::Memo);
    assert_eq!(result.text, "");
}

#[test]
fn test_date_is_memo() {
    let result = classify("1/15/2022");
    assert_eq!(result.kind, FieldKind::Memo);
    assert_eq!(result.text, "1/15/2022");
}

#[test]
fn test_paren_rule_wins_over_parse_even_when_malformed() {
    // Rule 1 applies on the first character alone; the rewrite is emitted
    // even when the remainder is not numeric.
    let result = classify("(abc");
    assert_eq!(result.kind, FieldKind::NegativeNumber);
    assert_eq!(result.text, "-abc");
}

#[test]
fn test_all_parens_and_commas_removed_from_negatives() {
    let result = classify("(1,234,567.89)");
    assert_eq!(result.text, "-1234567.89");
}

#[test]
fn test_classify_is_idempotent() {
    for input in [
        "(1,000.00)",
        "1,234",
        "Paid to John, Inc.",
        "",
        "-1.01",
        "42",
    ] {
        let once = classify(input);
        let twice = classify(&once.text);
        assert_eq!(once.text, twice.text, "not idempotent for {:?}", input);
    }
}
