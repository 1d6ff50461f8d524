//! End-to-end comparison scenarios on raw columns.

use scc_compare::{build_set, compare, compare_columns};
use scc_model::RawValue;

fn text(value: &str) -> RawValue {
    RawValue::Text(value.to_string())
}

#[test]
fn mixed_numeric_forms_collapse() {
    let a = vec![
        RawValue::Int(123),
        text("123"),
        RawValue::Float(123.0),
        RawValue::Null,
    ];
    let b = vec![RawValue::Int(123)];

    let result = compare_columns(&a, &b);

    assert_eq!(result.shared.to_strings(), vec!["123"]);
    assert!(result.only_a.is_empty());
    assert!(result.only_b.is_empty());
}

#[test]
fn alphanumeric_identifiers() {
    let a = vec![text("ABC01"), text("ABC02")];
    let b = vec![text("ABC02"), text("ABC03")];

    let result = compare_columns(&a, &b);

    assert_eq!(result.shared.to_strings(), vec!["ABC02"]);
    assert_eq!(result.only_a.to_strings(), vec!["ABC01"]);
    assert_eq!(result.only_b.to_strings(), vec!["ABC03"]);
}

#[test]
fn empty_first_column() {
    let result = compare_columns(&[], &[text("X")]);

    assert!(result.shared.is_empty());
    assert!(result.only_a.is_empty());
    assert_eq!(result.only_b.to_strings(), vec!["X"]);
}

#[test]
fn repeated_identifier_counts_once() {
    let a = vec![RawValue::Int(1), RawValue::Int(1), RawValue::Int(1)];
    let b = vec![RawValue::Int(1)];

    let set_a = build_set(&a);
    assert_eq!(set_a.len(), 1);

    let result = compare(&set_a, &build_set(&b));
    assert_eq!(result.shared.to_strings(), vec!["1"]);
}

#[test]
fn float_column_with_gaps_matches_text_column() {
    // Integer columns with blanks come out of spreadsheet readers as floats.
    let a = vec![
        RawValue::Float(6_011_000_990_139_424.0),
        RawValue::Float(f64::NAN),
        RawValue::Float(4_111_111_111_111_111.0),
    ];
    let b = vec![text("6011000990139424"), text(" 5500000000000004 ")];

    let result = compare_columns(&a, &b);

    assert_eq!(result.shared.to_strings(), vec!["6011000990139424"]);
    assert_eq!(result.only_a.to_strings(), vec!["4111111111111111"]);
    assert_eq!(result.only_b.to_strings(), vec!["5500000000000004"]);
    let summary = result.summary();
    assert_eq!(summary.distinct_a, 2);
    assert_eq!(summary.distinct_b, 2);
    assert_eq!(summary.total_unique, 3);
}
