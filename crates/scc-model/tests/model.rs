//! Tests for scc-model types.

use scc_model::{
    CanonicalId, ColumnKind, ColumnProfile, ComparisonReport, ComparisonResult, IdentifierSet,
    OutputPaths, RawValue, SourceRef,
};

fn set(values: &[&str]) -> IdentifierSet {
    values
        .iter()
        .map(|v| CanonicalId::new(*v))
        .collect()
}

#[test]
fn identifier_set_deduplicates_and_sorts() {
    let ids = set(&["B2", "A1", "B2", "C3"]);
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.to_strings(), vec!["A1", "B2", "C3"]);
}

#[test]
fn identifier_set_algebra() {
    let a = set(&["1", "2", "3"]);
    let b = set(&["2", "3", "4"]);
    assert_eq!(a.intersection(&b).to_strings(), vec!["2", "3"]);
    assert_eq!(a.difference(&b).to_strings(), vec!["1"]);
    assert_eq!(a.union(&b).len(), 4);
    assert!(a.difference(&b).is_disjoint(&b));
}

#[test]
fn result_counts() {
    let result = ComparisonResult {
        shared: set(&["2"]),
        only_a: set(&["1", "5"]),
        only_b: set(&["3"]),
    };
    let summary = result.summary();
    assert_eq!(summary.distinct_a, 3);
    assert_eq!(summary.distinct_b, 2);
    assert_eq!(summary.shared, 1);
    assert_eq!(summary.total_unique, 4);
}

#[test]
fn column_kind_inference() {
    let ints = vec![RawValue::Int(1), RawValue::Null, RawValue::Int(2)];
    assert_eq!(ColumnKind::infer(&ints), ColumnKind::Integer);

    let widened = vec![RawValue::Int(1), RawValue::Float(2.5)];
    assert_eq!(ColumnKind::infer(&widened), ColumnKind::Float);

    let mixed = vec![RawValue::Int(1), RawValue::Text("A".into())];
    assert_eq!(ColumnKind::infer(&mixed), ColumnKind::Mixed);

    let empty = vec![RawValue::Null, RawValue::Float(f64::NAN)];
    assert_eq!(ColumnKind::infer(&empty), ColumnKind::Empty);
}

#[test]
fn column_profile_counts_nulls() {
    let column = vec![
        RawValue::Text("A".into()),
        RawValue::Null,
        RawValue::Text("B".into()),
    ];
    let profile = ColumnProfile::from_column("Smartcard", &column);
    assert_eq!(profile.rows, 3);
    assert_eq!(profile.nulls, 1);
    assert_eq!(profile.kind, ColumnKind::Text);
}

#[test]
fn report_serializes() {
    let report = ComparisonReport {
        source_a: SourceRef {
            label: "a.csv".to_string(),
            column: "Smartcard".to_string(),
        },
        source_b: SourceRef {
            label: "b.xlsx".to_string(),
            column: "Card No".to_string(),
        },
        summary: ComparisonResult::default().summary(),
        outputs: OutputPaths::default(),
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: ComparisonReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn canonical_id_trims_on_deserialize() {
    let parsed: CanonicalId = serde_json::from_str("\"  \"").expect("deserialize blank id");
    assert!(parsed.is_empty());
    let parsed: CanonicalId = serde_json::from_str("\" 42 \"").expect("deserialize id");
    assert_eq!(parsed.as_str(), "42");
}
