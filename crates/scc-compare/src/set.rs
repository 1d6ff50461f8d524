use scc_model::{IdentifierSet, RawValue};

use crate::normalize::normalize;

/// Builds the distinct identifier set of a raw column.
///
/// Null markers are dropped; duplicates collapse to one entry.
pub fn build_set(column: &[RawValue]) -> IdentifierSet {
    column.iter().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_nulls() {
        let set = build_set(&[RawValue::Null, RawValue::Text("A".into()), RawValue::Null]);
        assert_eq!(set.to_strings(), vec!["A"]);
    }

    #[test]
    fn collapses_equivalent_forms() {
        let set = build_set(&[
            RawValue::Int(123),
            RawValue::Text("123".into()),
            RawValue::Float(123.0),
            RawValue::Text(" 123 ".into()),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn keeps_whitespace_only_text() {
        let set = build_set(&[RawValue::Text("  ".into()), RawValue::Text("A".into())]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_strings(), vec!["", "A"]);
    }

    #[test]
    fn empty_column() {
        assert!(build_set(&[]).is_empty());
    }
}
