use scc_model::{ComparisonResult, IdentifierSet, RawValue};
use tracing::{debug, info_span};

use crate::set::build_set;

/// Splits two identifier sets into shared and exclusive parts.
pub fn compare(a: &IdentifierSet, b: &IdentifierSet) -> ComparisonResult {
    ComparisonResult {
        shared: a.intersection(b),
        only_a: a.difference(b),
        only_b: b.difference(a),
    }
}

/// Normalizes two raw columns and compares their identifier sets.
pub fn compare_columns(column_a: &[RawValue], column_b: &[RawValue]) -> ComparisonResult {
    let span = info_span!("compare", rows_a = column_a.len(), rows_b = column_b.len());
    let _guard = span.enter();

    let set_a = build_set(column_a);
    let set_b = build_set(column_b);
    debug!(
        distinct_a = set_a.len(),
        distinct_b = set_b.len(),
        "identifier sets built"
    );

    let result = compare(&set_a, &set_b);
    debug!(
        shared = result.shared.len(),
        only_a = result.only_a.len(),
        only_b = result.only_b.len(),
        "comparison complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scc_model::CanonicalId;

    fn ids(values: &[&str]) -> IdentifierSet {
        values
            .iter()
            .map(|v| CanonicalId::new(*v))
            .collect()
    }

    #[test]
    fn identical_sets_share_everything() {
        let a = ids(&["1", "2"]);
        let result = compare(&a, &a);
        assert_eq!(result.shared, a);
        assert!(result.only_a.is_empty());
        assert!(result.only_b.is_empty());
    }

    #[test]
    fn disjoint_sets_share_nothing() {
        let result = compare(&ids(&["1"]), &ids(&["2"]));
        assert!(result.shared.is_empty());
        assert_eq!(result.only_a.to_strings(), vec!["1"]);
        assert_eq!(result.only_b.to_strings(), vec!["2"]);
    }

    #[test]
    fn both_empty() {
        let result = compare(&IdentifierSet::new(), &IdentifierSet::new());
        assert_eq!(result, ComparisonResult::default());
    }
}
