//! Property tests for normalization and set comparison.

use proptest::prelude::*;
use scc_compare::{build_set, compare, normalize};
use scc_model::{IdentifierSet, RawValue};

/// Integers exactly representable as f64.
const MAX_EXACT: i64 = 1 << 53;

fn raw_value() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Null),
        (-1000_i64..1000).prop_map(RawValue::Int),
        (-1000_i64..1000).prop_map(|v| RawValue::Float(v as f64)),
        (-1000_i64..1000).prop_map(|v| RawValue::Text(v.to_string())),
        "[A-Z]{1,3}[0-9]{1,3}".prop_map(RawValue::Text),
        " {0,2}[A-C][0-9] {0,2}".prop_map(RawValue::Text),
        " {0,3}".prop_map(RawValue::Text),
    ]
}

fn column() -> impl Strategy<Value = Vec<RawValue>> {
    proptest::collection::vec(raw_value(), 0..40)
}

proptest! {
    #[test]
    fn integral_float_matches_integer_text(v in -MAX_EXACT..MAX_EXACT) {
        let from_float = normalize(&RawValue::Float(v as f64));
        let from_text = normalize(&RawValue::Text(v.to_string()));
        let from_int = normalize(&RawValue::Int(v));
        prop_assert_eq!(&from_float, &from_text);
        prop_assert_eq!(&from_int, &from_text);
    }

    #[test]
    fn normalize_is_deterministic(value in raw_value()) {
        prop_assert_eq!(normalize(&value), normalize(&value));
    }

    #[test]
    fn only_nulls_are_dropped(value in raw_value()) {
        prop_assert_eq!(normalize(&value).is_some(), !value.is_null());
    }

    #[test]
    fn nulls_never_counted(col in column()) {
        let nulls = col.iter().filter(|v| v.is_null()).count();
        let set = build_set(&col);
        prop_assert!(set.len() <= col.len() - nulls);
    }

    #[test]
    fn duplicates_do_not_change_size(col in column(), times in 1_usize..4) {
        let once = build_set(&col);
        let repeated: Vec<RawValue> = col
            .iter()
            .cloned()
            .cycle()
            .take(col.len() * times)
            .collect();
        prop_assert_eq!(build_set(&repeated), once);
    }

    #[test]
    fn comparison_partitions_union(a in column(), b in column()) {
        let set_a = build_set(&a);
        let set_b = build_set(&b);
        let result = compare(&set_a, &set_b);

        prop_assert!(result.shared.is_disjoint(&result.only_a));
        prop_assert!(result.shared.is_disjoint(&result.only_b));
        prop_assert!(result.only_a.is_disjoint(&result.only_b));

        let rebuilt: IdentifierSet = result
            .shared
            .union(&result.only_a)
            .union(&result.only_b);
        prop_assert_eq!(rebuilt, set_a.union(&set_b));
        prop_assert_eq!(result.distinct_a(), set_a.len());
        prop_assert_eq!(result.distinct_b(), set_b.len());
    }
}
