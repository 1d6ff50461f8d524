//! Polars `AnyValue` to [`RawValue`] conversion.

use polars::prelude::{AnyValue, Column};
use scc_model::{RawColumn, RawValue};

use crate::error::Result;

/// Converts a Polars `AnyValue` to a [`RawValue`], keeping its scalar type.
///
/// Temporal and nested values fall back to their display text.
pub fn any_to_raw(value: AnyValue<'_>) -> RawValue {
    match value {
        AnyValue::Null => RawValue::Null,
        AnyValue::Boolean(b) => RawValue::Bool(b),
        AnyValue::Int8(v) => RawValue::Int(i64::from(v)),
        AnyValue::Int16(v) => RawValue::Int(i64::from(v)),
        AnyValue::Int32(v) => RawValue::Int(i64::from(v)),
        AnyValue::Int64(v) => RawValue::Int(v),
        AnyValue::UInt8(v) => RawValue::Int(i64::from(v)),
        AnyValue::UInt16(v) => RawValue::Int(i64::from(v)),
        AnyValue::UInt32(v) => RawValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => {
            i64::try_from(v).map_or_else(|_| RawValue::Text(v.to_string()), RawValue::Int)
        }
        AnyValue::Float32(v) => RawValue::Float(f64::from(v)),
        AnyValue::Float64(v) => RawValue::Float(v),
        AnyValue::String(s) => RawValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => RawValue::Text(s.to_string()),
        other => {
            let s = other.to_string();
            // Strip surrounding quotes that might come from formatting
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                RawValue::Text(s[1..s.len() - 1].to_string())
            } else {
                RawValue::Text(s)
            }
        }
    }
}

/// Extracts every value of a column in row order.
pub fn column_values(column: &Column) -> Result<RawColumn> {
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_raw(column.get(idx)?));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(any_to_raw(AnyValue::Null), RawValue::Null);
        assert_eq!(any_to_raw(AnyValue::Int32(42)), RawValue::Int(42));
        assert_eq!(any_to_raw(AnyValue::Float64(1.5)), RawValue::Float(1.5));
        assert_eq!(any_to_raw(AnyValue::Boolean(true)), RawValue::Bool(true));
        assert_eq!(
            any_to_raw(AnyValue::String("AB1")),
            RawValue::Text("AB1".to_string())
        );
    }

    #[test]
    fn test_large_unsigned_falls_back_to_text() {
        assert_eq!(
            any_to_raw(AnyValue::UInt64(u64::MAX)),
            RawValue::Text(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_column_values_with_nulls() {
        let column = Series::new("card".into(), &[Some(1_i64), None, Some(3)]).into_column();
        let values = column_values(&column).unwrap();
        assert_eq!(
            values,
            vec![RawValue::Int(1), RawValue::Null, RawValue::Int(3)]
        );
    }
}
