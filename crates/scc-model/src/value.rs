//! Raw cell values as they come out of a tabular source.

use std::fmt;

/// A single scalar cell with its source type preserved.
///
/// Loaders must not pre-stringify numbers: the comparator relies on knowing
/// that `123.0` came from a float column to render it as `123`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RawValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl RawValue {
    /// Returns true for null markers, including NaN floats.
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_)) && !self.is_null()
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(""),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Ordered values of one column. No uniqueness guarantee.
pub type RawColumn = Vec<RawValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_counts_as_null() {
        assert!(RawValue::Float(f64::NAN).is_null());
        assert!(RawValue::Null.is_null());
        assert!(!RawValue::Float(1.0).is_null());
        assert!(!RawValue::Text(String::new()).is_null());
    }

    #[test]
    fn option_conversion() {
        assert_eq!(RawValue::from(None::<i64>), RawValue::Null);
        assert_eq!(RawValue::from(Some(5_i64)), RawValue::Int(5));
        assert_eq!(RawValue::from(Some("x")), RawValue::Text("x".to_string()));
    }
}
