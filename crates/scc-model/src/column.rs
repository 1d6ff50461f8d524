use std::fmt;

use crate::{RawColumn, RawValue};

/// Value kind inferred from the non-null cells of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
    Mixed,
    Empty,
}

impl ColumnKind {
    /// Infers the kind of a column.
    ///
    /// Integer and float cells together count as `Float`, matching how
    /// spreadsheet readers widen a numeric column.
    pub fn infer(column: &[RawValue]) -> Self {
        let mut kind = Self::Empty;
        for value in column {
            let cell = match value {
                RawValue::Null => continue,
                RawValue::Float(v) if v.is_nan() => continue,
                RawValue::Int(_) => Self::Integer,
                RawValue::Float(_) => Self::Float,
                RawValue::Bool(_) => Self::Boolean,
                RawValue::Text(_) => Self::Text,
            };
            kind = match (kind, cell) {
                (Self::Empty, next) => next,
                (current, next) if current == next => current,
                (Self::Integer, Self::Float) | (Self::Float, Self::Integer) => Self::Float,
                _ => return Self::Mixed,
            };
        }
        kind
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Mixed => "mixed",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overview of one column in a loaded source.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub rows: usize,
    pub nulls: usize,
}

impl ColumnProfile {
    pub fn from_column(name: impl Into<String>, column: &RawColumn) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::infer(column),
            rows: column.len(),
            nulls: column.iter().filter(|value| value.is_null()).count(),
        }
    }
}
