//! Comparison outcome types.

use crate::IdentifierSet;

/// Outcome of comparing two identifier sets.
///
/// `shared`, `only_a` and `only_b` partition the union of both inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonResult {
    pub shared: IdentifierSet,
    pub only_a: IdentifierSet,
    pub only_b: IdentifierSet,
}

impl ComparisonResult {
    /// Distinct identifiers in the first input.
    pub fn distinct_a(&self) -> usize {
        self.shared.len() + self.only_a.len()
    }

    /// Distinct identifiers in the second input.
    pub fn distinct_b(&self) -> usize {
        self.shared.len() + self.only_b.len()
    }

    /// Distinct identifiers across both inputs.
    pub fn total_unique(&self) -> usize {
        self.shared.len() + self.only_a.len() + self.only_b.len()
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            distinct_a: self.distinct_a(),
            distinct_b: self.distinct_b(),
            shared: self.shared.len(),
            only_a: self.only_a.len(),
            only_b: self.only_b.len(),
            total_unique: self.total_unique(),
        }
    }
}

/// Headline counts shown after a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonSummary {
    pub distinct_a: usize,
    pub distinct_b: usize,
    pub shared: usize,
    pub only_a: usize,
    pub only_b: usize,
    pub total_unique: usize,
}

/// Which side of a comparison a source or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn index(self) -> usize {
        match self {
            Self::A => 1,
            Self::B => 2,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}
