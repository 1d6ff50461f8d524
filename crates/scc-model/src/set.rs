use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::CanonicalId;

/// Deduplicated identifiers from one source column.
///
/// Iterates in ascending lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct IdentifierSet(BTreeSet<CanonicalId>);

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an identifier, returning false if it was already present.
    pub fn insert(&mut self, id: CanonicalId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: &CanonicalId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, CanonicalId> {
        self.0.iter()
    }

    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).cloned().collect()
    }

    pub fn difference(&self, other: &Self) -> Self {
        self.0.difference(&other.0).cloned().collect()
    }

    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().collect()
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Identifier strings in iteration order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|id| id.as_str().to_string()).collect()
    }
}

impl FromIterator<CanonicalId> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = CanonicalId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<CanonicalId> for IdentifierSet {
    fn extend<I: IntoIterator<Item = CanonicalId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for IdentifierSet {
    type Item = CanonicalId;
    type IntoIter = btree_set::IntoIter<CanonicalId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IdentifierSet {
    type Item = &'a CanonicalId;
    type IntoIter = btree_set::Iter<'a, CanonicalId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
