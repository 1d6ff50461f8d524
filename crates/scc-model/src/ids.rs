#![deny(unsafe_code)]

use std::fmt;

/// Normalized identifier used as the comparison key.
///
/// Always trimmed. A whitespace-only cell becomes the empty identifier, which
/// still counts as a value.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "String", into = "String")]
pub struct CanonicalId(String);

impl CanonicalId {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            return Self(value);
        }
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CanonicalId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CanonicalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<CanonicalId> for String {
    fn from(value: CanonicalId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = CanonicalId::new("  ABC01\t");
        assert_eq!(id.as_str(), "ABC01");
    }

    #[test]
    fn blank_becomes_empty_identifier() {
        let id = CanonicalId::new("  \t ");
        assert!(id.is_empty());
        assert_eq!(id, CanonicalId::new(""));
    }

    #[test]
    fn keeps_inner_whitespace() {
        let id = CanonicalId::new(" AB 01 ");
        assert_eq!(id.to_string(), "AB 01");
    }
}
