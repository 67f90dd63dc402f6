//! Tournament entry identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned identifier for a tournament entry (a player or team).
///
/// Ordered lexically. The ordering is load-bearing: payout remainder
/// distribution breaks skin-count ties by ascending entry id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap a raw entry id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::InvalidInput(
                "Entry ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id: EntryId = " entry-7 ".parse().unwrap();
        assert_eq!(id.as_str(), "entry-7");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("   ".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_ordering_is_lexical() {
        let a = EntryId::new("entry-10");
        let b = EntryId::new("entry-2");
        // Lexical, not numeric: "entry-10" sorts before "entry-2"
        assert!(a < b);
    }
}
