//! The two parties sharing the ledger
//!
//! Every expense and settlement is attributed to one of exactly two parties.
//! Display names are configuration, not identity: the ledger only ever stores
//! the party tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two people sharing expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    PartyA,
    PartyB,
}

impl Party {
    /// The counterparty
    pub const fn other(&self) -> Party {
        match self {
            Self::PartyA => Self::PartyB,
            Self::PartyB => Self::PartyA,
        }
    }

    /// Short tag for compact display
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::PartyA => "A",
            Self::PartyB => "B",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartyA => write!(f, "Party A"),
            Self::PartyB => write!(f, "Party B"),
        }
    }
}

/// Configured display names for the two parties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyNames {
    pub party_a: String,
    pub party_b: String,
}

impl PartyNames {
    /// Create a new pair of names
    pub fn new(party_a: impl Into<String>, party_b: impl Into<String>) -> Self {
        Self {
            party_a: party_a.into(),
            party_b: party_b.into(),
        }
    }

    /// Get the display name for a party
    pub fn name_of(&self, party: Party) -> &str {
        match party {
            Party::PartyA => &self.party_a,
            Party::PartyB => &self.party_b,
        }
    }
}

impl Default for PartyNames {
    fn default() -> Self {
        Self::new("Partner 1", "Partner 2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(Party::PartyA.other(), Party::PartyB);
        assert_eq!(Party::PartyB.other(), Party::PartyA);
    }

    #[test]
    fn test_display() {
        assert_eq!(Party::PartyA.to_string(), "Party A");
        assert_eq!(Party::PartyB.tag(), "B");
    }

    #[test]
    fn test_name_of() {
        let names = PartyNames::new("Sam", "Riley");
        assert_eq!(names.name_of(Party::PartyA), "Sam");
        assert_eq!(names.name_of(Party::PartyB), "Riley");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Party::PartyA).unwrap();
        assert_eq!(json, "\"party_a\"");
        let parsed: Party = serde_json::from_str("\"party_b\"").unwrap();
        assert_eq!(parsed, Party::PartyB);
    }
}
