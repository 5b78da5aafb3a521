//! TechniqueId enum representing the three ideation techniques.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, ErrorCode};

/// The closed set of structured ideation techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechniqueId {
    RandomWordAssociation,
    ReverseBrainstorming,
    LotusBlossom,
}

impl TechniqueId {
    /// Returns all techniques in catalog order.
    pub fn all() -> &'static [TechniqueId] {
        &[
            TechniqueId::RandomWordAssociation,
            TechniqueId::ReverseBrainstorming,
            TechniqueId::LotusBlossom,
        ]
    }

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueId::RandomWordAssociation => "random_word_association",
            TechniqueId::ReverseBrainstorming => "reverse_brainstorming",
            TechniqueId::LotusBlossom => "lotus_blossom",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TechniqueId::RandomWordAssociation => "Random Word Association",
            TechniqueId::ReverseBrainstorming => "Reverse Brainstorming",
            TechniqueId::LotusBlossom => "Lotus Blossom",
        }
    }
}

impl fmt::Display for TechniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TechniqueId {
    type Err = DomainError;

    /// Parses a wire identifier. Unknown identifiers are configuration errors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechniqueId::all()
            .iter()
            .find(|t| t.as_str() == s.trim())
            .copied()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UnknownTechnique,
                    format!("Unknown technique: {}", s),
                )
                .with_detail("technique", s)
            })
    }
}
