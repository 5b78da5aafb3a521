//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for an ideation session.
///
/// Callers may supply their own identifier when starting a session, so the
/// inner value is an arbitrary non-blank string rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a SessionId from a caller-supplied value.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "session_id",
                "must not contain whitespace",
            ));
        }
        Ok(Self(id))
    }

    /// Generates a fresh identifier of the form `<prefix>_<uuid>`.
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}_{}", prefix, Uuid::new_v4().simple()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
