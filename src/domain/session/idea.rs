//! Idea records captured during a session.

use serde::Serialize;

use crate::domain::foundation::Timestamp;

/// One idea captured at a step.
///
/// Owned by exactly one session. Hybrid sessions receive copies that keep
/// the original step and participant attribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeaRecord {
    text: String,
    step: usize,
    participant: Option<String>,
    captured_at: Timestamp,
}

impl IdeaRecord {
    pub fn new(
        text: impl Into<String>,
        step: usize,
        participant: Option<String>,
        captured_at: Timestamp,
    ) -> Self {
        Self {
            text: text.into(),
            step,
            participant,
            captured_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the step the idea was captured at.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn participant(&self) -> Option<&str> {
        self.participant.as_deref()
    }

    pub fn captured_at(&self) -> &Timestamp {
        &self.captured_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idea_serializes_with_attribution() {
        let idea = IdeaRecord::new("Async standups", 3, Some("alice".into()), Timestamp::now());
        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(json["text"], "Async standups");
        assert_eq!(json["step"], 3);
        assert_eq!(json["participant"], "alice");
    }

    #[test]
    fn participant_is_optional() {
        let idea = IdeaRecord::new("Quiet hours", 0, None, Timestamp::now());
        assert!(idea.participant().is_none());
    }
}
