//! StepPayload - Data submitted for the current step of a session.

use serde_json::{Map, Value};

/// Payload key holding idea strings.
pub const IDEAS_KEY: &str = "ideas";

/// Payload key naming the contributing participant.
pub const PARTICIPANT_KEY: &str = "participant";

/// Technique data key holding stimulus words drawn so far.
pub const RANDOM_WORDS_KEY: &str = "random_words";

/// Technique data key holding the inverted problem statement.
pub const REVERSED_PROBLEM_KEY: &str = "reversed_problem";

/// Technique data key recording where a hybrid session's ideas came from.
pub const PRESERVED_KEY: &str = "preserved_from_previous";

/// Technique data keys the session writes itself. Submissions may not set them.
pub const GENERATED_KEYS: &[&str] = &[RANDOM_WORDS_KEY, REVERSED_PROBLEM_KEY, PRESERVED_KEY];

/// Keyed data submitted for one step.
///
/// Non-object submissions are treated as an empty payload, which only
/// acknowledgment steps accept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepPayload(Map<String, Value>);

impl StepPayload {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The contributing participant, if a non-blank one was named.
    pub fn participant(&self) -> Option<String> {
        self.0
            .get(PARTICIPANT_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
    }

    /// Non-blank idea strings, in submission order.
    ///
    /// Non-string entries are skipped; shape enforcement happens during
    /// step validation.
    pub fn idea_texts(&self) -> Vec<String> {
        self.0
            .get(IDEAS_KEY)
            .and_then(Value::as_array)
            .map(|ideas| {
                ideas
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The first submitted key that collides with session-generated data.
    pub fn generated_key(&self) -> Option<&'static str> {
        GENERATED_KEYS
            .iter()
            .copied()
            .find(|key| self.0.contains_key(*key))
    }

    /// Merges every field except ideas and participant into `data`.
    ///
    /// Arrays append to existing arrays, objects merge key-wise into
    /// existing objects, and anything else replaces the previous value.
    pub fn merge_into(&self, data: &mut Map<String, Value>) {
        for (key, value) in &self.0 {
            if key == IDEAS_KEY || key == PARTICIPANT_KEY {
                continue;
            }
            match (data.get_mut(key), value) {
                (Some(Value::Array(existing)), Value::Array(items)) => {
                    existing.extend(items.iter().cloned());
                }
                (Some(Value::Object(existing)), Value::Object(entries)) => {
                    for (k, v) in entries {
                        existing.insert(k.clone(), v.clone());
                    }
                }
                _ => {
                    data.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

impl From<Value> for StepPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for StepPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
