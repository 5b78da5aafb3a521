//! Static technique definitions: step specs, payload shapes and generation rules.

use serde_json::{json, Map, Value};

use crate::domain::foundation::{DomainError, TechniqueId};

use super::stimulus::StimulusSource;

/// Shape a step submission must have before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Acknowledgment-only step; any payload (including empty) is accepted.
    Acknowledge,
    /// Requires `ideas` as a non-empty list of non-blank strings.
    IdeaList,
    /// Requires a non-empty array under `field`.
    List { field: &'static str },
    /// Requires a non-empty object under `field`.
    Mapping { field: &'static str },
}

impl PayloadShape {
    /// The payload field this shape mandates, if any.
    pub fn required_field(&self) -> Option<&'static str> {
        match self {
            PayloadShape::Acknowledge => None,
            PayloadShape::IdeaList => Some("ideas"),
            PayloadShape::List { field } | PayloadShape::Mapping { field } => Some(field),
        }
    }

    /// Checks a submitted payload object against this shape.
    pub fn validate(&self, payload: &Map<String, Value>) -> Result<(), DomainError> {
        match self {
            PayloadShape::Acknowledge => Ok(()),
            PayloadShape::IdeaList => {
                let ideas = payload
                    .get("ideas")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        DomainError::invalid_step_data("ideas", "This step requires an ideas list")
                    })?;
                if ideas.is_empty() {
                    return Err(DomainError::invalid_step_data(
                        "ideas",
                        "At least one idea is required",
                    ));
                }
                let all_text = ideas
                    .iter()
                    .all(|idea| idea.as_str().is_some_and(|s| !s.trim().is_empty()));
                if !all_text {
                    return Err(DomainError::invalid_step_data(
                        "ideas",
                        "Every idea must be a non-blank string",
                    ));
                }
                Ok(())
            }
            PayloadShape::List { field } => match payload.get(*field).and_then(Value::as_array) {
                Some(items) if !items.is_empty() => Ok(()),
                Some(_) => Err(DomainError::invalid_step_data(
                    *field,
                    format!("'{}' must contain at least one entry", field),
                )),
                None => Err(DomainError::invalid_step_data(
                    *field,
                    format!("This step requires a '{}' list", field),
                )),
            },
            PayloadShape::Mapping { field } => {
                match payload.get(*field).and_then(Value::as_object) {
                    Some(entries) if !entries.is_empty() => Ok(()),
                    Some(_) => Err(DomainError::invalid_step_data(
                        *field,
                        format!("'{}' must contain at least one entry", field),
                    )),
                    None => Err(DomainError::invalid_step_data(
                        *field,
                        format!("This step requires a '{}' mapping", field),
                    )),
                }
            }
        }
    }
}

/// Rule for system-generated content shown when a step is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationRule {
    /// Draws a stimulus word from the fixed pool, avoiding session repeats.
    StimulusWord,
    /// Restates the problem as "how could we make it worse".
    ReversedProblem,
}

/// How generated content is recorded into the session's technique data.
#[derive(Debug, Clone, PartialEq)]
pub enum DataEntry {
    AppendTo(&'static str, Value),
    Assign(&'static str, Value),
}

/// Content produced by a [`GenerationRule`] on step entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    /// Fields overlaid on the step's next action.
    pub next_action: Map<String, Value>,
    /// Entry recorded into accumulated technique data.
    pub data_entry: DataEntry,
}

impl GenerationRule {
    /// Produces content for a session entering a generating step.
    ///
    /// `used_words` are the stimulus words already drawn in this session.
    pub fn generate(
        &self,
        problem_statement: &str,
        used_words: &[String],
        source: &dyn StimulusSource,
    ) -> GeneratedContent {
        match self {
            GenerationRule::StimulusWord => {
                let draw = source.draw(used_words);
                let word = draw.word;
                let fields = json!({
                    "message": format!("Your random word is: **{}**", word.to_uppercase()),
                    "word": word,
                    "alternative_words": draw.alternatives,
                    "questions": [
                        format!("How is '{}' similar to your problem?", word),
                        format!("What properties of '{}' could inspire solutions?", word),
                        format!("If your problem was a '{}', how would you handle it?", word),
                    ],
                });
                GeneratedContent {
                    next_action: into_map(fields),
                    data_entry: DataEntry::AppendTo("random_words", Value::String(word)),
                }
            }
            GenerationRule::ReversedProblem => {
                let reversed = format!("How could we make '{}' much worse?", problem_statement);
                GeneratedContent {
                    next_action: into_map(json!({ "reversed_problem": reversed })),
                    data_entry: DataEntry::Assign("reversed_problem", Value::String(reversed)),
                }
            }
        }
    }
}

/// A labelled list of hints (examples, criteria, considerations) for a step.
#[derive(Debug, Clone, Copy)]
pub struct StepHints {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// One ordered phase of a technique.
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub action: &'static str,
    pub instruction: &'static str,
    pub message: &'static str,
    /// Prompt text; `{problem}` is replaced with the problem statement.
    pub prompt: &'static str,
    pub guidance: Option<&'static str>,
    pub hints: Option<StepHints>,
    pub payload: PayloadShape,
    pub generation: Option<GenerationRule>,
}

impl StepSpec {
    /// Renders the static part of this step's next action.
    pub fn render_next_action(&self, problem_statement: &str) -> Map<String, Value> {
        let mut action = Map::new();
        action.insert("action".into(), Value::from(self.action));
        action.insert("message".into(), Value::from(self.message));
        action.insert(
            "prompt".into(),
            Value::from(self.prompt.replace("{problem}", problem_statement)),
        );
        if let Some(guidance) = self.guidance {
            action.insert("instruction".into(), Value::from(guidance));
        }
        if let Some(hints) = self.hints {
            action.insert(hints.label.into(), Value::from(hints.items.to_vec()));
        }
        if let Some(field) = self.payload.required_field() {
            action.insert("required_field".into(), Value::from(field));
        }
        action
    }
}

/// Immutable definition of one ideation technique.
#[derive(Debug)]
pub struct TechniqueDefinition {
    pub id: TechniqueId,
    pub overview: &'static str,
    pub when_to_use: &'static str,
    pub duration_hint: &'static str,
    pub participant_hint: &'static str,
    pub steps: &'static [StepSpec],
    pub tips: &'static [&'static str],
}

impl TechniqueDefinition {
    pub fn display_name(&self) -> &'static str {
        self.id.display_name()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&'static StepSpec> {
        self.steps.get(index)
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
