//! GetTechniqueHandler - Query handler for full technique instructions.

use serde::Serialize;
use thiserror::Error;

use crate::domain::technique::{TechniqueCatalog, TechniqueDefinition};

use super::TechniqueSummary;

/// Query for one technique's instructions.
#[derive(Debug, Clone)]
pub struct GetTechniqueQuery {
    pub technique: String,
}

/// One step as presented to a facilitator preparing a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepInstruction {
    pub step: usize,
    pub action: &'static str,
    pub instruction: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_field: Option<&'static str>,
}

/// Full instructions: catalog metadata, ordered steps and facilitation tips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueInstructions {
    #[serde(flatten)]
    pub summary: TechniqueSummary,
    pub steps: Vec<StepInstruction>,
    pub tips: Vec<&'static str>,
}

impl From<&TechniqueDefinition> for TechniqueInstructions {
    fn from(definition: &TechniqueDefinition) -> Self {
        Self {
            summary: TechniqueSummary::from(definition),
            steps: definition
                .steps
                .iter()
                .enumerate()
                .map(|(step, spec)| StepInstruction {
                    step,
                    action: spec.action,
                    instruction: spec.instruction,
                    required_field: spec.payload.required_field(),
                })
                .collect(),
            tips: definition.tips.to_vec(),
        }
    }
}

/// Error type for technique lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetTechniqueError {
    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),
}

/// Handler for technique instruction lookups.
#[derive(Debug, Clone, Default)]
pub struct GetTechniqueHandler;

impl GetTechniqueHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetTechniqueQuery) -> Result<TechniqueInstructions, GetTechniqueError> {
        let definition = TechniqueCatalog::resolve(&query.technique)
            .map_err(|_| GetTechniqueError::UnknownTechnique(query.technique.clone()))?;
        Ok(TechniqueInstructions::from(definition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(technique: &str) -> GetTechniqueQuery {
        GetTechniqueQuery {
            technique: technique.into(),
        }
    }

    #[test]
    fn returns_ordered_steps_and_tips() {
        let instructions = GetTechniqueHandler::new()
            .handle(query("reverse_brainstorming"))
            .unwrap();

        assert_eq!(instructions.steps.len(), 6);
        assert_eq!(instructions.steps[0].action, "state_original_problem");
        assert_eq!(instructions.steps[2].required_field, Some("anti_solutions"));
        assert_eq!(instructions.steps[4].required_field, Some("ideas"));
        assert!(!instructions.tips.is_empty());
    }

    #[test]
    fn serializes_metadata_alongside_steps() {
        let instructions = GetTechniqueHandler::new()
            .handle(query("random_word_association"))
            .unwrap();
        let json = serde_json::to_value(&instructions).unwrap();

        assert_eq!(json["id"], "random_word_association");
        assert_eq!(json["steps"][1]["action"], "random_word_generated");
        assert!(json["steps"][0].get("required_field").is_none());
    }

    #[test]
    fn unknown_technique_is_rejected() {
        let err = GetTechniqueHandler::new().handle(query("mind_mapping")).unwrap_err();
        assert_eq!(err, GetTechniqueError::UnknownTechnique("mind_mapping".into()));
    }
}
