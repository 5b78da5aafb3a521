//! Completion summary frozen into a session at finalization.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::foundation::{SessionId, TechniqueId};

/// Follow-up options offered when a session completes.
pub const NEXT_OPTIONS: &[&str] = &[
    "Start new session with different technique",
    "Export session results",
    "Hybrid approach: combine techniques",
    "Develop ideas further with team",
];

/// Summary computed once when a session reaches its final step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionSummary {
    pub technique_used: TechniqueId,
    pub problem_statement: String,
    pub duration_minutes: f64,
    pub participants: Vec<String>,
    pub total_ideas_generated: usize,
    pub steps_completed: usize,
    pub completion_rate: f64,
    pub completed: bool,
    #[serde(flatten)]
    pub highlights: TechniqueHighlights,
}

/// Technique-specific facts pulled from accumulated session data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TechniqueHighlights {
    RandomWordAssociation {
        random_words_used: Vec<String>,
        key_associations: Vec<String>,
        developed_ideas: usize,
    },
    ReverseBrainstorming {
        reversed_problem: String,
        anti_solutions_count: usize,
        reversed_solutions_count: usize,
        solutions_synthesized: usize,
    },
    LotusBlossom {
        themes_identified: usize,
        theme_grids_completed: usize,
        connections_mapped: usize,
        solution_clusters: usize,
    },
}

impl TechniqueHighlights {
    /// Extracts highlights from technique data.
    ///
    /// `own_ideas` counts ideas captured in the session itself, excluding any
    /// carried over from a parent session.
    pub fn extract(technique: TechniqueId, data: &Map<String, Value>, own_ideas: usize) -> Self {
        match technique {
            TechniqueId::RandomWordAssociation => TechniqueHighlights::RandomWordAssociation {
                random_words_used: strings(data, "random_words"),
                key_associations: data
                    .get("associations")
                    .and_then(Value::as_object)
                    .map(|m| m.keys().cloned().collect())
                    .unwrap_or_default(),
                developed_ideas: own_ideas,
            },
            TechniqueId::ReverseBrainstorming => TechniqueHighlights::ReverseBrainstorming {
                reversed_problem: data
                    .get("reversed_problem")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                anti_solutions_count: entry_count(data, "anti_solutions"),
                reversed_solutions_count: entry_count(data, "reversed_solutions"),
                solutions_synthesized: own_ideas,
            },
            TechniqueId::LotusBlossom => TechniqueHighlights::LotusBlossom {
                themes_identified: entry_count(data, "themes"),
                theme_grids_completed: entry_count(data, "theme_grids"),
                connections_mapped: entry_count(data, "connections"),
                solution_clusters: entry_count(data, "solution_clusters"),
            },
        }
    }
}

fn strings(data: &Map<String, Value>, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn entry_count(data: &Map<String, Value>, key: &str) -> usize {
    match data.get(key) {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(entries)) => entries.len(),
        _ => 0,
    }
}

/// Marker serialized as `"completed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Completed,
}

/// Document returned by the submission that completes a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionResult {
    pub status: CompletionStatus,
    pub session_id: SessionId,
    pub technique: TechniqueId,
    pub summary: CompletionSummary,
    pub next_options: Vec<String>,
}

impl CompletionResult {
    pub fn new(session_id: SessionId, technique: TechniqueId, summary: CompletionSummary) -> Self {
        Self {
            status: CompletionStatus::Completed,
            session_id,
            technique,
            summary,
            next_options: NEXT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
