//! Read projections of a session.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::foundation::{SessionId, TechniqueId};

use super::CompletionResult;

/// Status projection returned by status reads and step submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    pub session_id: SessionId,
    pub technique: TechniqueId,
    pub problem_statement: String,
    pub current_step: usize,
    pub total_steps: usize,
    pub progress_percentage: f64,
    pub current_instruction: String,
    pub next_action: Map<String, Value>,
    pub participants: Vec<String>,
    pub ideas_generated: usize,
    pub session_duration_minutes: f64,
    pub is_complete: bool,
    pub parent_session_id: Option<SessionId>,
    pub technique_info: TechniqueInfo,
}

/// Descriptive metadata about the session's technique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueInfo {
    pub overview: &'static str,
    pub duration: &'static str,
    pub when_to_use: &'static str,
}

/// Compact listing entry for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOverview {
    pub session_id: SessionId,
    pub technique: TechniqueId,
    pub current_step: usize,
    pub total_steps: usize,
    pub ideas_generated: usize,
    pub is_complete: bool,
    pub parent_session_id: Option<SessionId>,
}

/// Outcome of an accepted step submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepOutcome {
    /// The session moved to its next step.
    Continued(SessionStatus),
    /// The submission finished the final step.
    Completed(CompletionResult),
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed(_))
    }
}
