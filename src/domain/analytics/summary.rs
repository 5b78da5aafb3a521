//! SessionSummary - The shared analytics view of one session.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::foundation::{SessionId, TechniqueId, Timestamp};
use crate::domain::session::{CompletionSummary, Session};

/// Analytics view of a session snapshot.
///
/// Derived, never stored. For a completed session every field is fixed, so
/// rendering the same summary twice yields identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub technique: TechniqueId,
    pub technique_name: &'static str,
    pub problem_statement: String,
    pub participants: Vec<String>,
    pub parent_session_id: Option<SessionId>,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub is_complete: bool,
    pub current_step: usize,
    pub total_steps: usize,
    /// Steps completed over total steps, in `[0, 1]`.
    pub completion_fraction: f64,
    pub completion_percentage: f64,
    pub duration_minutes: f64,
    pub idea_count: usize,
    pub ideas: Vec<IdeaEntry>,
    pub technique_data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionSummary>,
}

/// One idea row in a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeaEntry {
    /// 1-based position in capture order.
    pub index: usize,
    pub text: String,
    pub step: usize,
    pub participant: Option<String>,
    pub captured_at: Timestamp,
}

impl SessionSummary {
    /// Builds the summary of `session` as observed at `now`.
    ///
    /// `now` only affects the duration of active sessions.
    pub fn from_session(session: &Session, now: Timestamp) -> Self {
        let ideas = session
            .ideas()
            .iter()
            .enumerate()
            .map(|(i, idea)| IdeaEntry {
                index: i + 1,
                text: idea.text().to_string(),
                step: idea.step(),
                participant: idea.participant().map(str::to_string),
                captured_at: *idea.captured_at(),
            })
            .collect::<Vec<_>>();

        let completion_fraction = if session.total_steps() == 0 {
            0.0
        } else {
            session.current_step() as f64 / session.total_steps() as f64
        };

        Self {
            session_id: session.id().clone(),
            technique: session.technique(),
            technique_name: session.technique().display_name(),
            problem_statement: session.problem_statement().to_string(),
            participants: session.participants().to_vec(),
            parent_session_id: session.parent_session_id().cloned(),
            started_at: *session.started_at(),
            ended_at: session.ended_at().copied(),
            is_complete: session.is_complete(),
            current_step: session.current_step(),
            total_steps: session.total_steps(),
            completion_fraction,
            completion_percentage: session.progress_percentage(),
            duration_minutes: session.duration_minutes(now),
            idea_count: ideas.len(),
            ideas,
            technique_data: session.technique_data().clone(),
            completion: session.completion().cloned(),
        }
    }
}
