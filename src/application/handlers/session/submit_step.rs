//! SubmitStepHandler - Command handler for step submissions.
//!
//! Each accepted submission advances the session by exactly one step. The
//! submission that finishes the final step returns the completion document
//! instead of a status.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::session::{Session, StepOutcome, StepPayload};
use crate::ports::{SessionStore, StimulusSource};

/// Command to submit data for a session's current step.
#[derive(Debug, Clone)]
pub struct SubmitStepCommand {
    pub session_id: String,
    /// Raw payload. Non-object payloads count as empty.
    pub payload: Value,
}

/// Error type for step submissions.
#[derive(Debug, Clone, Error)]
pub enum SubmitStepError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Invalid step data: {message}")]
    InvalidStepData {
        message: String,
        field: Option<String>,
        step: Option<String>,
    },

    #[error("Domain error: {0}")]
    Domain(DomainError),
}

/// Handler for step submissions.
pub struct SubmitStepHandler {
    store: Arc<dyn SessionStore>,
    stimulus: Arc<dyn StimulusSource>,
}

impl SubmitStepHandler {
    pub fn new(store: Arc<dyn SessionStore>, stimulus: Arc<dyn StimulusSource>) -> Self {
        Self { store, stimulus }
    }

    pub fn handle(&self, cmd: SubmitStepCommand) -> Result<StepOutcome, SubmitStepError> {
        let Ok(session_id) = SessionId::new(cmd.session_id.as_str()) else {
            return Err(SubmitStepError::NotFound(cmd.session_id));
        };
        let payload = StepPayload::from(cmd.payload);
        let stimulus = self.stimulus.as_ref();

        let session = self
            .store
            .update(&session_id, &mut |session: &mut Session| {
                session.submit_step(&payload, stimulus)
            })
            .map_err(|e| self.classify(&session_id, e))?;

        let outcome = session.step_outcome(Timestamp::now());
        match &outcome {
            StepOutcome::Completed(result) => info!(
                session_id = %session_id,
                technique = session.technique().as_str(),
                ideas = result.summary.total_ideas_generated,
                "Ideation session completed"
            ),
            StepOutcome::Continued(status) => debug!(
                session_id = %session_id,
                step = status.current_step,
                "Session advanced"
            ),
        }
        Ok(outcome)
    }

    fn classify(&self, session_id: &SessionId, err: DomainError) -> SubmitStepError {
        match err.code {
            ErrorCode::SessionNotFound => SubmitStepError::NotFound(session_id.to_string()),
            ErrorCode::SessionAlreadyCompleted => {
                warn!(session_id = %session_id, "Submission to completed session rejected");
                SubmitStepError::AlreadyCompleted(session_id.to_string())
            }
            ErrorCode::InvalidStepData => {
                warn!(
                    session_id = %session_id,
                    step = err.details.get("step").map(String::as_str),
                    reason = %err.message,
                    "Step submission rejected"
                );
                SubmitStepError::InvalidStepData {
                    field: err.details.get("field").cloned(),
                    step: err.details.get("step").cloned(),
                    message: err.message,
                }
            }
            _ => SubmitStepError::Domain(err),
        }
    }
}
