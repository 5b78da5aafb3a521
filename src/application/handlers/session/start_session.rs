//! StartSessionHandler - Command handler for starting ideation sessions.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, TechniqueId, Timestamp};
use crate::domain::session::{Session, SessionStatus};
use crate::ports::{SessionStore, StimulusSource};

/// Command to start a session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    /// Wire identifier of the technique, e.g. `lotus_blossom`.
    pub technique: String,
    pub problem_statement: String,
    /// Participant names; blank or missing falls back to the default participant.
    pub participants: Vec<String>,
    /// Caller-chosen id. A `<technique>_<uuid>` id is generated when absent.
    pub session_id: Option<String>,
}

/// Result of a successful start.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    pub status: SessionStatus,
}

/// Error type for starting sessions.
#[derive(Debug, Clone, Error)]
pub enum StartSessionError {
    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),

    #[error("Session already exists: {0}")]
    DuplicateSession(SessionId),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Domain error: {0}")]
    Domain(DomainError),
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
    stimulus: Arc<dyn StimulusSource>,
    default_participant: String,
}

impl StartSessionHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        stimulus: Arc<dyn StimulusSource>,
        default_participant: impl Into<String>,
    ) -> Self {
        Self {
            store,
            stimulus,
            default_participant: default_participant.into(),
        }
    }

    pub fn handle(&self, cmd: StartSessionCommand) -> Result<StartSessionResult, StartSessionError> {
        // 1. Resolve technique
        let technique: TechniqueId = cmd
            .technique
            .parse()
            .map_err(|_| StartSessionError::UnknownTechnique(cmd.technique.clone()))?;

        // 2. Resolve id
        let session_id = match cmd.session_id.as_deref() {
            Some(raw) => SessionId::new(raw)
                .map_err(|e| StartSessionError::Validation(e.to_string()))?,
            None => SessionId::generate(technique.as_str()),
        };

        // 3. Build the aggregate at step 0
        let participants = self.resolve_participants(cmd.participants);
        let session = Session::start(
            session_id.clone(),
            technique,
            cmd.problem_statement,
            participants,
            self.stimulus.as_ref(),
        )
        .map_err(|e| match e.code {
            ErrorCode::ValidationFailed => StartSessionError::Validation(e.message),
            _ => StartSessionError::Domain(e),
        })?;
        let status = session.status(Timestamp::now());

        // 4. Register
        self.store.insert(session).map_err(|e| match e.code {
            ErrorCode::DuplicateSession => StartSessionError::DuplicateSession(session_id.clone()),
            _ => StartSessionError::Domain(e),
        })?;

        info!(
            session_id = %session_id,
            technique = technique.as_str(),
            "Ideation session started"
        );

        Ok(StartSessionResult { session_id, status })
    }

    fn resolve_participants(&self, participants: Vec<String>) -> Vec<String> {
        let named: Vec<String> = participants
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if named.is_empty() {
            vec![self.default_participant.clone()]
        } else {
            named
        }
    }
}
