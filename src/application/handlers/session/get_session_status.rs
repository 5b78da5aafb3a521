//! GetSessionStatusHandler - Query handler for session status.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::session::SessionStatus;
use crate::ports::SessionStore;

/// Query for a session's status.
#[derive(Debug, Clone)]
pub struct GetSessionStatusQuery {
    pub session_id: String,
}

/// Error type for status queries.
#[derive(Debug, Clone, Error)]
pub enum GetSessionStatusError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Handler for status queries. Works for active and completed sessions.
pub struct GetSessionStatusHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionStatusHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn handle(
        &self,
        query: GetSessionStatusQuery,
    ) -> Result<SessionStatus, GetSessionStatusError> {
        // An id that fails validation can never have been stored.
        let Ok(session_id) = SessionId::new(query.session_id.as_str()) else {
            return Err(GetSessionStatusError::NotFound(query.session_id));
        };

        let session = self
            .store
            .find(&session_id)?
            .ok_or(GetSessionStatusError::NotFound(query.session_id))?;

        Ok(session.status(Timestamp::now()))
    }
}
