//! ExportSessionHandler - Query handler for exporting a session summary.
//!
//! Builds one [`SessionSummary`] from a snapshot and hands it to the renderer
//! registered for the requested format. Works for active and completed
//! sessions and never mutates either.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::analytics::SessionSummary;
use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::ports::{ExportError, ExportFormat, ExportedSession, SessionStore, SummaryRenderer};

/// Query to export a session.
#[derive(Debug, Clone)]
pub struct ExportSessionQuery {
    pub session_id: String,
    /// Format name or alias, e.g. `structured`, `md`, `csv`.
    pub format: String,
}

/// Error type for exports.
#[derive(Debug, Clone, Error)]
pub enum ExportSessionError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Handler for session exports.
pub struct ExportSessionHandler {
    store: Arc<dyn SessionStore>,
    renderers: Vec<Arc<dyn SummaryRenderer>>,
}

impl ExportSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, renderers: Vec<Arc<dyn SummaryRenderer>>) -> Self {
        Self { store, renderers }
    }

    pub fn handle(&self, query: ExportSessionQuery) -> Result<ExportedSession, ExportSessionError> {
        let format: ExportFormat = query.format.parse()?;
        let renderer = self
            .renderers
            .iter()
            .find(|r| r.format() == format)
            .ok_or_else(|| ExportError::UnsupportedFormat(query.format.clone()))?;

        let unknown = || ExportError::UnknownSession(query.session_id.clone());
        let session_id = SessionId::new(query.session_id.as_str()).map_err(|_| unknown())?;
        let session = self.store.find(&session_id)?.ok_or_else(unknown)?;

        let summary = SessionSummary::from_session(&session, Timestamp::now());
        let content = renderer.render(&summary)?;

        debug!(
            session_id = %session_id,
            technique = session.technique().as_str(),
            format = %format,
            bytes = content.len(),
            "Session exported"
        );

        Ok(ExportedSession::new(content, format, session_id.as_str()))
    }
}
