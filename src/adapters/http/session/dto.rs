//! Request and response DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::session::{SessionOverview, SessionStatus};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/sessions`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub technique: String,
    pub problem_statement: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of `POST /api/sessions/:id/switch`.
#[derive(Debug, Clone, Deserialize)]
pub struct SwitchTechniqueRequest {
    pub new_technique: String,
    #[serde(default = "preserve_by_default")]
    pub preserve_data: bool,
}

fn preserve_by_default() -> bool {
    true
}

/// Query string of `GET /api/sessions/:id/export`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

impl ExportQuery {
    pub const DEFAULT_FORMAT: &'static str = "structured";

    pub fn format_or_default(self) -> String {
        self.format
            .unwrap_or_else(|| Self::DEFAULT_FORMAT.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwitchTechniqueResponse {
    pub new_session_id: String,
    pub initial_status: SessionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionOverview>,
    pub total: usize,
}

impl From<Vec<SessionOverview>> for SessionListResponse {
    fn from(sessions: Vec<SessionOverview>) -> Self {
        Self {
            total: sessions.len(),
            sessions,
        }
    }
}
