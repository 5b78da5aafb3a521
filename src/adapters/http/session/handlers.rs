//! HTTP handlers for session endpoints.
//!
//! These handlers connect Axum routes to the application layer's session and
//! export handlers. Application handlers are synchronous and in-memory, so
//! they run inline on the request task.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::analytics::{
    ExportSessionError, ExportSessionHandler, ExportSessionQuery,
};
use crate::application::handlers::session::{
    GetSessionStatusError, GetSessionStatusHandler, GetSessionStatusQuery, ListSessionsHandler,
    StartSessionCommand, StartSessionError, StartSessionHandler, SubmitStepCommand,
    SubmitStepError, SubmitStepHandler, SwitchTechniqueCommand, SwitchTechniqueError,
    SwitchTechniqueHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::ports::{ExportError, SessionStore, StimulusSource, SummaryRenderer};

use super::dto::{
    ExportQuery, SessionListResponse, StartSessionRequest, StartSessionResponse,
    SwitchTechniqueRequest, SwitchTechniqueResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct FacilitationAppState {
    pub store: Arc<dyn SessionStore>,
    pub stimulus: Arc<dyn StimulusSource>,
    pub renderers: Vec<Arc<dyn SummaryRenderer>>,
    pub default_participant: String,
}

impl FacilitationAppState {
    pub fn start_session_handler(&self) -> StartSessionHandler {
        StartSessionHandler::new(
            self.store.clone(),
            self.stimulus.clone(),
            self.default_participant.clone(),
        )
    }

    pub fn get_session_status_handler(&self) -> GetSessionStatusHandler {
        GetSessionStatusHandler::new(self.store.clone())
    }

    pub fn submit_step_handler(&self) -> SubmitStepHandler {
        SubmitStepHandler::new(self.store.clone(), self.stimulus.clone())
    }

    pub fn switch_technique_handler(&self) -> SwitchTechniqueHandler {
        SwitchTechniqueHandler::new(self.store.clone(), self.stimulus.clone())
    }

    pub fn list_sessions_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.store.clone())
    }

    pub fn export_session_handler(&self) -> ExportSessionHandler {
        ExportSessionHandler::new(self.store.clone(), self.renderers.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a session
pub async fn start_session(
    State(state): State<FacilitationAppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = StartSessionCommand {
        technique: request.technique,
        problem_statement: request.problem_statement,
        participants: request.participants,
        session_id: request.session_id,
    };

    let result = state.start_session_handler().handle(cmd)?;

    let response = StartSessionResponse {
        session_id: result.session_id.to_string(),
        status: result.status,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/sessions/:id/steps - Submit data for the current step
///
/// The body is the step payload itself. A missing or non-object body counts
/// as an empty payload.
pub async fn submit_step(
    State(state): State<FacilitationAppState>,
    Path(session_id): Path<String>,
    payload: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitStepCommand {
        session_id,
        payload: payload.map(|Json(v)| v).unwrap_or(Value::Null),
    };

    let outcome = state.submit_step_handler().handle(cmd)?;

    Ok(Json(outcome))
}

/// POST /api/sessions/:id/switch - Switch to another technique
pub async fn switch_technique(
    State(state): State<FacilitationAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SwitchTechniqueRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SwitchTechniqueCommand {
        session_id,
        new_technique: request.new_technique,
        preserve_data: request.preserve_data,
    };

    let result = state.switch_technique_handler().handle(cmd)?;

    let response = SwitchTechniqueResponse {
        new_session_id: result.new_session_id.to_string(),
        initial_status: result.initial_status,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions - List active and completed sessions
pub async fn list_sessions(
    State(state): State<FacilitationAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let sessions = state.list_sessions_handler().handle()?;
    Ok(Json(SessionListResponse::from(sessions)))
}

/// GET /api/sessions/:id - Current session status
pub async fn get_session_status(
    State(state): State<FacilitationAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state
        .get_session_status_handler()
        .handle(GetSessionStatusQuery { session_id })?;
    Ok(Json(status))
}

/// GET /api/sessions/:id/export?format= - Export a session summary
pub async fn export_session(
    State(state): State<FacilitationAppState>,
    Path(session_id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let exported = state.export_session_handler().handle(ExportSessionQuery {
        session_id,
        format: query.format_or_default(),
    })?;
    Ok(Json(exported))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

impl From<StartSessionError> for ApiError {
    fn from(err: StartSessionError) -> Self {
        match err {
            StartSessionError::UnknownTechnique(t) => ApiError::BadRequest(
                ErrorCode::UnknownTechnique,
                format!("Unknown technique: {}", t),
            ),
            StartSessionError::DuplicateSession(id) => ApiError::Conflict(
                ErrorCode::DuplicateSession,
                format!("Session already exists: {}", id),
            ),
            StartSessionError::Validation(msg) => {
                ApiError::BadRequest(ErrorCode::ValidationFailed, msg)
            }
            StartSessionError::Domain(e) => e.into(),
        }
    }
}

impl From<GetSessionStatusError> for ApiError {
    fn from(err: GetSessionStatusError) -> Self {
        match err {
            GetSessionStatusError::NotFound(id) => not_found(&id),
            GetSessionStatusError::Domain(e) => e.into(),
        }
    }
}

impl From<SubmitStepError> for ApiError {
    fn from(err: SubmitStepError) -> Self {
        match err {
            SubmitStepError::NotFound(id) => not_found(&id),
            SubmitStepError::AlreadyCompleted(id) => already_completed(&id),
            SubmitStepError::InvalidStepData {
                message,
                field,
                step,
            } => ApiError::UnprocessableEntity {
                message,
                details: serde_json::json!({ "field": field, "step": step }),
            },
            SubmitStepError::Domain(e) => e.into(),
        }
    }
}

impl From<SwitchTechniqueError> for ApiError {
    fn from(err: SwitchTechniqueError) -> Self {
        match err {
            SwitchTechniqueError::NotFound(id) => not_found(&id),
            SwitchTechniqueError::AlreadyCompleted(id) => already_completed(&id),
            SwitchTechniqueError::UnknownTechnique(t) => ApiError::BadRequest(
                ErrorCode::UnknownTechnique,
                format!("Unknown technique: {}", t),
            ),
            SwitchTechniqueError::Domain(e) => e.into(),
        }
    }
}

impl From<ExportSessionError> for ApiError {
    fn from(err: ExportSessionError) -> Self {
        match err {
            ExportSessionError::Export(e @ ExportError::RenderFailed(_)) => {
                ApiError::Internal(e.to_string())
            }
            ExportSessionError::Export(e @ ExportError::UnsupportedFormat(_)) => {
                ApiError::BadRequest(ErrorCode::UnsupportedFormat, e.to_string())
            }
            ExportSessionError::Export(e @ ExportError::UnknownSession(_)) => {
                ApiError::BadRequest(ErrorCode::ExportFailed, e.to_string())
            }
            ExportSessionError::Domain(e) => e.into(),
        }
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(
        ErrorCode::SessionNotFound,
        format!("Session not found: {}", id),
    )
}

fn already_completed(id: &str) -> ApiError {
    ApiError::Conflict(
        ErrorCode::SessionAlreadyCompleted,
        format!("Session already completed: {}", id),
    )
}
