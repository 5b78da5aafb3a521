//! Route configuration for session endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    export_session, get_session_status, list_sessions, start_session, submit_step,
    switch_technique, FacilitationAppState,
};

/// Creates the session router with all endpoints.
///
/// Routes:
/// - `POST /api/sessions` - Start a session
/// - `GET /api/sessions` - List sessions
/// - `GET /api/sessions/:id` - Session status
/// - `POST /api/sessions/:id/steps` - Submit step data
/// - `POST /api/sessions/:id/switch` - Switch technique
/// - `GET /api/sessions/:id/export?format=` - Export summary
pub fn session_router() -> Router<FacilitationAppState> {
    Router::new()
        .route("/api/sessions", post(start_session).get(list_sessions))
        .route("/api/sessions/:id", get(get_session_status))
        .route("/api/sessions/:id/steps", post(submit_step))
        .route("/api/sessions/:id/switch", post(switch_technique))
        .route("/api/sessions/:id/export", get(export_session))
}
