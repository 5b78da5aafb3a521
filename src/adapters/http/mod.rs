//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure. [`api_router`]
//! merges them into the full API.

pub mod error;
pub mod session;
pub mod technique;

use axum::Router;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use session::{session_router, FacilitationAppState};
pub use technique::technique_router;

/// Full API router with every endpoint mounted.
pub fn api_router(state: FacilitationAppState) -> Router {
    session_router()
        .merge(technique_router())
        .with_state(state)
}
