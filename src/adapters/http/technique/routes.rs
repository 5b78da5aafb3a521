//! Route configuration for technique endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_technique, list_techniques};

/// Creates the technique router.
///
/// The catalog is static, so the router works with any application state.
pub fn technique_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/techniques", get(list_techniques))
        .route("/api/techniques/:id", get(get_technique))
}
