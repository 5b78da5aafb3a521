//! HTTP handlers for technique endpoints.

use axum::extract::{Json, Path};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::technique::{
    GetTechniqueError, GetTechniqueHandler, GetTechniqueQuery, ListTechniquesHandler,
    TechniqueSummary,
};
use crate::domain::foundation::ErrorCode;

#[derive(Debug, Clone, Serialize)]
pub struct TechniqueListResponse {
    pub techniques: Vec<TechniqueSummary>,
}

/// GET /api/techniques - List the technique catalog
pub async fn list_techniques() -> impl IntoResponse {
    Json(TechniqueListResponse {
        techniques: ListTechniquesHandler::new().handle(),
    })
}

/// GET /api/techniques/:id - Full instructions for one technique
pub async fn get_technique(Path(technique): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let instructions = GetTechniqueHandler::new().handle(GetTechniqueQuery { technique })?;
    Ok(Json(instructions))
}

impl From<GetTechniqueError> for ApiError {
    fn from(err: GetTechniqueError) -> Self {
        match err {
            GetTechniqueError::UnknownTechnique(t) => ApiError::BadRequest(
                ErrorCode::UnknownTechnique,
                format!("Unknown technique: {}", t),
            ),
        }
    }
}
