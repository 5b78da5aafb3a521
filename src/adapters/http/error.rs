//! API error type shared by every HTTP module.
//!
//! Handler errors convert into [`ApiError`], which renders as an
//! [`ErrorResponse`] JSON body with a matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// API error type that converts handler errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorCode, String),
    NotFound(ErrorCode, String),
    Conflict(ErrorCode, String),
    UnprocessableEntity { message: String, details: Value },
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::Conflict(..) => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::UnknownTechnique
            | ErrorCode::UnsupportedFormat => ApiError::BadRequest(err.code, err.message),
            ErrorCode::SessionNotFound => ApiError::NotFound(err.code, err.message),
            ErrorCode::SessionAlreadyCompleted | ErrorCode::DuplicateSession => {
                ApiError::Conflict(err.code, err.message)
            }
            ErrorCode::InvalidStepData => {
                let details: Map<String, Value> = err
                    .details
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect();
                ApiError::UnprocessableEntity {
                    message: err.message,
                    details: Value::Object(details),
                }
            }
            ErrorCode::ExportFailed | ErrorCode::InternalError => ApiError::Internal(err.message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(code, message)
            | ApiError::NotFound(code, message)
            | ApiError::Conflict(code, message) => ErrorResponse::new(code, message),
            ApiError::UnprocessableEntity { message, details } => {
                ErrorResponse::new(ErrorCode::InvalidStepData, message).with_details(details)
            }
            ApiError::Internal(message) => ErrorResponse::new(ErrorCode::InternalError, message),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_not_found_maps_to_404() {
        let err = ApiError::from(DomainError::new(ErrorCode::SessionNotFound, "missing"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn domain_completed_maps_to_409() {
        let err = ApiError::from(DomainError::new(ErrorCode::SessionAlreadyCompleted, "done"));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_step_data_carries_details() {
        let err = ApiError::from(DomainError::invalid_step_data("ideas", "ideas required"));
        match &err {
            ApiError::UnprocessableEntity { details, .. } => {
                assert_eq!(details["field"], "ideas");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_maps_to_500() {
        let err = ApiError::from(DomainError::new(ErrorCode::InternalError, "poisoned"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_omits_absent_details() {
        let json =
            serde_json::to_value(ErrorResponse::new(ErrorCode::SessionNotFound, "gone")).unwrap();
        assert_eq!(json["code"], "SESSION_NOT_FOUND");
        assert!(json.get("details").is_none());
    }
}
