use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::now_timestamp;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(HashMap<String, String>),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Validation(errors) => write!(f, "Validation failed: {:?}", errors),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Wire shape for all error responses: `{status, message, timestamp}` with a
/// field-to-message `errors` map present only for validation failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status: status.as_u16(),
            message,
            timestamp: now_timestamp(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => {
                tracing::debug!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(StatusCode::NOT_FOUND, msg),
                )
            }
            ApiError::Validation(errors) => {
                tracing::warn!("Validation error: {:?}", errors);
                let mut body = ErrorResponse::new(
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                );
                body.errors = Some(errors);
                (StatusCode::BAD_REQUEST, body)
            }
            // Version conflicts have no dedicated mapping; the cause is
            // logged and the caller sees a generic failure
            ApiError::Conflict(msg) | ApiError::Internal(msg) => {
                tracing::error!("Unexpected error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An unexpected error occurred".to_string(),
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// Convert from sqlx errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            other => ApiError::Internal(format!("Database error: {}", other)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
