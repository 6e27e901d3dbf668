//! Mapping of domain errors onto HTTP responses

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct StandardError {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// An error response tagged with the request path that produced it
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: String,
    pub message: String,
    pub path: String,
}

impl ApiError {
    pub fn at(uri: &Uri, error: DomainError) -> Self {
        let (status, title) = status_and_title(&error);
        let path = uri.path().to_string();

        if status.is_server_error() {
            tracing::error!(path = %path, "{}", error);
        } else {
            tracing::debug!(path = %path, "{}", error);
        }

        let message = match error {
            DomainError::NotFound { .. } => error.to_string(),
            DomainError::Integrity(msg)
            | DomainError::Validation(msg)
            | DomainError::Database(msg)
            | DomainError::Internal(msg) => msg,
        };

        Self {
            status,
            title: title.to_string(),
            message,
            path,
        }
    }

    /// Request that axum refused to extract (bad path segment, malformed body)
    pub fn rejected(uri: &Uri, status: StatusCode, message: impl Into<String>) -> Self {
        let path = uri.path().to_string();
        let message = message.into();
        tracing::debug!(path = %path, status = status.as_u16(), "Rejected request: {}", message);

        Self {
            status,
            title: status.canonical_reason().unwrap_or("Bad request").to_string(),
            message,
            path,
        }
    }
}

fn status_and_title(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "Resource not found"),
        DomainError::Integrity(_) => (StatusCode::BAD_REQUEST, "Database error"),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation error"),
        DomainError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
        DomainError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = StandardError {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: self.status.as_u16(),
            error: self.title,
            message: self.message,
            path: self.path,
        };

        (self.status, Json(body)).into_response()
    }
}
