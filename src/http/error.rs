//! Mapping of service and authorization failures onto HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::{auth::domain::AuthError, task::services::TaskServiceError};

const INTERNAL_MESSAGE: &str = "internal server error";

/// Failure of a single HTTP request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization was refused.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A task or unit test operation failed.
    #[error(transparent)]
    Service(#[from] TaskServiceError),

    /// The request body is not a JSON document of the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// A path segment is not a valid identifier, so nothing can match it.
    #[error("no {resource} with id '{raw}'")]
    UnknownId {
        /// Kind of resource that was addressed.
        resource: &'static str,
        /// Path segment as received.
        raw: String,
    },

    /// The path could not be decoded into identifier segments.
    #[error("no resource at this path: {0}")]
    UnreadablePath(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    ///
    /// - Missing or invalid credentials: 401
    /// - Unprivileged mutation: 403
    /// - Unknown task or unit test: 404
    /// - Invalid field values or malformed JSON: 400
    /// - Storage failure: 500
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::Forbidden { .. }) => StatusCode::FORBIDDEN,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Service(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::UnknownId { .. } | Self::UnreadablePath(_) => StatusCode::NOT_FOUND,
            Self::Service(TaskServiceError::InvalidInput(_)) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code placed in the response body.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self.status_code() {
            StatusCode::UNAUTHORIZED => "unauthenticated",
            StatusCode::FORBIDDEN => "forbidden",
            StatusCode::NOT_FOUND => "not_found",
            StatusCode::BAD_REQUEST => "invalid_input",
            _ => "storage_error",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::UnreadablePath(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            INTERNAL_MESSAGE.to_owned()
        } else {
            self.to_string()
        };
        let body = ErrorBody {
            error: self.code(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
