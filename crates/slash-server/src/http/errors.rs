//! RFC9457-style API error wrapper.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use slash_api_models::ProblemDetails;
use tracing::error;

use crate::http::constants::{
    PROBLEM_BAD_REQUEST, PROBLEM_INTERNAL, PROBLEM_NOT_FOUND, PROBLEM_TIMEOUT,
};
use crate::users::UserError;

/// Structured API error rendered as a problem document.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) kind: &'static str,
    title: &'static str,
    detail: Option<String>,
}

impl ApiError {
    const fn new(status: StatusCode, kind: &'static str, title: &'static str) -> Self {
        Self {
            status,
            kind,
            title,
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            PROBLEM_INTERNAL,
            "internal server error",
        )
        .with_detail(message)
    }

    pub(crate) fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, PROBLEM_BAD_REQUEST, "bad request").with_detail(detail)
    }

    pub(crate) fn not_found(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            PROBLEM_NOT_FOUND,
            "resource not found",
        )
        .with_detail(detail)
    }

    pub(crate) fn request_timeout() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            PROBLEM_TIMEOUT,
            "service unavailable",
        )
        .with_detail("Request timeout")
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound { id } => Self::not_found(format!("user {id} not found")),
            UserError::InvalidField { field, reason } => {
                Self::bad_request(format!("{field}: {reason}"))
            }
            UserError::HashFailed { .. } | UserError::StoredHashInvalid { .. } => {
                error!(error = %err, "user directory failure");
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_map_to_statuses() {
        let missing = ApiError::from(UserError::NotFound { id: 7 });
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.detail.as_deref(), Some("user 7 not found"));

        let invalid = ApiError::from(UserError::InvalidField {
            field: "email",
            reason: "invalid email",
        });
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.kind, PROBLEM_BAD_REQUEST);

        let hashing = ApiError::from(UserError::HashFailed {
            detail: "rng".to_string(),
        });
        assert_eq!(hashing.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn timeout_reports_request_timeout_detail() {
        let timeout = ApiError::request_timeout();
        assert_eq!(timeout.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(timeout.detail.as_deref(), Some("Request timeout"));
    }
}
