use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use todos_core::error::CoreError;

use crate::response::{Envelope, FailureKind, NoPayload};

/// Request-level error type for HTTP handlers.
///
/// Covers everything rejected before the todo service runs: malformed
/// bodies, query strings, and paths, and DTO validation. Service outcomes,
/// including not-found and persistence failures, are envelopes rather than
/// errors. Renders as the same failure envelope with status 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level validation error from `todos_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Field-level validation failures on a request DTO.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected request");
        Envelope::<NoPayload>::failure(FailureKind::BadRequest, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn core_validation_renders_as_bad_request() {
        let err = AppError::from(CoreError::Validation("bad date".into()));
        assert_eq!(err.to_string(), "Validation failed: bad date");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_request_message() {
        let err = AppError::BadRequest("missing field `details`".into());
        assert_eq!(err.to_string(), "Bad request: missing field `details`");
    }
}
