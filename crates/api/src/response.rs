//! Shared response envelope for todo operations.
//!
//! Every todo operation answers with `{ "success": bool, "message"?: string,
//! ...payload }`. Failures carry only a message; the payload fields are
//! flattened into the top-level object on success.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Why an operation failed. Drives the HTTP status, never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No matching active row.
    NotFound,
    /// The store could not complete the request.
    Persistence,
    /// The request was rejected before reaching the service.
    BadRequest,
}

/// Standard `{ success, message?, ...payload }` envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: Option<T>,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful outcome with a payload and no message.
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            message: None,
            payload: Some(payload),
            failure: None,
        }
    }

    /// Successful outcome with a human-readable message.
    pub fn ok_with_message(message: impl Into<String>, payload: Option<T>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            payload,
            failure: None,
        }
    }

    /// Failed outcome. The message is the only detail the caller sees.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            payload: None,
            failure: Some(kind),
        }
    }

    /// HTTP status for this envelope.
    pub fn status(&self) -> StatusCode {
        match self.failure {
            None => StatusCode::OK,
            Some(FailureKind::NotFound) => StatusCode::NOT_FOUND,
            Some(FailureKind::Persistence) => StatusCode::INTERNAL_SERVER_ERROR,
            Some(FailureKind::BadRequest) => StatusCode::BAD_REQUEST,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Payload for operations that return nothing beyond the message.
#[derive(Debug, Serialize)]
pub struct NoPayload {}
