//! # HTTP Errors
//!
//! Maps book errors onto status codes and response envelopes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::books::{BookError, ErrorKind};

use super::response::{ApiResponse, Operation, Status};

/// Result type for book handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// What went wrong
#[derive(Debug, Clone, Error)]
pub enum ApiErrorKind {
    /// Rejected by the book collection
    #[error(transparent)]
    Book(#[from] BookError),

    /// Request body could not be parsed into a payload
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),
}

/// An error scoped to one bookshelf operation
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ApiError {
    pub operation: Operation,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn new(operation: Operation, kind: impl Into<ApiErrorKind>) -> Self {
        Self {
            operation,
            kind: kind.into(),
        }
    }

    pub fn invalid_payload(operation: Operation, rejection: JsonRejection) -> Self {
        Self::new(
            operation,
            ApiErrorKind::InvalidPayload(rejection.body_text()),
        )
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.kind {
            ApiErrorKind::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::Book(err) => match err.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Envelope status: `error` for server faults, `fail` otherwise
    pub fn status(&self) -> Status {
        if self.status_code().is_server_error() {
            Status::Error
        } else {
            Status::Fail
        }
    }

    /// User-facing message
    pub fn message(&self) -> String {
        let op = self.operation;
        match &self.kind {
            ApiErrorKind::InvalidPayload(detail) => {
                format!("{}. {}", op.rejection_prefix(), detail)
            }
            ApiErrorKind::Book(BookError::MissingName) => {
                format!("{}. Mohon isi nama buku", op.rejection_prefix())
            }
            ApiErrorKind::Book(BookError::ReadPageExceedsPageCount { .. }) => format!(
                "{}. readPage tidak boleh lebih besar dari pageCount",
                op.rejection_prefix()
            ),
            ApiErrorKind::Book(BookError::NotFound(_)) => op.not_found_message().to_string(),
            ApiErrorKind::Book(
                BookError::IdExhausted(_) | BookError::InsertNotVisible(_) | BookError::LockPoisoned,
            ) => op.internal_message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiResponse::failure(self.status(), self.message()));
        (status, body).into_response()
    }
}
