//! HTTP adapter mapping for the API error envelope.
//!
//! Purpose: keep [`Error`] transport-agnostic while letting Actix handlers
//! turn failures into consistent JSON responses and status codes. Store
//! failures convert here, so handlers stay a thin `?` chain.

use actix_web::error::BlockingError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode, FileNameError};
use crate::store::StoreError;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code, ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        redacted.trace_id = error.trace_id.clone();
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => {
                Self::not_found("no such stored file").with_details(json!({ "name": name }))
            }
            StoreError::UnsupportedExtension(name) => {
                Self::invalid_request("file extension is not an accepted image type")
                    .with_details(json!({ "name": name }))
            }
            StoreError::Io(error) => {
                error!(%error, "store I/O failure");
                Self::internal("Internal server error")
            }
            StoreError::Encode(error) => {
                error!(%error, "store JSON encode failure");
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<FileNameError> for Error {
    fn from(err: FileNameError) -> Self {
        Self::invalid_request(err.to_string()).with_details(json!({ "field": "fileName" }))
    }
}

impl From<BlockingError> for Error {
    fn from(err: BlockingError) -> Self {
        // The blocking pool dropped the task; nothing client-actionable.
        error!(error = %err, "blocking store operation failed to complete");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
