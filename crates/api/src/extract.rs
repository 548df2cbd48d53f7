//! Request extractors whose rejections use the API error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use tutorhub_core::error::CoreError;

use crate::error::AppError;

/// `axum::Json` with rejections reported as `400 INVALID_INPUT`.
///
/// Covers malformed JSON, wrongly typed fields, and a missing
/// `Content-Type: application/json` header.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::Core(CoreError::InvalidInput(rejection.body_text()))
    }
}
