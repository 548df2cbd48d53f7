use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tutorhub_core::error::CoreError;
use tutorhub_db::store::StoreError;

/// Error returned by every handler.
///
/// Domain failures arrive as [`CoreError`]; the `IntoResponse` impl turns
/// them into a status code plus a `{ "error": .., "code": .. }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Core(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Status, machine-readable code, and client-facing message.
    ///
    /// Internal details are logged here and never returned.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        let core = match self {
            AppError::Core(core) => core,
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                );
            }
        };

        match core {
            CoreError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone()),
            CoreError::SessionNotEligible { .. } => (
                StatusCode::BAD_REQUEST,
                "SESSION_NOT_ELIGIBLE",
                core.to_string(),
            ),
            CoreError::DuplicateReview { .. } => {
                (StatusCode::BAD_REQUEST, "DUPLICATE_REVIEW", core.to_string())
            }
            CoreError::InvalidTransition { .. } => {
                (StatusCode::CONFLICT, "INVALID_TRANSITION", core.to_string())
            }
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}
