//! Route definitions for the `/reviews` resource.
//!
//! Tutor-scoped review listing lives under `/tutors/{id}/reviews`.

use axum::routing::post;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// POST   /          -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(review::submit))
}
