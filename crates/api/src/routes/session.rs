//! Route definitions for the `/sessions` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}/status      -> update_status
/// PUT    /{id}/complete    -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(session::create))
        .route("/{id}", get(session::get_by_id))
        .route("/{id}/status", put(session::update_status))
        .route("/{id}/complete", put(session::complete))
}
