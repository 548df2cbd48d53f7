//! Route definitions for the `/tutors` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{review, session, tutor};
use crate::state::AppState;

/// Routes mounted at `/tutors`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// GET    /{id}/sessions           -> session::list_by_tutor
/// GET    /{id}/reviews            -> review::list_by_tutor
/// POST   /{id}/rating/recompute   -> review::recompute_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tutor::list).post(tutor::create))
        .route("/{id}", get(tutor::get_by_id).put(tutor::update))
        .route("/{id}/sessions", get(session::list_by_tutor))
        .route("/{id}/reviews", get(review::list_by_tutor))
        .route("/{id}/rating/recompute", post(review::recompute_rating))
}
