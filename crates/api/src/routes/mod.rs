pub mod health;
pub mod review;
pub mod session;
pub mod student;
pub mod tutor;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tutors                                list, create
/// /tutors/{id}                           get, update
/// /tutors/{id}/sessions                  sessions booked with the tutor
/// /tutors/{id}/reviews                   reviews with student names
/// /tutors/{id}/rating/recompute          rederive rating (POST)
///
/// /students                              create
/// /students/{id}                         get
///
/// /sessions                              book (POST)
/// /sessions/{id}                         get
/// /sessions/{id}/status                  accept / decline (PUT)
/// /sessions/{id}/complete                mark completed (PUT)
///
/// /reviews                               submit (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tutors", tutor::router())
        .nest("/students", student::router())
        .nest("/sessions", session::router())
        .nest("/reviews", review::router())
}
