//! Handlers for review submission, listing, and rating recomputation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tutorhub_core::rating::TutorRating;
use tutorhub_core::types::DbId;
use tutorhub_db::models::review::SubmitReview;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reviews
///
/// The tutor's rating already reflects the new review when this returns.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<SubmitReview>,
) -> AppResult<impl IntoResponse> {
    let review = state.reviews.submit(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// GET /api/v1/tutors/{id}/reviews
///
/// Returns an empty list, not 404, for tutors without reviews.
pub async fn list_by_tutor(
    State(state): State<AppState>,
    Path(tutor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reviews = state.reviews.list_by_tutor(tutor_id).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /api/v1/tutors/{id}/rating/recompute
///
/// Rederive the rating from the current review set. Repairs a rating left
/// stale when a review insert was not followed by its recompute.
pub async fn recompute_rating(
    State(state): State<AppState>,
    Path(tutor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let summary = state.reviews.aggregator().recompute(tutor_id).await?;

    tracing::info!(
        tutor_id,
        review_count = summary.count,
        "Tutor rating recomputed on request"
    );

    Ok(Json(DataResponse {
        data: TutorRating {
            tutor_id,
            average_rating: summary.average,
            review_count: summary.count,
        },
    }))
}
