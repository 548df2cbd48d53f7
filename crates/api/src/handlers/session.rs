//! Handlers for session booking and the session lifecycle.
//!
//! Transitions go through [`validate_transition`] and are written with a
//! compare-and-set on the current status, so two concurrent requests cannot
//! both move the same session.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tutorhub_core::error::CoreError;
use tutorhub_core::session::{
    default_session_price, validate_duration_hours, validate_price, validate_session_time,
    validate_transition, PaymentStatus, SessionStatus,
};
use tutorhub_core::types::DbId;
use tutorhub_db::models::session::{CreateSession, Session, UpdateSessionStatus};
use tutorhub_db::store::TutoringStore;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::tutor::ensure_tutor_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

async fn ensure_session_exists(store: &dyn TutoringStore, id: DbId) -> AppResult<Session> {
    store
        .find_session_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))
}

fn current_status(session: &Session) -> AppResult<SessionStatus> {
    session.status.parse::<SessionStatus>().map_err(|_| {
        AppError::InternalError(format!(
            "Session {} has unrecognised status '{}'",
            session.id, session.status
        ))
    })
}

/// Validate and apply one lifecycle step.
async fn transition(
    store: &dyn TutoringStore,
    id: DbId,
    next: SessionStatus,
    payment_status: Option<PaymentStatus>,
) -> AppResult<Session> {
    let session = ensure_session_exists(store, id).await?;
    let from = current_status(&session)?;
    validate_transition(from, next)?;

    match store
        .transition_session_status(id, from, next, payment_status)
        .await?
    {
        Some(updated) => Ok(updated),
        // Lost a race: report against the status that won.
        None => {
            let latest = ensure_session_exists(store, id).await?;
            Err(AppError::Core(CoreError::InvalidTransition {
                from: latest.status,
                to: next.to_string(),
            }))
        }
    }
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// POST /api/v1/sessions
///
/// Book a new `Pending` session. When no price is given it is derived from
/// the tutor's hourly price and the duration.
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateSession>,
) -> AppResult<impl IntoResponse> {
    validate_session_time(&input.start_time)?;
    validate_duration_hours(input.duration_hours)?;
    if let Some(price) = input.price {
        validate_price(price)?;
    }

    let tutor = ensure_tutor_exists(state.store.as_ref(), input.tutor_id).await?;
    state
        .store
        .find_student_by_id(input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;

    let price = input
        .price
        .unwrap_or_else(|| default_session_price(tutor.price, input.duration_hours));
    input.price = Some(price);

    let session = state.store.create_session(&input).await?;

    tracing::info!(
        session_id = session.id,
        tutor_id = session.tutor_id,
        student_id = session.student_id,
        price = session.price,
        "Session booked"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = ensure_session_exists(state.store.as_ref(), id).await?;
    Ok(Json(DataResponse { data: session }))
}

/// GET /api/v1/tutors/{id}/sessions
pub async fn list_by_tutor(
    State(state): State<AppState>,
    Path(tutor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_tutor_exists(state.store.as_ref(), tutor_id).await?;
    let sessions = state.store.list_sessions_for_tutor(tutor_id).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// PUT /api/v1/sessions/{id}/status
///
/// Accept or decline a pending request. Completion has its own endpoint.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateSessionStatus>,
) -> AppResult<impl IntoResponse> {
    let next: SessionStatus = input.status.parse()?;
    if !matches!(next, SessionStatus::Accepted | SessionStatus::Declined) {
        return Err(AppError::Core(CoreError::InvalidInput(format!(
            "Status must be Accepted or Declined, got '{next}'"
        ))));
    }

    let session = transition(state.store.as_ref(), id, next, None).await?;

    tracing::info!(session_id = id, status = %session.status, "Session status updated");

    Ok(Json(DataResponse { data: session }))
}

/// PUT /api/v1/sessions/{id}/complete
///
/// Mark an accepted session completed and settle its payment status. Only
/// completed sessions can be reviewed.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = transition(
        state.store.as_ref(),
        id,
        SessionStatus::Completed,
        Some(PaymentStatus::Completed),
    )
    .await?;

    tracing::info!(session_id = id, "Session completed");

    Ok(Json(DataResponse { data: session }))
}
