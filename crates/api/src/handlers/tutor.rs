//! Handlers for the `/tutors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tutorhub_core::error::CoreError;
use tutorhub_core::tutor::{
    validate_bio, validate_hourly_price, validate_preference, validate_qualifications,
    validate_subjects, validate_tutor_name,
};
use tutorhub_core::types::DbId;
use tutorhub_db::models::tutor::{CreateTutor, Tutor, UpdateTutor};
use tutorhub_db::store::TutoringStore;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a tutor or fail with 404.
pub async fn ensure_tutor_exists(store: &dyn TutoringStore, id: DbId) -> AppResult<Tutor> {
    store
        .find_tutor_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tutor", id }))
}

/// Validate every field sent in a create or update payload.
fn validate_profile(
    name: Option<&str>,
    qualifications: Option<&str>,
    bio: Option<&str>,
    subjects: Option<&[String]>,
    price: Option<f64>,
    preferences: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        validate_tutor_name(name)?;
    }
    if let Some(qualifications) = qualifications {
        validate_qualifications(qualifications)?;
    }
    if let Some(bio) = bio {
        validate_bio(bio)?;
    }
    if let Some(subjects) = subjects {
        validate_subjects(subjects)?;
    }
    if let Some(price) = price {
        validate_hourly_price(price)?;
    }
    if let Some(preferences) = preferences {
        validate_preference(preferences)?;
    }
    Ok(())
}

/// GET /api/v1/tutors
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tutors = state.store.list_tutors().await?;
    Ok(Json(DataResponse { data: tutors }))
}

/// POST /api/v1/tutors
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateTutor>,
) -> AppResult<impl IntoResponse> {
    validate_profile(
        Some(&input.name),
        Some(&input.qualifications),
        input.bio.as_deref(),
        Some(&input.subjects),
        Some(input.price),
        input.preferences.as_deref(),
    )?;
    input.name = input.name.trim().to_string();

    let tutor = state.store.create_tutor(&input).await?;

    tracing::info!(tutor_id = tutor.id, name = %tutor.name, "Tutor created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tutor })))
}

/// GET /api/v1/tutors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tutor = ensure_tutor_exists(state.store.as_ref(), id).await?;
    Ok(Json(DataResponse { data: tutor }))
}

/// PUT /api/v1/tutors/{id}
///
/// Rating fields are not part of the payload; they only change through
/// recomputation.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(mut input): AppJson<UpdateTutor>,
) -> AppResult<impl IntoResponse> {
    validate_profile(
        input.name.as_deref(),
        input.qualifications.as_deref(),
        input.bio.as_deref(),
        input.subjects.as_deref(),
        input.price,
        input.preferences.as_deref(),
    )?;
    input.name = input.name.map(|n| n.trim().to_string());

    let tutor = state
        .store
        .update_tutor(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tutor", id }))?;

    tracing::info!(tutor_id = id, "Tutor profile updated");

    Ok(Json(DataResponse { data: tutor }))
}
