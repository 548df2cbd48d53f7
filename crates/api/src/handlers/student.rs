//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tutorhub_core::error::CoreError;
use tutorhub_core::student::{validate_email, validate_student_name};
use tutorhub_core::types::DbId;
use tutorhub_db::models::student::CreateStudent;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    validate_student_name(&input.name)?;
    if let Some(ref email) = input.email {
        validate_email(email)?;
    }
    input.name = input.name.trim().to_string();

    let student = state.store.create_student(&input).await?;

    tracing::info!(student_id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: student })))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = state
        .store
        .find_student_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(DataResponse { data: student }))
}
