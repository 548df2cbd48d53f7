//! Tutoring session model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
///
/// `status` and `payment_status` hold the capitalized strings of
/// [`tutorhub_core::session::SessionStatus`] and
/// [`tutorhub_core::session::PaymentStatus`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub tutor_id: DbId,
    pub student_id: DbId,
    pub session_date: NaiveDate,
    pub start_time: String,
    pub duration_hours: f64,
    pub price: f64,
    pub status: String,
    pub payment_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for booking a new session. New sessions always start `Pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSession {
    pub tutor_id: DbId,
    pub student_id: DbId,
    pub session_date: NaiveDate,
    pub start_time: String,
    pub duration_hours: f64,
    /// Filled from the tutor's hourly price when omitted.
    pub price: Option<f64>,
}

/// Request body for `PUT /sessions/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSessionStatus {
    pub status: String,
}
