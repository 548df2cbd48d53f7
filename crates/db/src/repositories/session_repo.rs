//! Repository for the `sessions` table.

use sqlx::PgPool;
use tutorhub_core::session::{PaymentStatus, SessionStatus};
use tutorhub_core::types::DbId;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tutor_id, student_id, session_date, start_time, duration_hours, \
    price, status, payment_status, created_at, updated_at";

/// Provides booking and lifecycle operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new `Pending` session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions
                (tutor_id, student_id, session_date, start_time, duration_hours, price)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.tutor_id)
            .bind(input.student_id)
            .bind(input.session_date)
            .bind(&input.start_time)
            .bind(input.duration_hours)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sessions booked with a tutor, soonest first.
    pub async fn list_for_tutor(
        pool: &PgPool,
        tutor_id: DbId,
    ) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE tutor_id = $1
             ORDER BY session_date ASC, start_time ASC, id ASC"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(tutor_id)
            .fetch_all(pool)
            .await
    }

    /// Move a session from `from` to `to`, optionally setting the payment
    /// status in the same write.
    ///
    /// The update only applies while the row is still in `from`, so two
    /// racing transitions cannot both succeed. Returns `None` if the row is
    /// missing or has already left `from`.
    pub async fn transition_status(
        pool: &PgPool,
        id: DbId,
        from: SessionStatus,
        to: SessionStatus,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET
                status = $3,
                payment_status = COALESCE($4, payment_status)
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .bind(payment_status.map(PaymentStatus::as_str))
            .fetch_optional(pool)
            .await
    }
}
