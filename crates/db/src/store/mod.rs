//! The persistence seam consumed by the review workflow and HTTP handlers.
//!
//! [`TutoringStore`] is object safe and used as `Arc<dyn TutoringStore>`.
//! Two implementations exist:
//!
//! - [`PgStore`]: delegates to the Postgres repositories.
//! - [`MemoryStore`]: process-local tables, used by tests and local runs
//!   without a database.

mod memory;
mod postgres;

use async_trait::async_trait;
use tutorhub_core::error::CoreError;
use tutorhub_core::rating::RatingSummary;
use tutorhub_core::session::{PaymentStatus, SessionStatus};
use tutorhub_core::types::DbId;

use crate::models::review::{NewReview, Review, ReviewFilter, ReviewWithStudent};
use crate::models::session::{CreateSession, Session};
use crate::models::student::{CreateStudent, Student};
use crate::models::tutor::{CreateTutor, Tutor, UpdateTutor};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Name of the unique index guarding one review per (student, session).
pub const REVIEW_PAIR_CONSTRAINT: &str = "uq_reviews_student_session";

/// Errors raised by a [`TutoringStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A unique constraint rejected the write. Carries the constraint name.
    #[error("Duplicate value violates unique constraint: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                tracing::debug!(%constraint, "Unique constraint rejected write");
                return StoreError::UniqueViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            StoreError::UniqueViolation(constraint) => {
                CoreError::Internal(format!("Unhandled unique violation on {constraint}"))
            }
            StoreError::Database(e) => CoreError::Internal(e.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Find / insert / update operations over tutors, students, sessions, and
/// reviews.
///
/// Every method is an independent write or snapshot read; no method spans
/// a transaction across entities.
#[async_trait]
pub trait TutoringStore: Send + Sync {
    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    /* ---- tutors ---- */

    async fn create_tutor(&self, input: &CreateTutor) -> StoreResult<Tutor>;

    async fn find_tutor_by_id(&self, id: DbId) -> StoreResult<Option<Tutor>>;

    async fn list_tutors(&self) -> StoreResult<Vec<Tutor>>;

    /// Apply a profile patch. Returns `None` if the tutor does not exist.
    async fn update_tutor(&self, id: DbId, input: &UpdateTutor) -> StoreResult<Option<Tutor>>;

    /// Overwrite the tutor's derived rating fields.
    ///
    /// Fails with [`StoreError::NotFound`] if the tutor does not exist.
    async fn update_tutor_rating(&self, id: DbId, summary: RatingSummary) -> StoreResult<Tutor>;

    /* ---- students ---- */

    async fn create_student(&self, input: &CreateStudent) -> StoreResult<Student>;

    async fn find_student_by_id(&self, id: DbId) -> StoreResult<Option<Student>>;

    /* ---- sessions ---- */

    /// Insert a `Pending` session. `input.price` must already be resolved.
    async fn create_session(&self, input: &CreateSession) -> StoreResult<Session>;

    async fn find_session_by_id(&self, id: DbId) -> StoreResult<Option<Session>>;

    async fn list_sessions_for_tutor(&self, tutor_id: DbId) -> StoreResult<Vec<Session>>;

    /// Compare-and-set a session's status. Returns `None` when the session
    /// is missing or no longer in `from`.
    async fn transition_session_status(
        &self,
        id: DbId,
        from: SessionStatus,
        to: SessionStatus,
        payment_status: Option<PaymentStatus>,
    ) -> StoreResult<Option<Session>>;

    /* ---- reviews ---- */

    async fn find_reviews(&self, filter: &ReviewFilter) -> StoreResult<Vec<Review>>;

    /// Insert a review, assigning identity and creation timestamp.
    ///
    /// Fails with [`StoreError::UniqueViolation`] carrying
    /// [`REVIEW_PAIR_CONSTRAINT`] if the pair was already reviewed.
    async fn insert_review(&self, input: &NewReview) -> StoreResult<Review>;

    /// A tutor's reviews joined with student names, newest first.
    async fn list_reviews_for_tutor(&self, tutor_id: DbId) -> StoreResult<Vec<ReviewWithStudent>>;
}
