use async_trait::async_trait;
use tutorhub_core::rating::RatingSummary;
use tutorhub_core::session::{PaymentStatus, SessionStatus};
use tutorhub_core::types::DbId;

use super::{StoreError, StoreResult, TutoringStore};
use crate::models::review::{NewReview, Review, ReviewFilter, ReviewWithStudent};
use crate::models::session::{CreateSession, Session};
use crate::models::student::{CreateStudent, Student};
use crate::models::tutor::{CreateTutor, Tutor, UpdateTutor};
use crate::repositories::{ReviewRepo, SessionRepo, StudentRepo, TutorRepo};
use crate::DbPool;

/// [`TutoringStore`] backed by PostgreSQL through the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutoringStore for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_tutor(&self, input: &CreateTutor) -> StoreResult<Tutor> {
        Ok(TutorRepo::create(&self.pool, input).await?)
    }

    async fn find_tutor_by_id(&self, id: DbId) -> StoreResult<Option<Tutor>> {
        Ok(TutorRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_tutors(&self) -> StoreResult<Vec<Tutor>> {
        Ok(TutorRepo::list(&self.pool).await?)
    }

    async fn update_tutor(&self, id: DbId, input: &UpdateTutor) -> StoreResult<Option<Tutor>> {
        Ok(TutorRepo::update(&self.pool, id, input).await?)
    }

    async fn update_tutor_rating(&self, id: DbId, summary: RatingSummary) -> StoreResult<Tutor> {
        TutorRepo::update_rating(&self.pool, id, summary)
            .await?
            .ok_or(StoreError::NotFound { entity: "Tutor", id })
    }

    async fn create_student(&self, input: &CreateStudent) -> StoreResult<Student> {
        Ok(StudentRepo::create(&self.pool, input).await?)
    }

    async fn find_student_by_id(&self, id: DbId) -> StoreResult<Option<Student>> {
        Ok(StudentRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_session(&self, input: &CreateSession) -> StoreResult<Session> {
        Ok(SessionRepo::create(&self.pool, input).await?)
    }

    async fn find_session_by_id(&self, id: DbId) -> StoreResult<Option<Session>> {
        Ok(SessionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_sessions_for_tutor(&self, tutor_id: DbId) -> StoreResult<Vec<Session>> {
        Ok(SessionRepo::list_for_tutor(&self.pool, tutor_id).await?)
    }

    async fn transition_session_status(
        &self,
        id: DbId,
        from: SessionStatus,
        to: SessionStatus,
        payment_status: Option<PaymentStatus>,
    ) -> StoreResult<Option<Session>> {
        Ok(SessionRepo::transition_status(&self.pool, id, from, to, payment_status).await?)
    }

    async fn find_reviews(&self, filter: &ReviewFilter) -> StoreResult<Vec<Review>> {
        Ok(ReviewRepo::find(&self.pool, filter).await?)
    }

    async fn insert_review(&self, input: &NewReview) -> StoreResult<Review> {
        Ok(ReviewRepo::create(&self.pool, input).await?)
    }

    async fn list_reviews_for_tutor(&self, tutor_id: DbId) -> StoreResult<Vec<ReviewWithStudent>> {
        Ok(ReviewRepo::list_for_tutor_with_student(&self.pool, tutor_id).await?)
    }
}
