use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tutorhub_core::rating::RatingSummary;
use tutorhub_core::session::{PaymentStatus, SessionStatus};
use tutorhub_core::tutor::PREFERENCE_BOTH;
use tutorhub_core::types::DbId;

use super::{StoreError, StoreResult, TutoringStore, REVIEW_PAIR_CONSTRAINT};
use crate::models::review::{NewReview, Review, ReviewFilter, ReviewWithStudent};
use crate::models::session::{CreateSession, Session};
use crate::models::student::{CreateStudent, Student};
use crate::models::tutor::{CreateTutor, Tutor, UpdateTutor};

#[derive(Default)]
struct Tables {
    next_id: DbId,
    tutors: BTreeMap<DbId, Tutor>,
    students: BTreeMap<DbId, Student>,
    sessions: BTreeMap<DbId, Session>,
    reviews: BTreeMap<DbId, Review>,
}

impl Tables {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// Process-local [`TutoringStore`].
///
/// All tables live behind one `RwLock`. The duplicate check and insert in
/// [`TutoringStore::insert_review`] run under a single write guard, which
/// mirrors the unique index the Postgres schema puts on the review pair.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TutoringStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_tutor(&self, input: &CreateTutor) -> StoreResult<Tutor> {
        let mut tables = self.tables.write().await;
        let id = tables.allocate_id();
        let now = Utc::now();
        let tutor = Tutor {
            id,
            name: input.name.clone(),
            qualifications: input.qualifications.clone(),
            bio: input.bio.clone(),
            subjects: input.subjects.clone(),
            price: input.price,
            availability: input.availability.clone().unwrap_or_default(),
            preferences: input
                .preferences
                .clone()
                .unwrap_or_else(|| PREFERENCE_BOTH.to_string()),
            profile_picture: input.profile_picture.clone(),
            average_rating: None,
            review_count: 0,
            created_at: now,
            updated_at: now,
        };
        tables.tutors.insert(id, tutor.clone());
        Ok(tutor)
    }

    async fn find_tutor_by_id(&self, id: DbId) -> StoreResult<Option<Tutor>> {
        Ok(self.tables.read().await.tutors.get(&id).cloned())
    }

    async fn list_tutors(&self) -> StoreResult<Vec<Tutor>> {
        // Ids are allocated in creation order.
        Ok(self.tables.read().await.tutors.values().rev().cloned().collect())
    }

    async fn update_tutor(&self, id: DbId, input: &UpdateTutor) -> StoreResult<Option<Tutor>> {
        let mut tables = self.tables.write().await;
        let Some(tutor) = tables.tutors.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            tutor.name = name.clone();
        }
        if let Some(qualifications) = &input.qualifications {
            tutor.qualifications = qualifications.clone();
        }
        if let Some(bio) = &input.bio {
            tutor.bio = Some(bio.clone());
        }
        if let Some(subjects) = &input.subjects {
            tutor.subjects = subjects.clone();
        }
        if let Some(price) = input.price {
            tutor.price = price;
        }
        if let Some(availability) = &input.availability {
            tutor.availability = availability.clone();
        }
        if let Some(preferences) = &input.preferences {
            tutor.preferences = preferences.clone();
        }
        if let Some(picture) = &input.profile_picture {
            tutor.profile_picture = Some(picture.clone());
        }
        tutor.updated_at = Utc::now();

        Ok(Some(tutor.clone()))
    }

    async fn update_tutor_rating(&self, id: DbId, summary: RatingSummary) -> StoreResult<Tutor> {
        let mut tables = self.tables.write().await;
        let tutor = tables
            .tutors
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "Tutor", id })?;
        tutor.average_rating = summary.average;
        tutor.review_count = summary.count;
        tutor.updated_at = Utc::now();
        Ok(tutor.clone())
    }

    async fn create_student(&self, input: &CreateStudent) -> StoreResult<Student> {
        let mut tables = self.tables.write().await;
        let id = tables.allocate_id();
        let now = Utc::now();
        let student = Student {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.students.insert(id, student.clone());
        Ok(student)
    }

    async fn find_student_by_id(&self, id: DbId) -> StoreResult<Option<Student>> {
        Ok(self.tables.read().await.students.get(&id).cloned())
    }

    async fn create_session(&self, input: &CreateSession) -> StoreResult<Session> {
        let mut tables = self.tables.write().await;
        let id = tables.allocate_id();
        let now = Utc::now();
        let session = Session {
            id,
            tutor_id: input.tutor_id,
            student_id: input.student_id,
            session_date: input.session_date,
            start_time: input.start_time.clone(),
            duration_hours: input.duration_hours,
            price: input.price.unwrap_or(0.0),
            status: SessionStatus::Pending.as_str().to_string(),
            payment_status: PaymentStatus::Pending.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.sessions.insert(id, session.clone());
        Ok(session)
    }

    async fn find_session_by_id(&self, id: DbId) -> StoreResult<Option<Session>> {
        Ok(self.tables.read().await.sessions.get(&id).cloned())
    }

    async fn list_sessions_for_tutor(&self, tutor_id: DbId) -> StoreResult<Vec<Session>> {
        let tables = self.tables.read().await;
        let mut sessions: Vec<Session> = tables
            .sessions
            .values()
            .filter(|s| s.tutor_id == tutor_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| {
            (a.session_date, &a.start_time, a.id).cmp(&(b.session_date, &b.start_time, b.id))
        });
        Ok(sessions)
    }

    async fn transition_session_status(
        &self,
        id: DbId,
        from: SessionStatus,
        to: SessionStatus,
        payment_status: Option<PaymentStatus>,
    ) -> StoreResult<Option<Session>> {
        let mut tables = self.tables.write().await;
        let Some(session) = tables.sessions.get_mut(&id) else {
            return Ok(None);
        };
        if session.status != from.as_str() {
            return Ok(None);
        }

        session.status = to.as_str().to_string();
        if let Some(payment) = payment_status {
            session.payment_status = payment.as_str().to_string();
        }
        session.updated_at = Utc::now();

        Ok(Some(session.clone()))
    }

    async fn find_reviews(&self, filter: &ReviewFilter) -> StoreResult<Vec<Review>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn insert_review(&self, input: &NewReview) -> StoreResult<Review> {
        let mut tables = self.tables.write().await;

        let pair = ReviewFilter::for_student_session(input.student_id, input.session_id);
        if tables.reviews.values().any(|r| pair.matches(r)) {
            return Err(StoreError::UniqueViolation(REVIEW_PAIR_CONSTRAINT.to_string()));
        }

        let id = tables.allocate_id();
        let review = Review {
            id,
            student_id: input.student_id,
            tutor_id: input.tutor_id,
            session_id: input.session_id,
            rating: input.rating,
            review_text: input.review_text.clone(),
            created_at: Utc::now(),
        };
        tables.reviews.insert(id, review.clone());
        Ok(review)
    }

    async fn list_reviews_for_tutor(&self, tutor_id: DbId) -> StoreResult<Vec<ReviewWithStudent>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .rev()
            .filter(|r| r.tutor_id == tutor_id)
            .map(|r| ReviewWithStudent {
                review: r.clone(),
                student_name: tables.students.get(&r.student_id).map(|s| s.name.clone()),
            })
            .collect())
    }
}
