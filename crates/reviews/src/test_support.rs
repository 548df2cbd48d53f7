//! Shared fixtures for the service tests.

use std::sync::Arc;

use chrono::NaiveDate;
use tutorhub_core::session::{PaymentStatus, SessionStatus};
use tutorhub_core::types::DbId;
use tutorhub_db::models::session::CreateSession;
use tutorhub_db::models::student::CreateStudent;
use tutorhub_db::models::tutor::CreateTutor;
use tutorhub_db::store::{MemoryStore, TutoringStore};

use crate::{RatingAggregator, ReviewService};

pub struct Fixture {
    pub store: Arc<dyn TutoringStore>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }

    pub fn aggregator(&self) -> RatingAggregator {
        RatingAggregator::new(Arc::clone(&self.store))
    }

    pub fn service(&self) -> ReviewService {
        ReviewService::new(Arc::clone(&self.store))
    }

    pub async fn tutor(&self, name: &str) -> DbId {
        self.store
            .create_tutor(&CreateTutor {
                name: name.to_string(),
                qualifications: "BSc".to_string(),
                bio: None,
                subjects: vec!["math".to_string()],
                price: 30.0,
                availability: None,
                preferences: None,
                profile_picture: None,
            })
            .await
            .unwrap()
            .id
    }

    pub async fn student(&self, name: &str) -> DbId {
        self.store
            .create_student(&CreateStudent {
                name: name.to_string(),
                email: None,
            })
            .await
            .unwrap()
            .id
    }

    pub async fn pending_session(&self, tutor_id: DbId, student_id: DbId) -> DbId {
        self.store
            .create_session(&CreateSession {
                tutor_id,
                student_id,
                session_date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
                start_time: "16:30".to_string(),
                duration_hours: 1.0,
                price: Some(30.0),
            })
            .await
            .unwrap()
            .id
    }

    pub async fn completed_session(&self, tutor_id: DbId, student_id: DbId) -> DbId {
        let id = self.pending_session(tutor_id, student_id).await;
        self.store
            .transition_session_status(id, SessionStatus::Pending, SessionStatus::Accepted, None)
            .await
            .unwrap()
            .unwrap();
        self.store
            .transition_session_status(
                id,
                SessionStatus::Accepted,
                SessionStatus::Completed,
                Some(PaymentStatus::Completed),
            )
            .await
            .unwrap()
            .unwrap();
        id
    }
}
