//! Review model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::types::{DbId, Timestamp};

/// A row from the `reviews` table. Reviews are immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub student_id: DbId,
    pub tutor_id: DbId,
    pub session_id: DbId,
    pub rating: i16,
    pub review_text: Option<String>,
    pub created_at: Timestamp,
}

/// A review joined with the reviewing student's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithStudent {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    /// `None` when the student record no longer resolves.
    pub student_name: Option<String>,
}

/// Raw request body for `POST /reviews`.
///
/// Every field is optional so that missing values surface as a typed
/// validation error rather than a JSON rejection. `rating` is a float so
/// fractional input can be rejected explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitReview {
    pub student_id: Option<DbId>,
    pub tutor_id: Option<DbId>,
    pub session_id: Option<DbId>,
    pub rating: Option<f64>,
    pub review_text: Option<String>,
}

/// Validated fields for inserting a review. Identity and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub student_id: DbId,
    pub tutor_id: DbId,
    pub session_id: DbId,
    pub rating: i16,
    pub review_text: Option<String>,
}

/// Filter for [`crate::store::TutoringStore::find_reviews`]. `None` fields
/// match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewFilter {
    pub student_id: Option<DbId>,
    pub tutor_id: Option<DbId>,
    pub session_id: Option<DbId>,
}

impl ReviewFilter {
    pub fn for_tutor(tutor_id: DbId) -> Self {
        Self {
            tutor_id: Some(tutor_id),
            ..Self::default()
        }
    }

    pub fn for_student_session(student_id: DbId, session_id: DbId) -> Self {
        Self {
            student_id: Some(student_id),
            session_id: Some(session_id),
            ..Self::default()
        }
    }

    /// Whether `review` satisfies every set field of the filter.
    pub fn matches(&self, review: &Review) -> bool {
        self.student_id.map_or(true, |id| id == review.student_id)
            && self.tutor_id.map_or(true, |id| id == review.tutor_id)
            && self.session_id.map_or(true, |id| id == review.session_id)
    }
}
