//! Review submission and listing.

use std::sync::Arc;

use tutorhub_core::error::CoreError;
use tutorhub_core::review::{normalize_review_text, validate_rating};
use tutorhub_core::session::SessionStatus;
use tutorhub_core::types::DbId;
use tutorhub_db::models::review::{
    NewReview, Review, ReviewFilter, ReviewWithStudent, SubmitReview,
};
use tutorhub_db::store::{StoreError, TutoringStore, REVIEW_PAIR_CONSTRAINT};

use crate::aggregator::RatingAggregator;

/// Validates, persists, and lists reviews.
///
/// A review is accepted only for a `Completed` session, and only once per
/// (student, session) pair. Every accepted review triggers a synchronous
/// rating recompute for its tutor before `submit` returns.
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn TutoringStore>,
    aggregator: RatingAggregator,
}

impl ReviewService {
    pub fn new(store: Arc<dyn TutoringStore>) -> Self {
        let aggregator = RatingAggregator::new(Arc::clone(&store));
        Self { store, aggregator }
    }

    pub fn aggregator(&self) -> &RatingAggregator {
        &self.aggregator
    }

    /// Submit a review.
    ///
    /// Checks run in order and stop at the first failure:
    ///
    /// 1. Input shape: `InvalidInput` for a missing id, a rating that is not
    ///    a whole number in 1..=5, or an over-long comment.
    /// 2. Session: `NotFound` if absent, `SessionNotEligible` unless
    ///    `Completed`, `InvalidInput` if it belongs to another tutor or
    ///    student.
    /// 3. Pair: `DuplicateReview` if this student already reviewed it.
    ///
    /// Nothing is written until all checks pass. The insert and the rating
    /// update are separate writes; if the recompute fails the review stays.
    pub async fn submit(&self, input: SubmitReview) -> Result<Review, CoreError> {
        let new_review = validate_submission(&input)?;

        let session = self
            .store
            .find_session_by_id(new_review.session_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Session",
                id: new_review.session_id,
            })?;

        let reviewable = session
            .status
            .parse::<SessionStatus>()
            .is_ok_and(SessionStatus::is_reviewable);
        if !reviewable {
            tracing::warn!(
                session_id = session.id,
                status = %session.status,
                "Review rejected: session not completed"
            );
            return Err(CoreError::SessionNotEligible {
                session_id: session.id,
                status: session.status,
            });
        }

        if session.tutor_id != new_review.tutor_id {
            return Err(CoreError::InvalidInput(format!(
                "Session {} does not belong to tutor {}",
                session.id, new_review.tutor_id
            )));
        }
        if session.student_id != new_review.student_id {
            return Err(CoreError::InvalidInput(format!(
                "Session {} does not belong to student {}",
                session.id, new_review.student_id
            )));
        }

        let duplicate = CoreError::DuplicateReview {
            student_id: new_review.student_id,
            session_id: new_review.session_id,
        };

        let existing = self
            .store
            .find_reviews(&ReviewFilter::for_student_session(
                new_review.student_id,
                new_review.session_id,
            ))
            .await?;
        if !existing.is_empty() {
            tracing::warn!(
                student_id = new_review.student_id,
                session_id = new_review.session_id,
                "Review rejected: duplicate"
            );
            return Err(duplicate);
        }

        // A concurrent submission for the same pair can pass the check above;
        // the store's uniqueness guard catches it here.
        let review = match self.store.insert_review(&new_review).await {
            Ok(review) => review,
            Err(StoreError::UniqueViolation(constraint))
                if constraint == REVIEW_PAIR_CONSTRAINT =>
            {
                return Err(duplicate);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            review_id = review.id,
            tutor_id = review.tutor_id,
            session_id = review.session_id,
            rating = review.rating,
            "Review submitted"
        );

        self.aggregator.recompute(review.tutor_id).await?;

        Ok(review)
    }

    /// All reviews for a tutor with student display names, newest first.
    ///
    /// An unknown tutor yields an empty list.
    pub async fn list_by_tutor(&self, tutor_id: DbId) -> Result<Vec<ReviewWithStudent>, CoreError> {
        Ok(self.store.list_reviews_for_tutor(tutor_id).await?)
    }
}

/// Turn a raw submission into insertable fields, rating first.
fn validate_submission(input: &SubmitReview) -> Result<NewReview, CoreError> {
    let rating = input
        .rating
        .ok_or_else(|| CoreError::InvalidInput("rating is required".to_string()))
        .and_then(validate_rating)?;

    let required = |value: Option<DbId>, field: &str| {
        value.ok_or_else(|| CoreError::InvalidInput(format!("{field} is required")))
    };

    Ok(NewReview {
        student_id: required(input.student_id, "student_id")?,
        tutor_id: required(input.tutor_id, "tutor_id")?,
        session_id: required(input.session_id, "session_id")?,
        rating,
        review_text: normalize_review_text(input.review_text.as_deref())?,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use tutorhub_core::rating::RatingSummary;

    use super::*;
    use crate::test_support::Fixture;

    fn submission(student: DbId, tutor: DbId, session: DbId, rating: f64) -> SubmitReview {
        SubmitReview {
            student_id: Some(student),
            tutor_id: Some(tutor),
            session_id: Some(session),
            rating: Some(rating),
            review_text: Some("great".to_string()),
        }
    }

    async fn review_count(fx: &Fixture) -> usize {
        fx.store
            .find_reviews(&ReviewFilter::default())
            .await
            .unwrap()
            .len()
    }

    #[tokio::test]
    async fn submit_persists_review_and_updates_rating() {
        let fx = Fixture::new();
        let tutor = fx.tutor("T1").await;
        let student = fx.student("A").await;
        let session = fx.completed_session(tutor, student).await;

        let review = fx
            .service()
            .submit(submission(student, tutor, session, 5.0))
            .await
            .unwrap();

        assert_eq!(review.rating, 5);
        assert_eq!(review.review_text.as_deref(), Some("great"));
        let stored = fx.store.find_tutor_by_id(tutor).await.unwrap().unwrap();
        assert_eq!(stored.average_rating, Some(5.0));
        assert_eq!(stored.review_count, 1);
    }

    #[tokio::test]
    async fn scenario_duplicate_and_pending_session() {
        let fx = Fixture::new();
        let service = fx.service();
        let t1 = fx.tutor("T1").await;
        let a = fx.student("A").await;
        let b = fx.student("B").await;
        let s1 = fx.completed_session(t1, a).await;

        service.submit(submission(a, t1, s1, 5.0)).await.unwrap();

        let mut again = submission(a, t1, s1, 3.0);
        again.review_text = Some("again".to_string());
        let err = service.submit(again).await.unwrap_err();
        assert_matches!(err, CoreError::DuplicateReview { student_id, session_id }
            if student_id == a && session_id == s1);

        let stored = fx.store.find_tutor_by_id(t1).await.unwrap().unwrap();
        assert_eq!(stored.average_rating, Some(5.0));
        assert_eq!(review_count(&fx).await, 1);

        let s2 = fx.pending_session(t1, b).await;
        let err = service.submit(submission(b, t1, s2, 4.0)).await.unwrap_err();
        assert_matches!(err, CoreError::SessionNotEligible { .. });
    }

    #[tokio::test]
    async fn non_completed_sessions_are_never_eligible() {
        let fx = Fixture::new();
        let tutor = fx.tutor("T1").await;
        let student = fx.student("A").await;
        let session = fx.pending_session(tutor, student).await;

        for rating in 1..=5 {
            let err = fx
                .service()
                .submit(submission(student, tutor, session, f64::from(rating)))
                .await
                .unwrap_err();
            assert_matches!(err, CoreError::SessionNotEligible { .. });
        }

        // Accepted is still not enough.
        fx.store
            .transition_session_status(session, SessionStatus::Pending, SessionStatus::Accepted, None)
            .await
            .unwrap();
        let err = fx
            .service()
            .submit(submission(student, tutor, session, 4.0))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::SessionNotEligible { status, .. } if status == "Accepted");
        assert_eq!(review_count(&fx).await, 0);
    }

    #[tokio::test]
    async fn invalid_ratings_fail_before_any_lookup() {
        let fx = Fixture::new();

        // Session 999 does not exist; rating validation must win.
        for rating in [0.0, 6.0, 3.5, -2.0] {
            let err = fx
                .service()
                .submit(submission(1, 2, 999, rating))
                .await
                .unwrap_err();
            assert_matches!(err, CoreError::InvalidInput(_));
        }
        assert_eq!(review_count(&fx).await, 0);
    }

    #[tokio::test]
    async fn missing_fields_are_invalid_input() {
        let fx = Fixture::new();
        let err = fx
            .service()
            .submit(SubmitReview {
                rating: Some(4.0),
                ..SubmitReview::default()
            })
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidInput(msg) if msg.contains("student_id"));

        let err = fx
            .service()
            .submit(SubmitReview::default())
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidInput(msg) if msg.contains("rating"));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let fx = Fixture::new();
        let err = fx
            .service()
            .submit(submission(1, 2, 77, 4.0))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Session", id: 77 });
    }

    #[tokio::test]
    async fn session_of_another_student_is_rejected() {
        let fx = Fixture::new();
        let tutor = fx.tutor("T1").await;
        let owner = fx.student("A").await;
        let intruder = fx.student("B").await;
        let session = fx.completed_session(tutor, owner).await;

        let err = fx
            .service()
            .submit(submission(intruder, tutor, session, 1.0))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidInput(_));
        assert_eq!(review_count(&fx).await, 0);
    }

    #[tokio::test]
    async fn missing_tutor_fails_recompute_but_keeps_review() {
        let fx = Fixture::new();
        let student = fx.student("A").await;
        // The memory store does not enforce references, so the session can
        // point at a tutor that was never created.
        let session = fx.completed_session(555, student).await;

        let err = fx
            .service()
            .submit(submission(student, 555, session, 4.0))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Tutor", id: 555 });
        assert_eq!(review_count(&fx).await, 1);
    }

    #[tokio::test]
    async fn rating_tracks_mean_of_all_reviews() {
        let fx = Fixture::new();
        let service = fx.service();
        let tutor = fx.tutor("T1").await;

        let mut ratings = Vec::new();
        for (i, rating) in [5, 3, 4, 1, 2, 5].into_iter().enumerate() {
            let student = fx.student(&format!("S{i}")).await;
            let session = fx.completed_session(tutor, student).await;
            service
                .submit(submission(student, tutor, session, f64::from(rating)))
                .await
                .unwrap();
            ratings.push(rating);

            let expected = ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / ratings.len() as f64;
            let stored = fx.store.find_tutor_by_id(tutor).await.unwrap().unwrap();
            let actual = stored.average_rating.unwrap();
            assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
            assert_eq!(stored.review_count, ratings.len() as i64);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_submissions_converge_to_exact_mean() {
        let fx = Fixture::new();
        let service = fx.service();
        let tutor = fx.tutor("T1").await;

        let mut requests = Vec::new();
        for i in 0..20 {
            let student = fx.student(&format!("S{i}")).await;
            let session = fx.completed_session(tutor, student).await;
            requests.push(submission(student, tutor, session, f64::from(i % 5 + 1)));
        }

        let handles: Vec<_> = requests
            .into_iter()
            .map(|req| {
                let service = service.clone();
                tokio::spawn(async move { service.submit(req).await })
            })
            .collect();
        for result in futures::future::join_all(handles).await {
            result.unwrap().unwrap();
        }

        // Racing recomputes may leave any snapshot behind; one more run
        // is enough to land on the exact mean.
        let summary = service.aggregator().recompute(tutor).await.unwrap();
        assert_eq!(summary, RatingSummary { average: Some(3.0), count: 20 });
    }

    #[tokio::test]
    async fn concurrent_duplicates_persist_exactly_one() {
        let fx = Fixture::new();
        let service = fx.service();
        let tutor = fx.tutor("T1").await;
        let student = fx.student("A").await;
        let session = fx.completed_session(tutor, student).await;

        let attempts = (0..8).map(|_| {
            let service = service.clone();
            let req = submission(student, tutor, session, 4.0);
            async move { service.submit(req).await }
        });
        let results = futures::future::join_all(attempts).await;

        let ok = results.iter().filter(|r| r.is_ok()).count();
        let dup = results
            .iter()
            .filter(|r| matches!(r, Err(CoreError::DuplicateReview { .. })))
            .count();
        assert_eq!(ok, 1);
        assert_eq!(dup, 7);
        assert_eq!(review_count(&fx).await, 1);
    }

    #[tokio::test]
    async fn list_by_tutor_is_empty_for_unreviewed_tutor() {
        let fx = Fixture::new();
        let tutor = fx.tutor("T1").await;
        assert!(fx.service().list_by_tutor(tutor).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_by_tutor_includes_student_names() {
        let fx = Fixture::new();
        let service = fx.service();
        let tutor = fx.tutor("T1").await;
        let student = fx.student("Grace").await;
        let session = fx.completed_session(tutor, student).await;
        service
            .submit(submission(student, tutor, session, 5.0))
            .await
            .unwrap();

        let listed = service.list_by_tutor(tutor).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].student_name.as_deref(), Some("Grace"));
        assert_eq!(listed[0].review.rating, 5);
    }
}
