//! Repository for the `reviews` table.

use sqlx::PgPool;
use tutorhub_core::types::DbId;

use crate::models::review::{NewReview, Review, ReviewFilter, ReviewWithStudent};

/// Column list for reviews queries.
const COLUMNS: &str =
    "id, student_id, tutor_id, session_id, rating, review_text, created_at";

/// Reviews are insert-only; there is no update or delete path.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review, returning the created row.
    ///
    /// A second review for the same (student, session) pair violates
    /// `uq_reviews_student_session`.
    pub async fn create(pool: &PgPool, input: &NewReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (student_id, tutor_id, session_id, rating, review_text)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.student_id)
            .bind(input.tutor_id)
            .bind(input.session_id)
            .bind(input.rating)
            .bind(&input.review_text)
            .fetch_one(pool)
            .await
    }

    /// Find reviews matching every set field of `filter`, oldest first.
    pub async fn find(pool: &PgPool, filter: &ReviewFilter) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE ($1::BIGINT IS NULL OR student_id = $1)
               AND ($2::BIGINT IS NULL OR tutor_id = $2)
               AND ($3::BIGINT IS NULL OR session_id = $3)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(filter.student_id)
            .bind(filter.tutor_id)
            .bind(filter.session_id)
            .fetch_all(pool)
            .await
    }

    /// List a tutor's reviews with the reviewing student's name, newest first.
    pub async fn list_for_tutor_with_student(
        pool: &PgPool,
        tutor_id: DbId,
    ) -> Result<Vec<ReviewWithStudent>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithStudent>(
            "SELECT r.id, r.student_id, r.tutor_id, r.session_id, r.rating, r.review_text,
                    r.created_at, s.name AS student_name
             FROM reviews r
             LEFT JOIN students s ON s.id = r.student_id
             WHERE r.tutor_id = $1
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(tutor_id)
        .fetch_all(pool)
        .await
    }
}
