//! Repository for the `tutors` table.

use sqlx::PgPool;
use tutorhub_core::rating::RatingSummary;
use tutorhub_core::tutor::PREFERENCE_BOTH;
use tutorhub_core::types::DbId;

use crate::models::tutor::{CreateTutor, Tutor, UpdateTutor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, qualifications, bio, subjects, price, availability, \
    preferences, profile_picture, average_rating, review_count, created_at, updated_at";

/// Provides CRUD operations for tutor profiles.
pub struct TutorRepo;

impl TutorRepo {
    /// Insert a new tutor, returning the created row.
    ///
    /// New tutors have no rating until their first review is recomputed.
    pub async fn create(pool: &PgPool, input: &CreateTutor) -> Result<Tutor, sqlx::Error> {
        let query = format!(
            "INSERT INTO tutors
                (name, qualifications, bio, subjects, price, availability,
                 preferences, profile_picture)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, '{PREFERENCE_BOTH}'), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutor>(&query)
            .bind(&input.name)
            .bind(&input.qualifications)
            .bind(&input.bio)
            .bind(&input.subjects)
            .bind(input.price)
            .bind(input.availability.clone().unwrap_or_default())
            .bind(&input.preferences)
            .bind(&input.profile_picture)
            .fetch_one(pool)
            .await
    }

    /// Find a tutor by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tutor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutors WHERE id = $1");
        sqlx::query_as::<_, Tutor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tutors, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tutor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutors ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Tutor>(&query).fetch_all(pool).await
    }

    /// Update profile fields. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTutor,
    ) -> Result<Option<Tutor>, sqlx::Error> {
        let query = format!(
            "UPDATE tutors SET
                name = COALESCE($2, name),
                qualifications = COALESCE($3, qualifications),
                bio = COALESCE($4, bio),
                subjects = COALESCE($5, subjects),
                price = COALESCE($6, price),
                availability = COALESCE($7, availability),
                preferences = COALESCE($8, preferences),
                profile_picture = COALESCE($9, profile_picture)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.qualifications)
            .bind(&input.bio)
            .bind(&input.subjects)
            .bind(input.price)
            .bind(&input.availability)
            .bind(&input.preferences)
            .bind(&input.profile_picture)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the derived rating fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_rating(
        pool: &PgPool,
        id: DbId,
        summary: RatingSummary,
    ) -> Result<Option<Tutor>, sqlx::Error> {
        let query = format!(
            "UPDATE tutors SET average_rating = $2, review_count = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutor>(&query)
            .bind(id)
            .bind(summary.average)
            .bind(summary.count)
            .fetch_optional(pool)
            .await
    }
}
