//! Tutor profile model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::tutor::{deserialize_optional_string_list, deserialize_string_list};
use tutorhub_core::types::{DbId, Timestamp};

/// A row from the `tutors` table.
///
/// `average_rating` and `review_count` are derived from the tutor's reviews
/// and are only written by rating recomputation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tutor {
    pub id: DbId,
    pub name: String,
    pub qualifications: String,
    pub bio: Option<String>,
    pub subjects: Vec<String>,
    pub price: f64,
    pub availability: Vec<String>,
    pub preferences: String,
    pub profile_picture: Option<String>,
    pub average_rating: Option<f64>,
    pub review_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tutor profile.
///
/// `subjects` and `availability` accept a JSON array or a comma-separated
/// string.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTutor {
    pub name: String,
    pub qualifications: String,
    pub bio: Option<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub subjects: Vec<String>,
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_optional_string_list")]
    pub availability: Option<Vec<String>>,
    /// Defaults to `Both` if omitted.
    pub preferences: Option<String>,
    pub profile_picture: Option<String>,
}

/// DTO for updating a tutor profile. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTutor {
    pub name: Option<String>,
    pub qualifications: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_list")]
    pub subjects: Option<Vec<String>>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string_list")]
    pub availability: Option<Vec<String>>,
    pub preferences: Option<String>,
    pub profile_picture: Option<String>,
}
