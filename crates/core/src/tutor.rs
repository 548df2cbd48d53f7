//! Tutor profile constants and validation functions.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Maximum length for a tutor's display name.
pub const MAX_TUTOR_NAME_LENGTH: usize = 200;

/// Maximum length for a tutor bio.
pub const MAX_BIO_LENGTH: usize = 5_000;

pub const PREFERENCE_ONLINE: &str = "Online";
pub const PREFERENCE_IN_PERSON: &str = "In-Person";
pub const PREFERENCE_BOTH: &str = "Both";

/// All valid teaching preference values.
pub const VALID_PREFERENCES: &[&str] = &[PREFERENCE_ONLINE, PREFERENCE_IN_PERSON, PREFERENCE_BOTH];

/// A list field that clients may send either as a JSON array or as a
/// comma-separated string (`"math, physics"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StringListInput {
    List(Vec<String>),
    Csv(String),
}

impl StringListInput {
    /// Flatten into trimmed, non-empty entries.
    pub fn into_vec(self) -> Vec<String> {
        let items: Vec<String> = match self {
            Self::List(items) => items,
            Self::Csv(raw) => raw.split(',').map(str::to_string).collect(),
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// `deserialize_with` adapter for required list fields.
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    StringListInput::deserialize(deserializer).map(StringListInput::into_vec)
}

/// `deserialize_with` adapter for optional list fields. Pair with
/// `#[serde(default)]` so an absent field stays `None`.
pub fn deserialize_optional_string_list<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringListInput>::deserialize(deserializer)
        .map(|input| input.map(StringListInput::into_vec))
}

pub fn validate_tutor_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(
            "Tutor name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_TUTOR_NAME_LENGTH {
        return Err(CoreError::InvalidInput(format!(
            "Tutor name exceeds maximum length of {MAX_TUTOR_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_qualifications(qualifications: &str) -> Result<(), CoreError> {
    if qualifications.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "Qualifications must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_bio(bio: &str) -> Result<(), CoreError> {
    if bio.chars().count() > MAX_BIO_LENGTH {
        return Err(CoreError::InvalidInput(format!(
            "Bio exceeds maximum length of {MAX_BIO_LENGTH} characters"
        )));
    }
    Ok(())
}

/// A tutor must teach at least one subject.
pub fn validate_subjects(subjects: &[String]) -> Result<(), CoreError> {
    if subjects.is_empty() {
        return Err(CoreError::InvalidInput(
            "At least one subject is required".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_hourly_price(price: f64) -> Result<(), CoreError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "Hourly price must be zero or positive, got {price}"
        )))
    }
}

pub fn validate_preference(preference: &str) -> Result<(), CoreError> {
    if VALID_PREFERENCES.contains(&preference) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "Invalid teaching preference '{preference}'. Must be one of: {}",
            VALID_PREFERENCES.join(", ")
        )))
    }
}
