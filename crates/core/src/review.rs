//! Review constants and validation functions.
//!
//! Used by the review service before anything is written to the store.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted rating.
pub const MIN_RATING: i16 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i16 = 5;

/// Maximum length for a review comment, in characters.
pub const MAX_REVIEW_TEXT_LENGTH: usize = 2_000;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a submitted rating and narrow it to its stored integer form.
///
/// Ratings arrive as JSON numbers; fractional values such as `3.5` are
/// rejected instead of being rounded.
pub fn validate_rating(rating: f64) -> Result<i16, CoreError> {
    if !rating.is_finite() || rating.fract() != 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "Rating must be a whole number between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }

    if rating < f64::from(MIN_RATING) || rating > f64::from(MAX_RATING) {
        return Err(CoreError::InvalidInput(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }

    Ok(rating as i16)
}

/// Trim a review comment. Blank comments become `None`.
pub fn normalize_review_text(text: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(trimmed) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    if trimmed.chars().count() > MAX_REVIEW_TEXT_LENGTH {
        return Err(CoreError::InvalidInput(format!(
            "Review text exceeds maximum length of {MAX_REVIEW_TEXT_LENGTH} characters"
        )));
    }

    Ok(Some(trimmed.to_string()))
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
