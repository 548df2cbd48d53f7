//! Aggregate rating math.
//!
//! A tutor's rating is a projection of its current review set. It is always
//! derived from the full list of ratings and never maintained as a running
//! average, so repeated recomputation over the same set yields the same
//! value.

use serde::Serialize;

use crate::types::DbId;

/// The derived rating fields written back to a tutor record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Arithmetic mean of all ratings, or `None` when there are no reviews.
    pub average: Option<f64>,
    /// Number of reviews the average was computed from.
    pub count: i64,
}

/// Result of recomputing one tutor's rating, as returned to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TutorRating {
    pub tutor_id: DbId,
    pub average_rating: Option<f64>,
    pub review_count: i64,
}

/// Summarize a full set of ratings.
///
/// An empty set produces `average: None` rather than dividing by zero.
pub fn summarize<I>(ratings: I) -> RatingSummary
where
    I: IntoIterator<Item = i16>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0i64, 0i64), |(sum, count), r| (sum + i64::from(r), count + 1));

    let average = if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    };

    RatingSummary { average, count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_average() {
        let summary = summarize(Vec::<i16>::new());
        assert_eq!(summary.average, None);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn five_and_three_average_exactly_four() {
        let summary = summarize([5, 3]);
        assert_eq!(summary.average, Some(4.0));
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn single_rating_is_its_own_average() {
        assert_eq!(summarize([2]).average, Some(2.0));
    }

    #[test]
    fn mean_of_uneven_set() {
        let summary = summarize([5, 4, 4, 1]);
        let avg = summary.average.unwrap();
        assert!((avg - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn recomputation_is_order_independent() {
        assert_eq!(summarize([1, 2, 5]), summarize([5, 1, 2]));
    }
}
