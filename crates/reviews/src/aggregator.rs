//! Tutor rating recomputation.

use std::sync::Arc;

use tutorhub_core::error::CoreError;
use tutorhub_core::rating::{self, RatingSummary};
use tutorhub_core::types::DbId;
use tutorhub_db::models::review::ReviewFilter;
use tutorhub_db::store::TutoringStore;

/// Rederives a tutor's `average_rating` and `review_count` from every
/// review currently referencing the tutor.
///
/// Holds no state of its own. Running it twice over an unchanged review set
/// writes the same values, and any run repairs a rating left stale by an
/// earlier interrupted or out-of-order write.
#[derive(Clone)]
pub struct RatingAggregator {
    store: Arc<dyn TutoringStore>,
}

impl RatingAggregator {
    pub fn new(store: Arc<dyn TutoringStore>) -> Self {
        Self { store }
    }

    /// Recompute and persist the tutor's rating.
    ///
    /// Fails with [`CoreError::NotFound`] and writes nothing if the tutor
    /// does not exist. With zero reviews the average is cleared to `None`.
    pub async fn recompute(&self, tutor_id: DbId) -> Result<RatingSummary, CoreError> {
        self.store
            .find_tutor_by_id(tutor_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Tutor",
                id: tutor_id,
            })?;

        let reviews = self
            .store
            .find_reviews(&ReviewFilter::for_tutor(tutor_id))
            .await?;
        let summary = rating::summarize(reviews.iter().map(|r| r.rating));

        self.store.update_tutor_rating(tutor_id, summary).await?;

        tracing::debug!(
            tutor_id,
            review_count = summary.count,
            average_rating = ?summary.average,
            "Tutor rating recomputed"
        );

        Ok(summary)
    }
}
