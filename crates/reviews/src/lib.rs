//! Session-gated review submission and tutor rating aggregation.
//!
//! [`ReviewService`] validates and persists reviews, then hands off to
//! [`RatingAggregator`], which rederives the tutor's rating from the full
//! review set. Both operate over `Arc<dyn TutoringStore>`.

pub mod aggregator;
pub mod service;

pub use aggregator::RatingAggregator;
pub use service::ReviewService;

#[cfg(test)]
pub(crate) mod test_support;
