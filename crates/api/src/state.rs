use std::sync::Arc;

use tutorhub_db::store::TutoringStore;
use tutorhub_reviews::ReviewService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend (Postgres in production, in-memory in tests).
    pub store: Arc<dyn TutoringStore>,
    /// Review submission and rating aggregation over `store`.
    pub reviews: ReviewService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn TutoringStore>, config: ServerConfig) -> Self {
        let reviews = ReviewService::new(Arc::clone(&store));
        Self {
            store,
            reviews,
            config: Arc::new(config),
        }
    }
}
