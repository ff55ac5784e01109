use std::sync::Arc;

use crate::config::Config;
use crate::store::{DocumentStore, MongoStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Injected document store; handlers never reach for a global handle
    pub store: Arc<dyn DocumentStore>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState by connecting to the document store.
    /// A reachable store is a startup precondition; routes do not
    /// re-check for an absent handle.
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let url = config
            .require_database_url()
            .map_err(|e| AppStateError::Config(e.to_string()))?;

        let store = MongoStore::connect(url, &config.database_name)
            .await
            .map_err(|e| AppStateError::Mongo(e.to_string()))?;

        Ok(Self {
            store: Arc::new(store),
            config,
        })
    }

    /// Create AppState with a custom store (for testing)
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self { store, config }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("MongoDB connection error: {0}")]
    Mongo(String),
}
