use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use bson::Document;

use portfolio_api::build_router;
use portfolio_api::config::Config;
use portfolio_api::error::{AppError, AppResult};
use portfolio_api::state::AppState;
use portfolio_api::store::{DocumentStore, MemoryStore};

/// Test configuration
pub fn test_config() -> Config {
    Config {
        database_url: Some("mongodb://localhost:27017".to_string()),
        database_name: "portfolio_test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Test application wrapper backed by the in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::with_store(test_config(), store.clone());

        let router = build_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, store }
    }

    /// Create a test application whose store rejects every operation
    pub fn unreachable() -> TestServer {
        let state = AppState::with_store(test_config(), Arc::new(UnreachableStore));
        TestServer::new(build_router(state)).expect("Failed to create test server")
    }
}

/// Store whose every operation fails, for degraded-backend tests
pub struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn create_document(&self, _collection: &str, _doc: Document) -> AppResult<String> {
        Err(AppError::Unavailable)
    }

    async fn get_documents(&self, _collection: &str) -> AppResult<Vec<Document>> {
        Err(AppError::Unavailable)
    }

    async fn seed_if_empty(&self, _collection: &str, _docs: Vec<Document>) -> AppResult<bool> {
        Err(AppError::Unavailable)
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        Err(AppError::Unavailable)
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::Unavailable)
    }

    fn backend_name(&self) -> &str {
        "unreachable"
    }
}
