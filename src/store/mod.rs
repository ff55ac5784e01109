pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use bson::Document;

use crate::error::AppResult;

/// Document store trait for abstracting storage backends
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document into the named collection, returning the
    /// assigned identifier as a string
    async fn create_document(&self, collection: &str, doc: Document) -> AppResult<String>;

    /// Fetch every document in the named collection; empty Vec if the
    /// collection does not exist
    async fn get_documents(&self, collection: &str) -> AppResult<Vec<Document>>;

    /// Insert the given documents only if the collection is empty.
    /// Implementations must guard against concurrent callers both
    /// observing an empty collection and double-inserting.
    /// Returns true if anything was written.
    async fn seed_if_empty(&self, collection: &str, docs: Vec<Document>) -> AppResult<bool>;

    /// Collection names, for diagnostics
    async fn list_collection_names(&self) -> AppResult<Vec<String>>;

    /// Cheap connectivity probe
    async fn ping(&self) -> AppResult<()>;

    /// Human-readable backend name, for diagnostics
    fn backend_name(&self) -> &str;
}
