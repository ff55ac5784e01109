use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database};

use crate::error::AppResult;
use crate::store::DocumentStore;

/// MongoDB-backed document store
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect and verify the server is reachable. Connection failures
    /// are a startup error, not something handlers re-check per request.
    pub async fn connect(url: &str, database: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }

    fn id_to_string(id: Bson) -> String {
        match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(&self, collection: &str, mut doc: Document) -> AppResult<String> {
        if !doc.contains_key("created_at") {
            doc.insert("created_at", bson::DateTime::now());
        }

        let result = self.collection(collection).insert_one(doc).await?;
        Ok(Self::id_to_string(result.inserted_id))
    }

    async fn get_documents(&self, collection: &str) -> AppResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        let docs = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn seed_if_empty(&self, collection: &str, docs: Vec<Document>) -> AppResult<bool> {
        let coll = self.collection(collection);

        if coll.count_documents(doc! {}).await? > 0 {
            return Ok(false);
        }

        // Guarded upserts keyed on title: two racing first reads can both
        // pass the count check, but neither can insert a title twice.
        let mut inserted = false;
        for mut doc in docs {
            if !doc.contains_key("created_at") {
                doc.insert("created_at", bson::DateTime::now());
            }
            let filter = doc! { "title": doc.get_str("title").unwrap_or_default() };
            let result = coll
                .update_one(filter, doc! { "$setOnInsert": doc })
                .upsert(true)
                .await?;
            inserted |= result.upserted_id.is_some();
        }

        Ok(inserted)
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        let names = self.db.list_collection_names().await?;
        Ok(names)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "MongoDB"
    }
}
