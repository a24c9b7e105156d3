pub mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::{Client, Collection as MongoCollection, Database};
use std::time::Duration;

use crate::utils::AppResult;

/// Collections known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Products,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Products => "products",
        }
    }
}

/// Document store shared by every request handler.
///
/// Filters are field-equality documents. Documents handed back to callers
/// always carry `_id` as a hex string, never as a driver `ObjectId`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `document` and returns the generated identifier.
    async fn insert(&self, collection: Collection, document: Document) -> AppResult<String>;

    async fn find_one(&self, collection: Collection, filter: Document) -> AppResult<Option<Document>>;

    /// Every matching document; empty when nothing matches.
    async fn find_many(&self, collection: Collection, filter: Document) -> AppResult<Vec<Document>>;

    async fn ping(&self) -> AppResult<()>;

    async fn shutdown(&self) {}
}

/// Replaces a storage-native `_id` with its string form.
pub fn stringify_id(mut document: Document) -> Document {
    if let Some(id) = document.get("_id").map(id_to_string) {
        document.insert("_id", id);
    }
    document
}

pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> AppResult<Self> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    fn collection(&self, collection: Collection) -> MongoCollection<Document> {
        self.db.collection(collection.name())
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn insert(&self, collection: Collection, document: Document) -> AppResult<String> {
        let result = self.collection(collection).insert_one(document).await?;
        Ok(id_to_string(&result.inserted_id))
    }

    async fn find_one(&self, collection: Collection, filter: Document) -> AppResult<Option<Document>> {
        let found = self.collection(collection).find_one(filter).await?;
        Ok(found.map(stringify_id))
    }

    async fn find_many(&self, collection: Collection, filter: Document) -> AppResult<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(stringify_id).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.list_collection_names().await?;
        Ok(())
    }

    async fn shutdown(&self) {
        log::info!("🔌 Closing MongoDB connection pool...");
        self.client.clone().shutdown().await;
    }
}
