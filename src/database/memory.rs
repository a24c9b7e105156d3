use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{stringify_id, Collection, DocumentStore};
use crate::utils::AppResult;

/// In-memory `DocumentStore` (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<Document>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, collection: Collection, mut document: Document) -> AppResult<String> {
        let id = ObjectId::new();
        document.insert("_id", id);

        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().push(document);

        Ok(id.to_hex())
    }

    async fn find_one(&self, collection: Collection, filter: Document) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        let found = collections
            .get(&collection)
            .and_then(|documents| documents.iter().find(|d| matches(d, &filter)))
            .cloned();
        Ok(found.map(stringify_id))
    }

    async fn find_many(&self, collection: Collection, filter: Document) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let found = collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .map(stringify_id)
                    .collect()
            })
            .unwrap_or_default();
        Ok(found)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_then_find_one() {
        let store = InMemoryStore::new();
        let id = store
            .insert(Collection::Users, doc! { "email": "a@b.c", "role": "user" })
            .await
            .unwrap();

        let found = store
            .find_one(Collection::Users, doc! { "email": "a@b.c" })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("_id").unwrap(), id);
        assert_eq!(found.get_str("role").unwrap(), "user");
    }

    #[tokio::test]
    async fn test_find_one_absent() {
        let store = InMemoryStore::new();
        store
            .insert(Collection::Users, doc! { "email": "a@b.c" })
            .await
            .unwrap();

        let found = store
            .find_one(Collection::Users, doc! { "email": "x@y.z" })
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_collections_are_separate() {
        let store = InMemoryStore::new();
        store
            .insert(Collection::Users, doc! { "email": "a@b.c" })
            .await
            .unwrap();

        let products = store
            .find_many(Collection::Products, doc! {})
            .await
            .unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_find_many_filters_by_equality() {
        let store = InMemoryStore::new();
        for (name, price) in [("a", "1"), ("b", "2"), ("c", "1")] {
            store
                .insert(Collection::Products, doc! { "product_name": name, "product_price": price })
                .await
                .unwrap();
        }

        let all = store.find_many(Collection::Products, doc! {}).await.unwrap();
        assert_eq!(all.len(), 3);

        let cheap = store
            .find_many(Collection::Products, doc! { "product_price": "1" })
            .await
            .unwrap();
        let names: Vec<&str> = cheap.iter().map(|d| d.get_str("product_name").unwrap()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
