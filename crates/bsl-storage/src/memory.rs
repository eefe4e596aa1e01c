use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::query::Query;
use crate::store::{BoxFuture, RecordStore, assign_id, record_id};

/// Process-local store. Used when no bucket is configured and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

impl RecordStore for MemoryStore {
    fn find<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Vec<Value>, StorageError>> {
        Box::pin(async move {
            let collections = self.collections.read().await;
            let records = collections
                .get(query.collection())
                .map(|c| c.values().cloned().collect::<Vec<_>>())
                .unwrap_or_default();
            Ok(query.apply(records))
        })
    }

    fn get<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async move {
            self.collections
                .read()
                .await
                .get(collection)
                .and_then(|c| c.get(id))
                .cloned()
                .ok_or_else(|| StorageError::NotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })
        })
    }

    fn insert<'a>(
        &'a self,
        collection: &'a str,
        mut record: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async move {
            let id = assign_id(&mut record)?;
            let mut collections = self.collections.write().await;
            let records = collections.entry(collection.to_string()).or_default();
            if records.contains_key(&id) {
                return Err(StorageError::AlreadyExists {
                    collection: collection.to_string(),
                    id,
                });
            }
            records.insert(id, record.clone());
            Ok(record)
        })
    }

    fn update<'a>(
        &'a self,
        collection: &'a str,
        record: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async move {
            let id = record_id(&record)
                .ok_or_else(|| StorageError::InvalidRecord("update requires an _id".to_string()))?
                .to_string();
            let mut collections = self.collections.write().await;
            let slot = collections
                .get_mut(collection)
                .and_then(|c| c.get_mut(&id))
                .ok_or_else(|| StorageError::NotFound {
                    collection: collection.to_string(),
                    id: id.clone(),
                })?;
            *slot = record.clone();
            Ok(record)
        })
    }
}
