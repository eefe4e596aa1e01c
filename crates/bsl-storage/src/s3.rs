use aws_sdk_s3::Client;
use serde_json::Value;

use crate::error::StorageError;
use crate::objects::{self, PutRejection};
use crate::query::Query;
use crate::store::{BoxFuture, RecordStore, assign_id, record_id};

/// One JSON object per record at `{collection}/{id}.json`.
///
/// `find` is a full scan of the collection prefix with client-side
/// filtering; collections here are small (one clinic's bookings).
/// `update` re-reads the object's ETag and writes conditionally on it, so
/// a concurrent write landing between the two fails with
/// `StorageError::Conflict`. It does not detect changes made since the
/// caller's own earlier read.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    fn key(collection: &str, id: &str) -> String {
        format!("{collection}/{id}.json")
    }

    async fn read(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<(Value, String), StorageError> {
        let key = Self::key(collection, id);
        let output = objects::get_object(&self.client, &self.bucket, &key)
            .await?
            .ok_or_else(|| StorageError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let record: Value = serde_json::from_slice(&output.body)?;
        Ok((record, output.etag.unwrap_or_default()))
    }
}

impl RecordStore for S3Store {
    fn find<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Vec<Value>, StorageError>> {
        Box::pin(async move {
            let prefix = format!("{}/", query.collection());
            let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

            let mut records = Vec::with_capacity(keys.len());
            for key in &keys {
                // Deleted between list and get; skip it.
                let Some(output) = objects::get_object(&self.client, &self.bucket, key).await?
                else {
                    continue;
                };
                match serde_json::from_slice::<Value>(&output.body) {
                    Ok(record) => records.push(record),
                    Err(e) => tracing::warn!(key = %key, error = %e, "skipping unreadable record"),
                }
            }

            Ok(query.apply(records))
        })
    }

    fn get<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async move { self.read(collection, id).await.map(|(record, _)| record) })
    }

    fn insert<'a>(
        &'a self,
        collection: &'a str,
        mut record: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async move {
            let id = assign_id(&mut record)?;
            let body = serde_json::to_vec(&record)?;
            let key = Self::key(collection, &id);
            match objects::put_object_if_absent(&self.client, &self.bucket, &key, body).await {
                Ok(_) => Ok(record),
                Err(PutRejection::Precondition) => Err(StorageError::AlreadyExists {
                    collection: collection.to_string(),
                    id,
                }),
                Err(PutRejection::Other(e)) => Err(e),
            }
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
            let (_, etag) = self.read(collection, &id).await?;
            let body = serde_json::to_vec(&record)?;
            let key = Self::key(collection, &id);
            match objects::put_object_if_match(&self.client, &self.bucket, &key, body, &etag).await
            {
                Ok(_) => Ok(record),
                Err(PutRejection::Precondition) => Err(StorageError::Conflict {
                    collection: collection.to_string(),
                    id,
                }),
                Err(PutRejection::Other(e)) => Err(e),
            }
        })
    }
}
