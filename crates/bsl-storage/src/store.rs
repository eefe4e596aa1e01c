use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::error::StorageError;
use crate::query::Query;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Field holding a record's identity within its collection.
pub const ID_FIELD: &str = "_id";

/// A key-value/document store with secondary filtering.
///
/// Records are JSON objects; `update` replaces a record wholesale, so
/// callers that change one field read the record first (see
/// [`crate::typed::patch`]). Methods return boxed futures for dyn
/// compatibility.
pub trait RecordStore: Send + Sync {
    /// All records of `query.collection()` matching every filter.
    fn find<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Vec<Value>, StorageError>>;

    /// Fetch one record by id. `StorageError::NotFound` if absent.
    fn get<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Value, StorageError>>;

    /// Store a new record, assigning an `_id` if it has none.
    /// Returns the record as stored.
    fn insert<'a>(
        &'a self,
        collection: &'a str,
        record: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>>;

    /// Replace an existing record, matched by `_id`.
    /// `StorageError::NotFound` if no such record exists.
    fn update<'a>(
        &'a self,
        collection: &'a str,
        record: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>>;
}

/// The `_id` of a record, if it has a non-empty string one.
pub fn record_id(record: &Value) -> Option<&str> {
    record
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// Ensure `record` is an object carrying an `_id`, generating one if needed.
/// Returns the id.
pub fn assign_id(record: &mut Value) -> Result<String, StorageError> {
    if let Some(id) = record_id(record) {
        return Ok(id.to_string());
    }
    let object = record
        .as_object_mut()
        .ok_or_else(|| StorageError::InvalidRecord("record is not a JSON object".to_string()))?;
    let id = uuid::Uuid::new_v4().to_string();
    object.insert(ID_FIELD.to_string(), Value::String(id.clone()));
    Ok(id)
}
