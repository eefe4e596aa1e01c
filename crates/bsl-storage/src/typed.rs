use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StorageError;
use crate::query::Query;
use crate::store::RecordStore;

/// Run a query and deserialize every match into `T`.
///
/// Records that do not fit `T` are logged and skipped, so one malformed
/// booking never hides the rest of the collection.
pub async fn find_as<T: DeserializeOwned>(
    store: &dyn RecordStore,
    query: &Query,
) -> Result<Vec<T>, StorageError> {
    let records = store.find(query).await?;
    let mut typed = Vec::with_capacity(records.len());
    for record in records {
        let id = record
            .get(crate::store::ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        match serde_json::from_value::<T>(record) {
            Ok(value) => typed.push(value),
            Err(e) => tracing::warn!(
                collection = query.collection(),
                id = %id,
                error = %e,
                "skipping record that does not match its model"
            ),
        }
    }
    Ok(typed)
}

/// Whether any record matches the query.
pub async fn exists(store: &dyn RecordStore, query: &Query) -> Result<bool, StorageError> {
    Ok(!store.find(&query.clone().limit(1)).await?.is_empty())
}

/// Serialize `value` and insert it as a new record.
pub async fn insert_as<T: Serialize>(
    store: &dyn RecordStore,
    collection: &str,
    value: &T,
) -> Result<Value, StorageError> {
    store.insert(collection, serde_json::to_value(value)?).await
}

/// Read a record, overwrite the top-level fields present in `changes`, and
/// write it back. Fields not named in `changes` are preserved.
pub async fn patch(
    store: &dyn RecordStore,
    collection: &str,
    id: &str,
    changes: Value,
) -> Result<Value, StorageError> {
    let Value::Object(changes) = changes else {
        return Err(StorageError::InvalidRecord(
            "patch requires a JSON object".to_string(),
        ));
    };
    let mut record = store.get(collection, id).await?;
    let object = record
        .as_object_mut()
        .ok_or_else(|| StorageError::InvalidRecord(format!("{collection}/{id} is not an object")))?;
    for (field, value) in changes {
        object.insert(field, value);
    }
    store.update(collection, record).await
}

/// Update the first record matching `query` with `changes`, or insert
/// `changes` as a new record when none matches. Returns the stored record.
pub async fn upsert(
    store: &dyn RecordStore,
    query: &Query,
    changes: Value,
) -> Result<Value, StorageError> {
    let existing = store.find(&query.clone().limit(1)).await?;
    match existing
        .first()
        .and_then(|r| crate::store::record_id(r))
        .map(str::to_string)
    {
        Some(id) => patch(store, query.collection(), &id, changes).await,
        None => store.insert(query.collection(), changes).await,
    }
}
