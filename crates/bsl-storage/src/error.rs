use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("record already exists: {collection}/{id}")]
    AlreadyExists { collection: String, id: String },

    #[error("record was modified concurrently: {collection}/{id}")]
    Conflict { collection: String, id: String },

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
