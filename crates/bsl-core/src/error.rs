use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field: {0}")]
    MissingField(String),
}
