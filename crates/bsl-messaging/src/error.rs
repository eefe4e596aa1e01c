use bsl_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),

    #[error("gateway request failed: {0}")]
    Http(String),

    #[error("gateway rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("journal write failed: {0}")]
    Journal(#[from] StorageError),
}
