use bsl_messaging::error::MessagingError;
use bsl_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// The candidate query failed. Nothing was sent or written.
    #[error("candidate selection failed: {0}")]
    Selection(#[source] StorageError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("messaging error: {0}")]
    Messaging(#[from] MessagingError),

    #[error("sweep window out of range: {0}")]
    Window(#[from] jiff::Error),

    #[error("certificate delivery failed: {0}")]
    Certificate(String),
}
