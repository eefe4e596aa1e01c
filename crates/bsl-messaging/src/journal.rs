use bsl_core::collections::MESSAGE_JOURNAL;
use bsl_core::models::message::MessageLogEntry;
use bsl_storage::store::RecordStore;
use bsl_storage::typed;

use crate::error::MessagingError;

/// Append an outbound message to the journal.
pub async fn record(store: &dyn RecordStore, entry: &MessageLogEntry) -> Result<(), MessagingError> {
    typed::insert_as(store, MESSAGE_JOURNAL, entry).await?;
    Ok(())
}

/// Append to the journal, logging instead of failing. Journal writes never
/// undo or block a message that was already sent.
pub async fn record_best_effort(store: &dyn RecordStore, entry: &MessageLogEntry) {
    if let Err(e) = record(store, entry).await {
        tracing::warn!(
            user_id = %entry.user_id,
            tipo = ?entry.tipo,
            error = %e,
            "failed to journal outbound message"
        );
    }
}
