use serde::Serialize;

/// A record the sweep could not finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordError {
    pub record_id: String,
    pub message: String,
}

/// Summary of one sweep invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Candidates returned by the selection query.
    pub selected: usize,
    /// Candidates handled this call (at most the configured cap).
    pub processed: usize,
    /// Candidates left for the next call because of the cap.
    pub deferred: usize,
    /// Messages the gateway accepted.
    pub messages_sent: usize,
    pub errors: Vec<RecordError>,
}

impl SweepReport {
    pub(crate) fn new(selected: usize, cap: Option<usize>) -> Self {
        let processed = cap.map_or(selected, |cap| selected.min(cap));
        Self {
            selected,
            processed,
            deferred: selected - processed,
            ..Default::default()
        }
    }

    pub(crate) fn fail(&mut self, record_id: &str, error: impl std::fmt::Display) {
        tracing::error!(record_id, error = %error, "sweep record failed");
        self.errors.push(RecordError {
            record_id: record_id.to_string(),
            message: error.to_string(),
        });
    }
}
