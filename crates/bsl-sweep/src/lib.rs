//! bsl-sweep
//!
//! Periodic WhatsApp sweeps over upcoming and recent appointments:
//!
//! - [`reminder`]: the main sweep over booked appointments (form
//!   reminders, virtual-visit links, certificate delivery).
//! - [`form_reminder`]: pre-appointment intake-form reminders keyed by
//!   national id.
//! - [`auto_attend`]: marks in-person visits with a given clinician as
//!   attended once they are in the past.
//!
//! Every sweep is re-entrant. Each invocation handles at most a capped
//! slice of its candidates and leaves the rest for the next one; a failed
//! record is reported and skipped, never retried within the same call.

pub mod auto_attend;
pub mod certificate;
pub mod config;
pub mod decision;
pub mod error;
pub mod form_reminder;
pub mod reminder;
pub mod report;

use std::sync::Arc;

use bsl_messaging::gateway::MessagingGateway;
use bsl_storage::store::RecordStore;

use certificate::CertificateIssuer;

/// Collaborators shared by all sweeps.
#[derive(Clone)]
pub struct SweepContext {
    pub store: Arc<dyn RecordStore>,
    pub gateway: Arc<dyn MessagingGateway>,
    pub certificates: Arc<dyn CertificateIssuer>,
}

/// Signed minutes from `now` until `at`. Negative once `at` has passed.
pub fn minutes_until(at: jiff::Timestamp, now: jiff::Timestamp) -> f64 {
    (at.as_millisecond() - now.as_millisecond()) as f64 / 60_000.0
}

/// Absolute bounds `[now - back, now + ahead]` of a selection window.
fn window(
    now: jiff::Timestamp,
    back: jiff::SignedDuration,
    ahead: jiff::SignedDuration,
) -> Result<(jiff::Timestamp, jiff::Timestamp), error::SweepError> {
    Ok((now.checked_sub(back)?, now.checked_add(ahead)?))
}

/// Pause before each record, as a rate limit on the messaging gateway.
async fn pace(delay: std::time::Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
