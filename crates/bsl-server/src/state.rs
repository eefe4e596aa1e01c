use std::sync::Arc;

use bsl_messaging::alerts::AlertDirectory;
use bsl_messaging::gateway::MessagingGateway;
use bsl_storage::store::RecordStore;
use bsl_sweep::SweepContext;
use bsl_sweep::config::{AutoAttendConfig, FormReminderConfig, ReminderSweepConfig};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sweeps: SweepContext,
    pub alerts: Arc<AlertDirectory>,
    pub reminders: Arc<ReminderSweepConfig>,
    pub form_reminders: Arc<FormReminderConfig>,
    pub auto_attend: Arc<AutoAttendConfig>,
}

impl AppState {
    pub fn store(&self) -> &dyn RecordStore {
        self.sweeps.store.as_ref()
    }

    pub fn gateway(&self) -> &dyn MessagingGateway {
        self.sweeps.gateway.as_ref()
    }
}
