use std::env;
use std::time::Duration;

use bsl_messaging::alerts::AlertDirectory;
use bsl_messaging::whapi;
use bsl_sweep::config::{AutoAttendConfig, FormReminderConfig, ReminderSweepConfig};
use eyre::WrapErr;

/// Where records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local; lost on restart. Local runs only.
    Memory,
    S3,
}

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub store: StoreBackend,
    pub bucket: String,
    pub whapi_url: String,
    pub whapi_token: String,
    pub certificate_url: String,
    pub alert_numbers: AlertDirectory,
    pub reminders: ReminderSweepConfig,
    pub form_reminders: FormReminderConfig,
    pub auto_attend: AutoAttendConfig,
}

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BUCKET: &str = "bsl";
const DEFAULT_CERTIFICATE_URL: &str = "http://127.0.0.1:8081/certificados";

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset and empty variables
    /// take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse().wrap_err_with(|| format!("invalid PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let store = match var("BSL_STORE").as_deref() {
            None | Some("memory") => StoreBackend::Memory,
            Some("s3") => StoreBackend::S3,
            Some(other) => eyre::bail!("invalid BSL_STORE: {other} (expected memory or s3)"),
        };

        let alert_numbers = match var("BSL_ALERT_NUMBERS") {
            Some(raw) => {
                AlertDirectory::from_json(&raw).wrap_err("invalid BSL_ALERT_NUMBERS")?
            }
            None => AlertDirectory::default(),
        };

        let mut reminders = ReminderSweepConfig::default();
        let mut form_reminders = FormReminderConfig::default();
        let mut auto_attend = AutoAttendConfig::default();

        if let Some(url) = var("BSL_VIRTUAL_VISIT_URL") {
            reminders.virtual_visit_url = url;
        }
        if let Some(url) = var("BSL_FORM_UNLOCK_URL") {
            form_reminders.unlock_url = url;
        }
        if let Some(raw) = var("BSL_SWEEP_DELAY_MS") {
            let millis: u64 = raw
                .parse()
                .wrap_err_with(|| format!("invalid BSL_SWEEP_DELAY_MS: {raw}"))?;
            let delay = Duration::from_millis(millis);
            reminders.delay = delay;
            form_reminders.delay = delay;
            auto_attend.delay = delay;
        }

        Ok(Self {
            port,
            store,
            bucket: var("BSL_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            whapi_url: var("WHAPI_URL").unwrap_or_else(|| whapi::DEFAULT_URL.to_string()),
            whapi_token: var("WHAPI_TOKEN").unwrap_or_default(),
            certificate_url: var("BSL_CERTIFICATE_URL")
                .unwrap_or_else(|| DEFAULT_CERTIFICATE_URL.to_string()),
            alert_numbers,
            reminders,
            form_reminders,
            auto_attend,
        })
    }
}
