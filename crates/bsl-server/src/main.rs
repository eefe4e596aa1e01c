use std::sync::Arc;

use bsl_messaging::whapi::WhapiGateway;
use bsl_server::config::{ServerConfig, StoreBackend};
use bsl_server::state::AppState;
use bsl_storage::memory::MemoryStore;
use bsl_storage::s3::S3Store;
use bsl_storage::store::RecordStore;
use bsl_sweep::SweepContext;
use bsl_sweep::certificate::HttpCertificateIssuer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let store: Arc<dyn RecordStore> = match config.store {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; records are lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::S3 => {
            let client = bsl_storage::client::build_client().await;
            Arc::new(S3Store::new(client, config.bucket.clone()))
        }
    };

    if config.whapi_token.is_empty() {
        tracing::warn!("WHAPI_TOKEN is not set; WhatsApp delivery will be rejected");
    }

    let state = AppState {
        sweeps: SweepContext {
            store,
            gateway: Arc::new(WhapiGateway::new(&config.whapi_url, &config.whapi_token)),
            certificates: Arc::new(HttpCertificateIssuer::new(&config.certificate_url)),
        },
        alerts: Arc::new(config.alert_numbers),
        reminders: Arc::new(config.reminders),
        form_reminders: Arc::new(config.form_reminders),
        auto_attend: Arc::new(config.auto_attend),
    };

    let app = bsl_server::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, store = ?config.store, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
