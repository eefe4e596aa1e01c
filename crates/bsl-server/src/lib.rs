//! bsl-server
//!
//! HTTP surface of the clinic backend: psychometric score lookups, sweep
//! triggers for the scheduler, screening and intake submissions, and
//! attendance marking.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/scores/{instrument}/{numero_id}",
            get(routes::scores::get_score),
        )
        // Sweeps, called by the external scheduler
        .route("/sweeps/reminders", post(routes::sweeps::run_reminders))
        .route(
            "/sweeps/form-reminders",
            post(routes::sweeps::run_form_reminders),
        )
        .route("/sweeps/auto-attend", post(routes::sweeps::run_auto_attend))
        // Patient-facing submissions
        .route("/formularios", post(routes::intake::submit_intake))
        .route("/audiometria", post(routes::screening::submit_audiometry))
        .route("/visual", post(routes::screening::submit_visual))
        .route("/marcar-atendido", post(routes::attendance::mark_attended))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
