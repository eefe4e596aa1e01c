use axum::Json;
use axum::extract::{Query, State};
use jiff::Timestamp;
use serde::Deserialize;

use bsl_sweep::report::SweepReport;
use bsl_sweep::{auto_attend, form_reminder, reminder};

use crate::error::ApiError;
use crate::state::AppState;

/// Optional evaluation time; defaults to the current time.
#[derive(Debug, Default, Deserialize)]
pub struct SweepParams {
    #[serde(default)]
    pub now: Option<Timestamp>,
}

impl SweepParams {
    fn now(&self) -> Timestamp {
        self.now.unwrap_or_else(Timestamp::now)
    }
}

pub async fn run_reminders(
    State(state): State<AppState>,
    Query(params): Query<SweepParams>,
) -> Result<Json<SweepReport>, ApiError> {
    let report = reminder::run(&state.sweeps, &state.reminders, params.now()).await?;
    Ok(Json(report))
}

pub async fn run_form_reminders(
    State(state): State<AppState>,
    Query(params): Query<SweepParams>,
) -> Result<Json<SweepReport>, ApiError> {
    let report = form_reminder::run(&state.sweeps, &state.form_reminders, params.now()).await?;
    Ok(Json(report))
}

pub async fn run_auto_attend(
    State(state): State<AppState>,
    Query(params): Query<SweepParams>,
) -> Result<Json<SweepReport>, ApiError> {
    let report = auto_attend::run(&state.sweeps, &state.auto_attend, params.now()).await?;
    Ok(Json(report))
}
