use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

use bsl_core::collections::INTAKE_FORMS;
use bsl_core::models::intake::IntakeForm;
use bsl_messaging::alerts::{self, AlertOutcome};
use bsl_storage::store::record_id;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct IntakeReceipt {
    #[serde(rename = "_id")]
    id: String,
    alerts: AlertOutcome,
}

/// Store an intake form as submitted, then alert the client company about
/// any critical answers.
///
/// The form is stored before alerting, and alert delivery failures never
/// fail the submission.
pub async fn submit_intake(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<IntakeReceipt>, ApiError> {
    let form: IntakeForm = serde_json::from_value(body.clone())?;

    let stored = state.store().insert(INTAKE_FORMS, body).await?;
    let id = record_id(&stored).unwrap_or_default().to_string();
    tracing::info!(
        form_id = %id,
        company = form.cod_empresa.as_deref().unwrap_or_default(),
        "intake form stored"
    );

    let outcome = alerts::send_critical_alerts(state.gateway(), &state.alerts, &form).await;
    Ok(Json(IntakeReceipt {
        id,
        alerts: outcome,
    }))
}
