use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Map, Value};

use bsl_core::collections::{AUDIOMETRY, VISUAL, field};
use bsl_core::models::screening::VisualRecord;
use bsl_instruments::screening::audiometry;
use bsl_instruments::screening::visual::VisualScores;
use bsl_storage::query::Query;
use bsl_storage::typed;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudiometrySubmission {
    pub id_general: String,
    pub cedula: String,
    #[serde(default)]
    pub cod_empresa: Option<String>,
    /// Beeps heard per tone, keyed by field name (`auDer1000`, ...).
    pub beeps: BTreeMap<String, u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSubmission {
    pub id_general: String,
    pub cedula: String,
    #[serde(default)]
    pub cod_empresa: Option<String>,
    #[serde(default)]
    pub astigmatismo: Option<String>,
    #[serde(default)]
    pub miopia: Option<String>,
    #[serde(flatten)]
    pub scores: VisualScores,
}

fn require(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{name} is required")));
    }
    Ok(())
}

/// Convert beep counts to thresholds and upsert the audiogram by `cedula`.
pub async fn submit_audiometry(
    State(state): State<AppState>,
    Json(submission): Json<AudiometrySubmission>,
) -> Result<Json<Value>, ApiError> {
    require("cedula", &submission.cedula)?;
    let thresholds = audiometry::audiogram(&submission.beeps)?;

    let mut record = Map::new();
    record.insert("numeroId".to_string(), submission.id_general.clone().into());
    record.insert(field::GENERAL_ID.to_string(), submission.id_general.into());
    record.insert(field::CEDULA.to_string(), submission.cedula.clone().into());
    record.insert(field::COMPANY_CODE.to_string(), submission.cod_empresa.into());
    for (tone, db) in thresholds {
        record.insert(tone, db.into());
    }

    let query = Query::new(AUDIOMETRY).eq(field::CEDULA, submission.cedula.as_str());
    let stored = typed::upsert(state.store(), &query, Value::Object(record)).await?;
    tracing::info!(tones = submission.beeps.len(), "audiometry stored");
    Ok(Json(stored))
}

/// Grade the visual screening and upsert it by `cedula`.
pub async fn submit_visual(
    State(state): State<AppState>,
    Json(submission): Json<VisualSubmission>,
) -> Result<Json<Value>, ApiError> {
    require("cedula", &submission.cedula)?;
    submission.scores.validate()?;
    let concept = submission.scores.concept();

    let record = VisualRecord {
        numero_id: submission.id_general.clone(),
        id_general: submission.id_general,
        cedula: submission.cedula.clone(),
        cod_empresa: submission.cod_empresa,
        astigmatismo: submission.astigmatismo,
        miopia: submission.miopia,
        snelle: submission.scores.letters,
        agudeza_visual: submission.scores.points,
        colores: submission.scores.colours,
        concepto: concept.label().to_string(),
    };

    let query = Query::new(VISUAL).eq(field::CEDULA, submission.cedula.as_str());
    let stored = typed::upsert(state.store(), &query, serde_json::to_value(&record)?).await?;
    tracing::info!(
        failures = submission.scores.failures(),
        concept = concept.label(),
        "visual screening stored"
    );
    Ok(Json(stored))
}
