use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use bsl_core::collections::{PSYCHOMETRIC_TESTS, field};
use bsl_core::models::questionnaire::QuestionnaireResponse;
use bsl_instruments::{ScoreOutcome, get_instrument};
use bsl_storage::query;
use bsl_storage::store::RecordStore;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ScoreParams {
    /// Client company code; selects company-specific bands.
    #[serde(default)]
    pub cod_empresa: Option<String>,
}

pub async fn get_score(
    State(state): State<AppState>,
    Path((instrument_id, numero_id)): Path<(String, String)>,
    Query(params): Query<ScoreParams>,
) -> Result<Json<ScoreOutcome>, ApiError> {
    let instrument = get_instrument(&instrument_id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {instrument_id}")))?;

    let response = find_response(state.store(), &numero_id).await;
    let outcome = instrument.score(response.as_ref(), params.cod_empresa.as_deref());
    tracing::info!(
        instrument = instrument.id(),
        taken = outcome.is_taken(),
        "score computed"
    );
    Ok(Json(outcome))
}

/// The subject's stored answers. A failed lookup is treated as no answers:
/// the certificate then reads "not taken" instead of failing to render.
async fn find_response(store: &dyn RecordStore, numero_id: &str) -> Option<QuestionnaireResponse> {
    let query = query::Query::new(PSYCHOMETRIC_TESTS)
        .eq(field::TEST_DOCUMENT, numero_id)
        .limit(1);

    let records = match store.find(&query).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "questionnaire lookup failed");
            return None;
        }
    };

    let record = records.into_iter().next()?;
    match QuestionnaireResponse::from_record(&record) {
        Ok(response) => Some(response),
        Err(e) => {
            tracing::warn!(error = %e, "stored questionnaire is not an object");
            None
        }
    }
}
