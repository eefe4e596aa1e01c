use axum::Json;
use axum::extract::State;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use bsl_core::collections::CLINICAL_HISTORY;
use bsl_core::models::appointment::ATTENDED;
use bsl_core::models::history::ClinicalHistory;
use bsl_storage::error::StorageError;
use bsl_storage::typed;

use crate::error::ApiError;
use crate::state::AppState;

/// Request to close a consultation. The medical-concept fields are always
/// applied; the patient fields are only used when the record does not exist
/// yet.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendedRequest {
    #[serde(rename = "wixId", default)]
    pub record_id: Option<String>,
    #[serde(default)]
    pub atendido: Option<String>,
    #[serde(default)]
    pub fecha_consulta: Option<Timestamp>,
    #[serde(default)]
    pub md_concepto_final: Option<String>,
    #[serde(default)]
    pub md_recomendaciones_medicas_adicionales: Option<String>,
    #[serde(default)]
    pub md_observaciones_certificado: Option<String>,

    #[serde(default)]
    pub numero_id: Option<String>,
    #[serde(default)]
    pub primer_nombre: Option<String>,
    #[serde(default)]
    pub segundo_nombre: Option<String>,
    #[serde(default)]
    pub primer_apellido: Option<String>,
    #[serde(default)]
    pub segundo_apellido: Option<String>,
    #[serde(default)]
    pub celular: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub edad: Option<u32>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub estado_civil: Option<String>,
    #[serde(default)]
    pub hijos: Option<u32>,
    #[serde(default)]
    pub ejercicio: Option<String>,
    #[serde(default)]
    pub cod_empresa: Option<String>,
    #[serde(default)]
    pub empresa: Option<String>,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub tipo_examen: Option<String>,
    #[serde(default)]
    pub fecha_atencion: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Update,
    Insert,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendedResponse {
    operacion: Operation,
    #[serde(rename = "_id")]
    id: String,
    numero_id: String,
    primer_nombre: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl MarkAttendedRequest {
    /// Build the full record for a first-time insert. Fails unless the
    /// national id, first name, first surname and phone are all present.
    fn into_history(self, id: String, now: Timestamp) -> Result<ClinicalHistory, ApiError> {
        let (Some(numero_id), Some(primer_nombre), Some(primer_apellido), Some(celular)) = (
            non_blank(self.numero_id),
            non_blank(self.primer_nombre),
            non_blank(self.primer_apellido),
            non_blank(self.celular),
        ) else {
            return Err(ApiError::BadRequest(
                "creating a record requires numeroId, primerNombre, primerApellido and celular"
                    .to_string(),
            ));
        };

        Ok(ClinicalHistory {
            id,
            numero_id,
            primer_nombre,
            segundo_nombre: self.segundo_nombre,
            primer_apellido: Some(primer_apellido),
            segundo_apellido: self.segundo_apellido,
            celular: Some(celular),
            email: self.email,
            fecha_nacimiento: self.fecha_nacimiento,
            edad: self.edad,
            genero: self.genero,
            estado_civil: self.estado_civil,
            hijos: self.hijos,
            ejercicio: self.ejercicio,
            cod_empresa: self.cod_empresa,
            empresa: self.empresa,
            cargo: self.cargo,
            tipo_examen: self.tipo_examen,
            fecha_atencion: self.fecha_atencion,
            atendido: Some(non_blank(self.atendido).unwrap_or_else(|| ATTENDED.to_string())),
            medico: None,
            fecha_consulta: Some(self.fecha_consulta.unwrap_or(now)),
            md_concepto_final: self.md_concepto_final,
            md_recomendaciones_medicas_adicionales: self.md_recomendaciones_medicas_adicionales,
            md_observaciones_certificado: self.md_observaciones_certificado,
        })
    }
}

fn text_field(record: &Value, name: &str) -> String {
    record
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Mark a clinical history as attended, creating it if needed.
pub async fn mark_attended(
    State(state): State<AppState>,
    Json(request): Json<MarkAttendedRequest>,
) -> Result<Json<MarkAttendedResponse>, ApiError> {
    let Some(id) = non_blank(request.record_id.clone()) else {
        return Err(ApiError::BadRequest("wixId is required".to_string()));
    };
    let now = Timestamp::now();

    let (operation, stored) = match state.store().get(CLINICAL_HISTORY, &id).await {
        Ok(_) => {
            let changes = json!({
                "atendido": non_blank(request.atendido).unwrap_or_else(|| ATTENDED.to_string()),
                "fechaConsulta": request.fecha_consulta.unwrap_or(now),
                "mdConceptoFinal": request.md_concepto_final,
                "mdRecomendacionesMedicasAdicionales": request.md_recomendaciones_medicas_adicionales,
                "mdObservacionesCertificado": request.md_observaciones_certificado,
            });
            let stored = typed::patch(state.store(), CLINICAL_HISTORY, &id, changes).await?;
            (Operation::Update, stored)
        }
        Err(StorageError::NotFound { .. }) => {
            let history = request.into_history(id.clone(), now)?;
            let stored = typed::insert_as(state.store(), CLINICAL_HISTORY, &history).await?;
            (Operation::Insert, stored)
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(record_id = %id, operation = ?operation, "clinical history marked attended");
    Ok(Json(MarkAttendedResponse {
        operacion: operation,
        id,
        numero_id: text_field(&stored, "numeroId"),
        primer_nombre: text_field(&stored, "primerNombre"),
    }))
}
