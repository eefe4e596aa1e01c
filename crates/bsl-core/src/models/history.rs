use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::appointment::ATTENDED;

/// A clinical-history record (`HistoriaClinica`), keyed by the same id the
/// booking flow assigned. Keyed by national id (`numero_id`) for lookups
/// from the intake form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalHistory {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub numero_id: String,
    #[serde(default)]
    pub primer_nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segundo_nombre: Option<String>,
    #[serde(default)]
    pub primer_apellido: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segundo_apellido: Option<String>,
    #[serde(default)]
    pub celular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edad: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_civil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hijos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ejercicio: Option<String>,
    #[serde(default)]
    pub cod_empresa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_examen: Option<String>,
    #[serde(default)]
    pub fecha_atencion: Option<jiff::Timestamp>,
    #[serde(default)]
    pub atendido: Option<String>,
    #[serde(default)]
    pub medico: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_consulta: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md_concepto_final: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md_recomendaciones_medicas_adicionales: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md_observaciones_certificado: Option<String>,
}

impl ClinicalHistory {
    pub fn is_attended(&self) -> bool {
        self.atendido.as_deref() == Some(ATTENDED)
    }
}
