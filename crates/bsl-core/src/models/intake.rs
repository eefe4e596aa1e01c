use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Affirmative answer value used by the intake form's yes/no questions.
pub const YES: &str = "SI";

/// The pre-visit intake form (`FORMULARIO`).
///
/// `id_general` links the form to the booking record; `documento_identidad`
/// links it to the patient's national id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IntakeForm {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub id_general: Option<String>,
    #[serde(default, alias = "numeroId")]
    pub documento_identidad: Option<String>,
    #[serde(default)]
    pub primer_nombre: Option<String>,
    #[serde(default)]
    pub primer_apellido: Option<String>,
    #[serde(default)]
    pub celular: Option<String>,
    #[serde(default)]
    pub empresa: Option<String>,
    #[serde(default)]
    pub cod_empresa: Option<String>,
    #[serde(default)]
    pub trastorno_psicologico: Option<String>,
    #[serde(default)]
    pub sintomas_psicologicos: Option<String>,
    #[serde(default)]
    pub diagnostico_cancer: Option<String>,
    #[serde(default)]
    pub enfermedades_laborales: Option<String>,
    #[serde(default)]
    pub enfermedad_osteomuscular: Option<String>,
    #[serde(default)]
    pub enfermedad_autoinmune: Option<String>,
}

/// A condition reported on the intake form that the client company wants
/// to hear about before the consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CriticalFinding {
    PsychologicalDisorder,
    PsychologicalSymptoms,
    CancerDiagnosis,
    OccupationalDisease,
    MusculoskeletalDisease,
    AutoimmuneDisease,
}

impl CriticalFinding {
    pub fn description(&self) -> &'static str {
        match self {
            Self::PsychologicalDisorder => "Trastorno psicológico o psiquiátrico diagnosticado",
            Self::PsychologicalSymptoms => {
                "Síntomas psicológicos en los últimos 2 años (ansiedad, depresión, pánico)"
            }
            Self::CancerDiagnosis => "Diagnóstico o estudio por sospecha de cáncer",
            Self::OccupationalDisease => "Enfermedades laborales o accidentes de trabajo previos",
            Self::MusculoskeletalDisease => "Enfermedad osteomuscular diagnosticada",
            Self::AutoimmuneDisease => "Enfermedad autoinmune diagnosticada",
        }
    }
}

impl IntakeForm {
    /// Critical conditions answered with "SI", in form order.
    pub fn critical_findings(&self) -> Vec<CriticalFinding> {
        [
            (&self.trastorno_psicologico, CriticalFinding::PsychologicalDisorder),
            (&self.sintomas_psicologicos, CriticalFinding::PsychologicalSymptoms),
            (&self.diagnostico_cancer, CriticalFinding::CancerDiagnosis),
            (&self.enfermedades_laborales, CriticalFinding::OccupationalDisease),
            (&self.enfermedad_osteomuscular, CriticalFinding::MusculoskeletalDisease),
            (&self.enfermedad_autoinmune, CriticalFinding::AutoimmuneDisease),
        ]
        .into_iter()
        .filter(|(answer, _)| answer.as_deref() == Some(YES))
        .map(|(_, finding)| finding)
        .collect()
    }

    /// "First Last", or "No especificado" when both are blank.
    pub fn full_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.primer_nombre.as_deref().unwrap_or_default(),
            self.primer_apellido.as_deref().unwrap_or_default()
        );
        let name = name.trim();
        if name.is_empty() {
            "No especificado".to_string()
        } else {
            name.to_string()
        }
    }
}
