use std::collections::HashMap;

use bsl_core::models::intake::{CriticalFinding, IntakeForm};
use serde::{Deserialize, Serialize};

use crate::gateway::MessagingGateway;

/// Phone numbers to alert, per client company code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AlertDirectory {
    by_company: HashMap<String, Vec<String>>,
}

impl AlertDirectory {
    pub fn new(by_company: HashMap<String, Vec<String>>) -> Self {
        Self { by_company }
    }

    /// Parse the `{"COMPANY": ["57...", ...]}` form used in configuration.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn numbers_for(&self, company: Option<&str>) -> &[String] {
        company
            .and_then(|c| self.by_company.get(c))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AlertOutcome {
    /// The company has no alert numbers configured.
    NotConfigured,
    /// No critical answer was "SI".
    NothingToReport,
    Sent { delivered: usize, failed: usize },
}

fn icon(finding: CriticalFinding) -> &'static str {
    match finding {
        CriticalFinding::PsychologicalDisorder => "🧠",
        CriticalFinding::PsychologicalSymptoms => "😰",
        CriticalFinding::CancerDiagnosis => "🎗️",
        CriticalFinding::OccupationalDisease => "⚠️",
        CriticalFinding::MusculoskeletalDisease => "🦴",
        CriticalFinding::AutoimmuneDisease => "🔬",
    }
}

fn or_unspecified<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
}

/// Alert text for a form with at least one critical finding.
pub fn compose(form: &IntakeForm, findings: &[CriticalFinding]) -> String {
    let conditions = findings
        .iter()
        .map(|f| format!("• {} {}", icon(*f), f.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🚨 *ALERTA - Formulario Médico BSL*\n\n\
         👤 *Paciente:* {}\n\
         🆔 *Cédula:* {}\n\
         📱 *Celular:* {}\n\
         🏢 *Empresa:* {}\n\n\
         ⚠️ *Condiciones reportadas:*\n{conditions}\n\n\
         _Revisar historia clínica antes de la consulta._",
        form.full_name(),
        or_unspecified(&form.documento_identidad, "No especificada"),
        or_unspecified(&form.celular, "No especificado"),
        or_unspecified(&form.empresa, "No especificada"),
    )
}

/// Send one alert per configured number of the form's company when the
/// form reports any critical condition. Delivery failures are logged and
/// counted, never returned.
pub async fn send_critical_alerts(
    gateway: &dyn MessagingGateway,
    directory: &AlertDirectory,
    form: &IntakeForm,
) -> AlertOutcome {
    let company = form.cod_empresa.as_deref();
    let numbers = directory.numbers_for(company);
    if numbers.is_empty() {
        tracing::info!(
            company = company.unwrap_or("No especificada"),
            "critical-answer alerts not configured for company"
        );
        return AlertOutcome::NotConfigured;
    }

    let findings = form.critical_findings();
    if findings.is_empty() {
        return AlertOutcome::NothingToReport;
    }

    let message = compose(form, &findings);
    let mut delivered = 0;
    let mut failed = 0;
    for number in numbers {
        match gateway.send_text(number, &message).await {
            Ok(_) => delivered += 1,
            Err(e) => {
                failed += 1;
                tracing::error!(to = %number, error = %e, "failed to send critical-answer alert");
            }
        }
    }

    tracing::info!(
        company = company.unwrap_or_default(),
        delivered,
        failed,
        "critical-answer alerts sent"
    );
    AlertOutcome::Sent { delivered, failed }
}
