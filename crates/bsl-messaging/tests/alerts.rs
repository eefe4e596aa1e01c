use std::collections::HashMap;
use std::sync::Mutex;

use bsl_core::models::intake::IntakeForm;
use bsl_messaging::alerts::{self, AlertDirectory, AlertOutcome};
use bsl_messaging::error::MessagingError;
use bsl_messaging::gateway::{BoxFuture, DeliveryReceipt, MessagingGateway};

#[derive(Default)]
struct RecordingGateway {
    sent: Mutex<Vec<(String, String)>>,
    fail_to: Option<String>,
}

impl MessagingGateway for RecordingGateway {
    fn send_text<'a>(
        &'a self,
        to: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<DeliveryReceipt, MessagingError>> {
        Box::pin(async move {
            if self.fail_to.as_deref() == Some(to) {
                return Err(MessagingError::Rejected {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
            Ok(DeliveryReceipt::default())
        })
    }
}

fn directory() -> AlertDirectory {
    AlertDirectory::new(HashMap::from([(
        "SIIGO".to_string(),
        vec!["573000000001".to_string(), "573000000002".to_string()],
    )]))
}

fn form(company: &str) -> IntakeForm {
    IntakeForm {
        documento_identidad: Some("1018456789".to_string()),
        primer_nombre: Some("Laura".to_string()),
        primer_apellido: Some("Gómez".to_string()),
        celular: Some("3001234567".to_string()),
        empresa: Some("Siigo S.A.S.".to_string()),
        cod_empresa: Some(company.to_string()),
        diagnostico_cancer: Some("SI".to_string()),
        enfermedad_autoinmune: Some("SI".to_string()),
        trastorno_psicologico: Some("NO".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn alerts_every_configured_number() {
    let gateway = RecordingGateway::default();
    let outcome = alerts::send_critical_alerts(&gateway, &directory(), &form("SIIGO")).await;

    assert_eq!(
        outcome,
        AlertOutcome::Sent {
            delivered: 2,
            failed: 0
        }
    );
    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "573000000001");
    assert_eq!(sent[0].1, sent[1].1);

    let body = &sent[0].1;
    assert!(body.contains("*Paciente:* Laura Gómez"));
    assert!(body.contains("*Cédula:* 1018456789"));
    assert!(body.contains("Diagnóstico o estudio por sospecha de cáncer"));
    assert!(body.contains("Enfermedad autoinmune diagnosticada"));
    assert!(!body.contains("Trastorno psicológico"));
}

#[tokio::test]
async fn unconfigured_company_sends_nothing() {
    let gateway = RecordingGateway::default();
    let outcome = alerts::send_critical_alerts(&gateway, &directory(), &form("ACME")).await;
    assert_eq!(outcome, AlertOutcome::NotConfigured);
    assert!(gateway.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn no_critical_answers_sends_nothing() {
    let gateway = RecordingGateway::default();
    let mut clean = form("SIIGO");
    clean.diagnostico_cancer = Some("NO".to_string());
    clean.enfermedad_autoinmune = None;

    let outcome = alerts::send_critical_alerts(&gateway, &directory(), &clean).await;
    assert_eq!(outcome, AlertOutcome::NothingToReport);
    assert!(gateway.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn one_failed_number_does_not_stop_the_rest() {
    let gateway = RecordingGateway {
        fail_to: Some("573000000001".to_string()),
        ..Default::default()
    };
    let outcome = alerts::send_critical_alerts(&gateway, &directory(), &form("SIIGO")).await;
    assert_eq!(
        outcome,
        AlertOutcome::Sent {
            delivered: 1,
            failed: 1
        }
    );
}

#[test]
fn blank_fields_read_as_unspecified() {
    let form = IntakeForm::default();
    let body = alerts::compose(&form, &form.critical_findings());
    assert!(body.contains("*Paciente:* No especificado"));
    assert!(body.contains("*Cédula:* No especificada"));
    assert!(body.contains("*Empresa:* No especificada"));
}

#[test]
fn directory_parses_from_json() {
    let directory =
        AlertDirectory::from_json(r#"{"MASIN": ["573112634312", "573008021701"]}"#).unwrap();
    assert_eq!(directory.numbers_for(Some("MASIN")).len(), 2);
    assert!(directory.numbers_for(None).is_empty());
}
