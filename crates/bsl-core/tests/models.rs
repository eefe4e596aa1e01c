use bsl_core::error::CoreError;
use bsl_core::models::appointment::Appointment;
use bsl_core::models::bot_state::{BotState, PAYMENT_LEVEL};
use bsl_core::models::history::ClinicalHistory;
use bsl_core::models::intake::{CriticalFinding, IntakeForm};
use bsl_core::models::message::{MessageKind, MessageLogEntry};
use bsl_core::models::questionnaire::QuestionnaireResponse;
use serde_json::json;

#[test]
fn appointment_defaults_missing_flags() {
    let appointment: Appointment = serde_json::from_value(json!({
        "_id": "a1",
        "primerNombre": "Laura",
        "celular": "  ",
        "fechaAtencion": "2025-03-03T15:00:00Z",
    }))
    .unwrap();

    assert!(!appointment.recordatorio_link_enviado);
    assert!(!appointment.pruebas_finalizadas);
    assert!(!appointment.is_attended());
    assert_eq!(appointment.phone(), None);
}

#[test]
fn appointment_requires_a_time() {
    let result = serde_json::from_value::<Appointment>(json!({ "_id": "a1" }));
    assert!(result.is_err());
}

#[test]
fn pausing_the_bot_deactivates_it() {
    let mut bot: BotState = serde_json::from_value(json!({
        "_id": "w1",
        "userId": "573001234567",
        "observaciones": "esperando certificado",
        "nivel": 5,
    }))
    .unwrap();
    assert!(bot.bot_activo);
    assert!(!bot.stop_bot);

    bot.pause_for_payment();
    assert!(bot.stop_bot);
    assert!(!bot.bot_activo);
    assert_eq!(bot.nivel, PAYMENT_LEVEL);
    assert!(bot.observaciones.is_empty());
}

#[test]
fn intake_lists_critical_findings_in_form_order() {
    let form: IntakeForm = serde_json::from_value(json!({
        "numeroId": "1018456789",
        "enfermedadAutoinmune": "SI",
        "sintomasPsicologicos": "SI",
        "diagnosticoCancer": "NO",
        "trastornoPsicologico": "si",
    }))
    .unwrap();

    assert_eq!(form.documento_identidad.as_deref(), Some("1018456789"));
    assert_eq!(
        form.critical_findings(),
        vec![
            CriticalFinding::PsychologicalSymptoms,
            CriticalFinding::AutoimmuneDisease
        ]
    );
}

#[test]
fn intake_full_name_falls_back() {
    let mut form = IntakeForm::default();
    assert_eq!(form.full_name(), "No especificado");

    form.primer_nombre = Some("Laura".to_string());
    assert_eq!(form.full_name(), "Laura");

    form.primer_apellido = Some("Gómez".to_string());
    assert_eq!(form.full_name(), "Laura Gómez");
}

#[test]
fn questionnaire_keeps_only_string_answers() {
    let response = QuestionnaireResponse::from_record(&json!({
        "an03": "De acuerdo",
        "de12": "En desacuerdo",
        "score": 12,
        "flag": true,
    }))
    .unwrap();

    assert_eq!(response.answer("an03"), Some("De acuerdo"));
    assert_eq!(response.answer("de12"), Some("En desacuerdo"));
    assert_eq!(response.answer("score"), None);
    assert_eq!(response.answers.len(), 2);
}

#[test]
fn questionnaire_rejects_non_objects() {
    let err = QuestionnaireResponse::from_record(&json!(["an03"])).unwrap_err();
    assert!(matches!(err, CoreError::NotAnObject));
}

#[test]
fn journal_entry_uses_stored_kind_names() {
    let entry = MessageLogEntry::outbound(
        "573001234567",
        "Laura",
        "Hola",
        MessageKind::AttendanceThanks,
    );
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        json!({
            "userId": "573001234567",
            "nombre": "Laura",
            "mensaje": "Hola",
            "from": "wix",
            "tipo": "confirmacion_atendido_nubia",
        })
    );
}

#[test]
fn history_attendance_flag() {
    let mut history = ClinicalHistory::default();
    assert!(!history.is_attended());
    history.atendido = Some("ATENDIDO".to_string());
    assert!(history.is_attended());
}
