//! Closes in-person visits with a given clinician once they are over.
//!
//! `atendido` is written before the thank-you message is sent, so a
//! gateway failure loses the message rather than repeating the transition.

use bsl_core::collections::{CLINICAL_HISTORY, field};
use bsl_core::models::appointment::ATTENDED;
use bsl_core::models::history::ClinicalHistory;
use bsl_core::models::message::{MessageKind, MessageLogEntry};
use bsl_messaging::{journal, phone};
use bsl_storage::query::Query;
use bsl_storage::typed;
use jiff::{SignedDuration, Timestamp};
use serde_json::json;

use crate::config::AutoAttendConfig;
use crate::error::SweepError;
use crate::report::SweepReport;
use crate::{SweepContext, minutes_until, pace, window};

pub fn thank_you_message(first_name: &str, clinician: &str) -> String {
    format!(
        "Hola {first_name}, gracias por asistir a tu cita médico ocupacional con {clinician}. \
         Tu certificado será enviado pronto. ¡Que tengas un excelente día!"
    )
}

pub fn candidates(now: Timestamp, config: &AutoAttendConfig) -> Result<Query, SweepError> {
    let (from, to) = window(now, config.earliest, -config.latest)?;
    Ok(Query::new(CLINICAL_HISTORY)
        .ge(field::APPOINTMENT_AT, from.to_string())
        .le(field::APPOINTMENT_AT, to.to_string())
        .contains(field::DOCTOR, config.clinician_tag.as_str())
        .ne(field::ATTENDANCE, ATTENDED)
        .ascending(field::APPOINTMENT_AT))
}

pub async fn run(
    ctx: &SweepContext,
    config: &AutoAttendConfig,
    now: Timestamp,
) -> Result<SweepReport, SweepError> {
    let query = candidates(now, config)?;
    let histories: Vec<ClinicalHistory> = typed::find_as(ctx.store.as_ref(), &query)
        .await
        .map_err(SweepError::Selection)?;

    let mut report = SweepReport::new(histories.len(), Some(config.max_records));
    tracing::info!(
        selected = report.selected,
        deferred = report.deferred,
        clinician = %config.clinician_tag,
        "auto-attend sweep started"
    );

    for history in histories.iter().take(config.max_records) {
        pace(config.delay).await;
        if let Err(e) = process(ctx, config, history, now, &mut report).await {
            report.fail(&history.id, e);
        }
    }

    tracing::info!(
        processed = report.processed,
        errors = report.errors.len(),
        "auto-attend sweep finished"
    );
    Ok(report)
}

async fn process(
    ctx: &SweepContext,
    config: &AutoAttendConfig,
    history: &ClinicalHistory,
    now: Timestamp,
    report: &mut SweepReport,
) -> Result<(), SweepError> {
    let Some(at) = history.fecha_atencion else {
        return Ok(());
    };
    let minutes_past = -minutes_until(at, now);
    if minutes_past < config.min_minutes_past {
        tracing::debug!(history_id = %history.id, minutes_past, "visit not over yet");
        return Ok(());
    }

    typed::patch(
        ctx.store.as_ref(),
        CLINICAL_HISTORY,
        &history.id,
        json!({ (field::ATTENDANCE): ATTENDED }),
    )
    .await?;
    tracing::info!(history_id = %history.id, "visit marked attended");

    let Some(raw_phone) = history.celular.as_deref().filter(|c| !c.trim().is_empty()) else {
        return Ok(());
    };
    let to = phone::normalize(raw_phone)?;
    let message = thank_you_message(&history.primer_nombre, &config.clinician_display);
    ctx.gateway.send_text(&to, &message).await?;
    report.messages_sent += 1;

    journal::record_best_effort(
        ctx.store.as_ref(),
        &MessageLogEntry::outbound(
            raw_phone,
            &history.primer_nombre,
            &message,
            MessageKind::AttendanceThanks,
        ),
    )
    .await;
    Ok(())
}
