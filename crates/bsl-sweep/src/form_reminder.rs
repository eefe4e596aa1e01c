//! Intake-form reminder for patients booked within the next hour.
//!
//! Works on clinical histories, keyed by national id, and keeps no flag of
//! its own: a patient whose form is still missing is reminded on every pass
//! that sees the appointment.

use bsl_core::collections::{CLINICAL_HISTORY, INTAKE_FORMS, field};
use bsl_core::models::appointment::ATTENDED;
use bsl_core::models::history::ClinicalHistory;
use bsl_core::models::message::{MessageKind, MessageLogEntry};
use bsl_messaging::{journal, phone};
use bsl_storage::query::Query;
use bsl_storage::typed;
use jiff::{SignedDuration, Timestamp};

use crate::config::FormReminderConfig;
use crate::error::SweepError;
use crate::report::SweepReport;
use crate::{SweepContext, pace, window};

pub fn form_reminder_message(first_name: &str, unlock_url: &str) -> String {
    format!(
        "Hola {first_name}: Te escribimos de BSL. Tienes una cita médico ocupacional. \
         Para continuar debes completar el formulario en el siguiente enlace:\n\n{unlock_url}"
    )
}

pub fn candidates(now: Timestamp, config: &FormReminderConfig) -> Result<Query, SweepError> {
    let (from, to) = window(now, SignedDuration::ZERO, config.lookahead)?;
    Ok(Query::new(CLINICAL_HISTORY)
        .ge(field::APPOINTMENT_AT, from.to_string())
        .le(field::APPOINTMENT_AT, to.to_string())
        .ne(field::COMPANY_CODE, config.excluded_company.as_str())
        .ne(field::ATTENDANCE, ATTENDED)
        .ascending(field::APPOINTMENT_AT))
}

pub async fn run(
    ctx: &SweepContext,
    config: &FormReminderConfig,
    now: Timestamp,
) -> Result<SweepReport, SweepError> {
    let query = candidates(now, config)?;
    let histories: Vec<ClinicalHistory> = typed::find_as(ctx.store.as_ref(), &query)
        .await
        .map_err(SweepError::Selection)?;

    let mut report = SweepReport::new(histories.len(), None);
    tracing::info!(selected = report.selected, "form reminder sweep started");

    for history in &histories {
        pace(config.delay).await;
        if let Err(e) = process(ctx, config, history, &mut report).await {
            report.fail(&history.id, e);
        }
    }

    tracing::info!(
        messages_sent = report.messages_sent,
        errors = report.errors.len(),
        "form reminder sweep finished"
    );
    Ok(report)
}

async fn has_intake_form(ctx: &SweepContext, numero_id: &str) -> bool {
    if numero_id.is_empty() {
        return false;
    }
    let query = Query::new(INTAKE_FORMS).eq(field::IDENTITY_DOCUMENT, numero_id);
    match typed::exists(ctx.store.as_ref(), &query).await {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(numero_id, error = %e, "intake form lookup failed");
            false
        }
    }
}

async fn process(
    ctx: &SweepContext,
    config: &FormReminderConfig,
    history: &ClinicalHistory,
    report: &mut SweepReport,
) -> Result<(), SweepError> {
    let Some(raw_phone) = history.celular.as_deref().filter(|c| !c.trim().is_empty()) else {
        tracing::debug!(history_id = %history.id, "no phone number, skipping");
        return Ok(());
    };

    if has_intake_form(ctx, &history.numero_id).await {
        tracing::debug!(history_id = %history.id, "intake form already submitted");
        return Ok(());
    }

    let to = phone::normalize(raw_phone)?;
    let message = form_reminder_message(&history.primer_nombre, &config.unlock_url);
    ctx.gateway.send_text(&to, &message).await?;
    report.messages_sent += 1;

    journal::record_best_effort(
        ctx.store.as_ref(),
        &MessageLogEntry::outbound(
            raw_phone,
            &history.primer_nombre,
            &message,
            MessageKind::FormReminder,
        ),
    )
    .await;
    tracing::info!(history_id = %history.id, "intake form reminder sent");
    Ok(())
}
