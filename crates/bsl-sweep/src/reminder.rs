//! The main appointment sweep.
//!
//! Flag writes follow the message they record: a crash between the send
//! and the write can repeat a reminder on the next sweep but never drops
//! one. Closing a visit is the exception: `atendido` is written first, so
//! a failure after that point drops the certificate follow-ups instead of
//! re-issuing the certificate.

use bsl_core::collections::{APPOINTMENTS, BOT_STATE, INTAKE_FORMS, field};
use bsl_core::models::appointment::{ATTENDED, Appointment};
use bsl_core::models::bot_state::BotState;
use bsl_core::models::message::{MessageKind, MessageLogEntry};
use bsl_messaging::{journal, phone};
use bsl_storage::query::Query;
use bsl_storage::typed;
use jiff::Timestamp;
use serde_json::json;

use crate::config::ReminderSweepConfig;
use crate::decision::{self, Action, RecordFacts};
use crate::error::SweepError;
use crate::report::SweepReport;
use crate::{SweepContext, minutes_until, pace, window};

pub const PENDING_TESTS_MESSAGE: &str =
    "Necesitamos que termines esas pruebas para continuar con tu orden médica.";

pub const PAYMENT_REVIEW_MESSAGE: &str = "Revisa que todo esté en orden";

pub const PAYMENT_INSTRUCTIONS_MESSAGE: &str = "Paga $46.000 en las siguientes cuentas:\n\n\
*Bancolombia*\nCta Ahorros: 442 9119 2456\nCédula: 79 981 585\n\n\
*Daviplata:* 301 440 0818\n\n\
*Nequi:* 300 802 1701\n\n\
Cuándo lo hagas *envía el soporte de pago por acá*";

pub fn visit_link_message(base_url: &str, appointment_id: &str) -> String {
    format!("Comunícate ya haciendo clic en este link.\n\n{base_url}?_id={appointment_id}")
}

/// Selection query for the sweep at `now`.
pub fn candidates(now: Timestamp, config: &ReminderSweepConfig) -> Result<Query, SweepError> {
    let (from, to) = window(now, config.grace, config.lookahead)?;
    Ok(Query::new(APPOINTMENTS)
        .ge(field::APPOINTMENT_AT, from.to_string())
        .le(field::APPOINTMENT_AT, to.to_string())
        .ne(field::ATTENDANCE, ATTENDED)
        .ascending(field::APPOINTMENT_AT))
}

/// Run one pass of the main sweep.
pub async fn run(
    ctx: &SweepContext,
    config: &ReminderSweepConfig,
    now: Timestamp,
) -> Result<SweepReport, SweepError> {
    let query = candidates(now, config)?;
    let appointments: Vec<Appointment> = typed::find_as(ctx.store.as_ref(), &query)
        .await
        .map_err(SweepError::Selection)?;

    let mut report = SweepReport::new(appointments.len(), Some(config.max_records));
    tracing::info!(
        selected = report.selected,
        deferred = report.deferred,
        "reminder sweep started"
    );

    for appointment in appointments.iter().take(config.max_records) {
        pace(config.delay).await;
        if let Err(e) = process(ctx, config, appointment, now, &mut report).await {
            report.fail(&appointment.id, e);
        }
    }

    tracing::info!(
        processed = report.processed,
        messages_sent = report.messages_sent,
        errors = report.errors.len(),
        "reminder sweep finished"
    );
    Ok(report)
}

/// Whether an intake form was submitted for this appointment. A failed
/// lookup counts as not submitted.
async fn form_completed(ctx: &SweepContext, appointment_id: &str) -> bool {
    let query = Query::new(INTAKE_FORMS).eq(field::GENERAL_ID, appointment_id);
    match typed::exists(ctx.store.as_ref(), &query).await {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(appointment_id, error = %e, "intake form lookup failed");
            false
        }
    }
}

async fn process(
    ctx: &SweepContext,
    config: &ReminderSweepConfig,
    appointment: &Appointment,
    now: Timestamp,
    report: &mut SweepReport,
) -> Result<(), SweepError> {
    let form_completed = form_completed(ctx, &appointment.id).await;

    let Some(raw_phone) = appointment.phone() else {
        tracing::debug!(appointment_id = %appointment.id, "no phone number, skipping");
        return Ok(());
    };
    let to = phone::normalize(raw_phone)?;

    let facts = RecordFacts {
        form_completed,
        reminder_sent: appointment.recordatorio_link_enviado,
        minutes_until: minutes_until(appointment.fecha_atencion, now),
    };
    let action = decision::decide(facts, config);
    tracing::debug!(
        appointment_id = %appointment.id,
        minutes_until = facts.minutes_until,
        form_completed,
        reminder_sent = facts.reminder_sent,
        action = ?action,
        "appointment evaluated"
    );

    match action {
        Action::Wait => Ok(()),
        Action::RemindPendingTests => {
            send_reminder(
                ctx,
                appointment,
                &to,
                PENDING_TESTS_MESSAGE,
                MessageKind::PendingTests,
                report,
            )
            .await
        }
        Action::SendVisitLink { then_complete } => {
            let message = visit_link_message(&config.virtual_visit_url, &appointment.id);
            let linked = send_reminder(
                ctx,
                appointment,
                &to,
                &message,
                MessageKind::VirtualVisitLink,
                report,
            )
            .await;
            if !then_complete {
                return linked;
            }
            // A failed link does not hold back the certificate.
            if let Err(e) = linked {
                report.fail(&appointment.id, e);
            }
            complete_visit(ctx, appointment, &to, report).await
        }
        Action::CompleteVisit => complete_visit(ctx, appointment, &to, report).await,
    }
}

async fn send(
    ctx: &SweepContext,
    appointment: &Appointment,
    to: &str,
    message: &str,
    kind: MessageKind,
    report: &mut SweepReport,
) -> Result<(), SweepError> {
    ctx.gateway.send_text(to, message).await?;
    report.messages_sent += 1;
    let user_id = appointment.celular.as_deref().unwrap_or_default();
    let entry = MessageLogEntry::outbound(user_id, &appointment.primer_nombre, message, kind);
    journal::record_best_effort(ctx.store.as_ref(), &entry).await;
    Ok(())
}

/// Send the one-time reminder, then set the flag that suppresses it.
async fn send_reminder(
    ctx: &SweepContext,
    appointment: &Appointment,
    to: &str,
    message: &str,
    kind: MessageKind,
    report: &mut SweepReport,
) -> Result<(), SweepError> {
    send(ctx, appointment, to, message, kind, report).await?;
    typed::patch(
        ctx.store.as_ref(),
        APPOINTMENTS,
        &appointment.id,
        json!({ (field::REMINDER_SENT): true }),
    )
    .await?;
    tracing::info!(appointment_id = %appointment.id, kind = ?kind, "reminder sent");
    Ok(())
}

async fn complete_visit(
    ctx: &SweepContext,
    appointment: &Appointment,
    to: &str,
    report: &mut SweepReport,
) -> Result<(), SweepError> {
    typed::patch(
        ctx.store.as_ref(),
        APPOINTMENTS,
        &appointment.id,
        json!({ (field::TESTS_FINISHED): true, (field::ATTENDANCE): ATTENDED }),
    )
    .await?;
    tracing::info!(appointment_id = %appointment.id, "appointment marked attended");

    let pdf_url = ctx.certificates.issue(appointment, to).await?;
    report.messages_sent += 1;
    let user_id = appointment.celular.as_deref().unwrap_or_default();
    journal::record_best_effort(
        ctx.store.as_ref(),
        &MessageLogEntry::outbound(
            user_id,
            &appointment.primer_nombre,
            &format!("Certificado médico enviado en PDF: {pdf_url}"),
            MessageKind::CertificateSent,
        ),
    )
    .await;

    send(
        ctx,
        appointment,
        to,
        PAYMENT_REVIEW_MESSAGE,
        MessageKind::PaymentReview,
        report,
    )
    .await?;

    let bot_query = Query::new(BOT_STATE).eq(field::USER_ID, to).limit(1);
    let Some(mut bot) = typed::find_as::<BotState>(ctx.store.as_ref(), &bot_query)
        .await?
        .into_iter()
        .next()
    else {
        tracing::info!(user_id = to, "no bot state for number, payment message skipped");
        return Ok(());
    };

    bot.pause_for_payment();
    typed::patch(
        ctx.store.as_ref(),
        BOT_STATE,
        &bot.id,
        json!({
            "observaciones": bot.observaciones,
            "nivel": bot.nivel,
            "stopBot": bot.stop_bot,
            "botActivo": bot.bot_activo,
        }),
    )
    .await?;

    send(
        ctx,
        appointment,
        to,
        PAYMENT_INSTRUCTIONS_MESSAGE,
        MessageKind::PaymentInstructions,
        report,
    )
    .await
}
