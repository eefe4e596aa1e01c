//! What the main sweep does with one appointment, as a pure function of
//! its state and the current time.

use crate::config::ReminderSweepConfig;

/// Everything the decision depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordFacts {
    pub form_completed: bool,
    pub reminder_sent: bool,
    pub minutes_until: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ask the patient to finish the intake form and tests.
    RemindPendingTests,
    /// Send the virtual consultation link. When the appointment is already
    /// inside the certificate window the visit is closed in the same pass.
    SendVisitLink { then_complete: bool },
    /// Mark attended, deliver the certificate, then ask for payment.
    CompleteVisit,
    Wait,
}

/// Decide the action for one appointment.
///
/// The reminder and certificate windows meet at 5 minutes; at exactly
/// that point a completed form gets the link and the visit is closed
/// right after it.
pub fn decide(facts: RecordFacts, config: &ReminderSweepConfig) -> Action {
    let in_reminder_window = config.reminder_window.contains(facts.minutes_until);

    if !facts.form_completed {
        return if !facts.reminder_sent && in_reminder_window {
            Action::RemindPendingTests
        } else {
            Action::Wait
        };
    }

    let in_certificate_window = config.certificate_window.contains(facts.minutes_until);
    if !facts.reminder_sent && in_reminder_window {
        Action::SendVisitLink {
            then_complete: in_certificate_window,
        }
    } else if in_certificate_window {
        Action::CompleteVisit
    } else {
        Action::Wait
    }
}
