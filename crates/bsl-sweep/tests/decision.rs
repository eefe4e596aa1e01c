use bsl_sweep::config::ReminderSweepConfig;
use bsl_sweep::decision::{Action, RecordFacts, decide};

fn facts(form_completed: bool, reminder_sent: bool, minutes_until: f64) -> RecordFacts {
    RecordFacts {
        form_completed,
        reminder_sent,
        minutes_until,
    }
}

#[test]
fn incomplete_form_is_reminded_inside_window_only() {
    let config = ReminderSweepConfig::default();
    assert_eq!(decide(facts(false, false, 5.0), &config), Action::RemindPendingTests);
    assert_eq!(decide(facts(false, false, 15.0), &config), Action::RemindPendingTests);
    assert_eq!(decide(facts(false, false, 15.1), &config), Action::Wait);
    assert_eq!(decide(facts(false, false, 4.9), &config), Action::Wait);
    assert_eq!(decide(facts(false, true, 10.0), &config), Action::Wait);
}

#[test]
fn incomplete_form_never_reaches_certificate() {
    let config = ReminderSweepConfig::default();
    assert_eq!(decide(facts(false, false, -10.0), &config), Action::Wait);
    assert_eq!(decide(facts(false, true, 0.0), &config), Action::Wait);
}

#[test]
fn complete_form_gets_link_then_certificate() {
    let config = ReminderSweepConfig::default();
    assert_eq!(
        decide(facts(true, false, 10.0), &config),
        Action::SendVisitLink { then_complete: false }
    );
    assert_eq!(decide(facts(true, true, 10.0), &config), Action::Wait);
    assert_eq!(decide(facts(true, true, 4.0), &config), Action::CompleteVisit);
    assert_eq!(decide(facts(true, false, -15.0), &config), Action::CompleteVisit);
    assert_eq!(decide(facts(true, true, -15.5), &config), Action::Wait);
}

#[test]
fn window_boundary_sends_link_and_closes_visit() {
    let config = ReminderSweepConfig::default();
    assert_eq!(
        decide(facts(true, false, 5.0), &config),
        Action::SendVisitLink { then_complete: true }
    );
    assert_eq!(decide(facts(true, true, 5.0), &config), Action::CompleteVisit);
}
