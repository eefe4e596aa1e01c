use std::time::Duration;

use jiff::SignedDuration;

/// Inclusive range of signed minutes relative to an appointment time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinuteWindow {
    pub from: f64,
    pub to: f64,
}

impl MinuteWindow {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, minutes: f64) -> bool {
        minutes >= self.from && minutes <= self.to
    }
}

#[derive(Debug, Clone)]
pub struct ReminderSweepConfig {
    /// How far back to look, so a late sweep still sees appointments that
    /// just started.
    pub grace: SignedDuration,
    pub lookahead: SignedDuration,
    /// Minutes before the appointment in which the single reminder goes out.
    pub reminder_window: MinuteWindow,
    /// Minutes around the appointment in which the visit is closed and the
    /// certificate delivered.
    pub certificate_window: MinuteWindow,
    pub max_records: usize,
    pub delay: Duration,
    /// Base URL of the virtual consultation room; the appointment id is
    /// appended as `?_id=`.
    pub virtual_visit_url: String,
}

impl Default for ReminderSweepConfig {
    fn default() -> Self {
        Self {
            grace: SignedDuration::from_mins(15),
            lookahead: SignedDuration::from_mins(60),
            reminder_window: MinuteWindow::new(5.0, 15.0),
            certificate_window: MinuteWindow::new(-15.0, 5.0),
            max_records: 10,
            delay: Duration::from_millis(500),
            virtual_visit_url: "https://sea-lion-app-qcttp.ondigitalocean.app/".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormReminderConfig {
    pub lookahead: SignedDuration,
    pub delay: Duration,
    /// Company whose patients fill the form on site and never get this
    /// reminder.
    pub excluded_company: String,
    pub unlock_url: String,
}

impl Default for FormReminderConfig {
    fn default() -> Self {
        Self {
            lookahead: SignedDuration::from_mins(60),
            delay: Duration::from_millis(2000),
            excluded_company: "SANITHELP-JJ".to_string(),
            unlock_url: "https://www.bsl.com.co/desbloqueo".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutoAttendConfig {
    /// Oldest appointment considered, as time before now.
    pub earliest: SignedDuration,
    /// Newest appointment considered, as time before now.
    pub latest: SignedDuration,
    pub min_minutes_past: f64,
    pub max_records: usize,
    pub delay: Duration,
    /// Case-insensitive substring of the `medico` field.
    pub clinician_tag: String,
    /// Clinician name used in the thank-you message.
    pub clinician_display: String,
}

impl Default for AutoAttendConfig {
    fn default() -> Self {
        Self {
            earliest: SignedDuration::from_mins(120),
            latest: SignedDuration::from_mins(5),
            min_minutes_past: 5.0,
            max_records: 20,
            delay: Duration::from_millis(500),
            clinician_tag: "NUBIA".to_string(),
            clinician_display: "la Dra. Nubia".to_string(),
        }
    }
}
