//! Non-questionnaire screenings recorded by the patient-facing mini-apps.

pub mod audiometry;
pub mod visual;
