use std::collections::BTreeMap;

use crate::error::InstrumentError;

/// Test tones, in the order they are played.
pub const FREQUENCIES_HZ: [u32; 8] = [250, 500, 1000, 2000, 3000, 4000, 6000, 8000];

/// Each tone is played as a descending run of this many beeps.
pub const BEEPS_PER_TONE: u32 = 7;

/// Threshold recorded when no beep of a tone was heard.
pub const NOT_HEARD_DB: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ear {
    Right,
    Left,
}

impl Ear {
    fn prefix(self) -> &'static str {
        match self {
            Ear::Right => "auDer",
            Ear::Left => "auIzq",
        }
    }

    /// Stored field for this ear at `hz`, e.g. `auDer1000`.
    pub fn field(self, hz: u32) -> String {
        format!("{}{hz}", self.prefix())
    }
}

/// Hearing threshold for a tone given how many of its beeps were heard.
/// Hearing all seven is 0 dB; each missed beep adds 10 dB.
pub fn threshold_db(beeps_heard: u32) -> u32 {
    match beeps_heard {
        1..=BEEPS_PER_TONE => (BEEPS_PER_TONE - beeps_heard) * 10,
        _ => NOT_HEARD_DB,
    }
}

/// All sixteen field names, right ear first.
pub fn fields() -> impl Iterator<Item = String> {
    [Ear::Right, Ear::Left]
        .into_iter()
        .flat_map(|ear| FREQUENCIES_HZ.iter().map(move |hz| ear.field(*hz)))
}

/// Convert beep counts keyed by field name into dB thresholds.
///
/// Unanswered tones are left out of the result; unknown field names are
/// rejected.
pub fn audiogram(
    beeps_heard: &BTreeMap<String, u32>,
) -> Result<BTreeMap<String, u32>, InstrumentError> {
    let known: Vec<String> = fields().collect();
    beeps_heard
        .iter()
        .map(|(field, beeps)| {
            if known.contains(field) {
                Ok((field.clone(), threshold_db(*beeps)))
            } else {
                Err(InstrumentError::UnknownField {
                    screening: "audiometry".to_string(),
                    field: field.clone(),
                })
            }
        })
        .collect()
}
