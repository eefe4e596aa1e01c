use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

pub const LETTER_PLATES: u32 = 6;
pub const POINT_DIRECTIONS: u32 = 5;
pub const COLOUR_PLATES: u32 = 6;

/// Correct answers in each part of the visual screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisualScores {
    pub letters: u32,
    pub points: u32,
    pub colours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VisualConcept {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Bueno")]
    Good,
    #[serde(rename = "Revisión Sugerida")]
    ReviewSuggested,
}

impl VisualConcept {
    pub fn label(self) -> &'static str {
        match self {
            VisualConcept::Excellent => "Excelente",
            VisualConcept::Good => "Bueno",
            VisualConcept::ReviewSuggested => "Revisión Sugerida",
        }
    }
}

impl VisualScores {
    pub fn validate(&self) -> Result<(), InstrumentError> {
        for (test, value, max) in [
            ("letters", self.letters, LETTER_PLATES),
            ("points", self.points, POINT_DIRECTIONS),
            ("colours", self.colours, COLOUR_PLATES),
        ] {
            if value > max {
                return Err(InstrumentError::OutOfRange {
                    screening: "visual".to_string(),
                    test: test.to_string(),
                    value,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Plates or directions answered wrongly across all three parts.
    pub fn failures(&self) -> u32 {
        LETTER_PLATES.saturating_sub(self.letters)
            + POINT_DIRECTIONS.saturating_sub(self.points)
            + COLOUR_PLATES.saturating_sub(self.colours)
    }

    pub fn concept(&self) -> VisualConcept {
        match self.failures() {
            0..=2 => VisualConcept::Excellent,
            3..=4 => VisualConcept::Good,
            _ => VisualConcept::ReviewSuggested,
        }
    }
}
