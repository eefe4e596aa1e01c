//! bsl-instruments
//!
//! Psychometric and screening instruments used in the occupational exam.
//! Pure scoring logic with no storage or network dependency: item keys,
//! norm tables (baremos), interpretation bands and the congruence matrix.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod screening;

use bsl_core::models::questionnaire::QuestionnaireResponse;
use serde::Serialize;
use ts_rs::TS;

use error::InstrumentError;
use instruments::congruence::CongruenceScore;
use scoring::{BandTable, BandedScore, Item, ScoredDimension, Subscale};

/// Trait implemented by each psychometric instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "anxiety", "congruence").
    fn id(&self) -> &str;

    /// Display name as printed on the certificate.
    fn name(&self) -> &str;

    /// Subscales in reporting order, each with its norm table.
    fn subscales(&self) -> &[Subscale];

    /// Answer key: item code, polarity and target subscale.
    fn items(&self) -> &[Item];

    /// Interpretation bands applied to the grand scaled score for
    /// `company`. `None` for instruments that are not read through bands.
    fn bands(&self, _company: Option<&str>) -> Option<&'static BandTable> {
        None
    }

    /// Score a non-empty response. `company` selects company-specific
    /// interpretation bands where an instrument has them.
    fn score_response(&self, response: &QuestionnaireResponse, company: Option<&str>) -> ScoreResult;

    /// Score a response that may not exist. An absent or empty response
    /// means the subject never took the battery.
    fn score(&self, response: Option<&QuestionnaireResponse>, company: Option<&str>) -> ScoreOutcome {
        match response {
            Some(response) if !response.is_empty() => {
                ScoreOutcome::Scored(self.score_response(response, company))
            }
            _ => ScoreOutcome::NotTaken,
        }
    }

    /// Raw and scaled totals per subscale, without interpretation.
    fn tally(&self, response: &QuestionnaireResponse) -> Vec<ScoredDimension> {
        scoring::tally(self.id(), self.subscales(), self.items(), response)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreResult {
    Banded(BandedScore),
    Congruence(CongruenceScore),
}

/// Outcome of scoring a subject who may not have answered the battery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreOutcome {
    NotTaken,
    Scored(ScoreResult),
}

impl ScoreOutcome {
    pub fn is_taken(&self) -> bool {
        matches!(self, ScoreOutcome::Scored(_))
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::anxiety::Anxiety),
        Box::new(instruments::depression::Depression),
        Box::new(instruments::congruence::Congruence),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Score `response` with the instrument named `id`.
pub fn score(
    id: &str,
    response: Option<&QuestionnaireResponse>,
    company: Option<&str>,
) -> Result<ScoreOutcome, InstrumentError> {
    let instrument =
        get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?;
    Ok(instrument.score(response, company))
}
