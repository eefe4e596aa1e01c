use bsl_core::models::questionnaire::QuestionnaireResponse;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which end of the Likert scale carries the points for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Polarity {
    /// "De acuerdo" scores highest.
    #[serde(rename = "DA")]
    Agreement,
    /// "En desacuerdo" scores highest.
    #[serde(rename = "DE")]
    Disagreement,
}

/// The four answer labels every questionnaire item offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LikertAnswer {
    #[serde(rename = "De acuerdo")]
    Agree,
    #[serde(rename = "Medianamente de acuerdo")]
    SomewhatAgree,
    #[serde(rename = "Medianamente en desacuerdo")]
    SomewhatDisagree,
    #[serde(rename = "En desacuerdo")]
    Disagree,
}

impl LikertAnswer {
    pub const ALL: [LikertAnswer; 4] = [
        LikertAnswer::Agree,
        LikertAnswer::SomewhatAgree,
        LikertAnswer::SomewhatDisagree,
        LikertAnswer::Disagree,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LikertAnswer::Agree => "De acuerdo",
            LikertAnswer::SomewhatAgree => "Medianamente de acuerdo",
            LikertAnswer::SomewhatDisagree => "Medianamente en desacuerdo",
            LikertAnswer::Disagree => "En desacuerdo",
        }
    }

    /// Exact, case-sensitive match against the stored label.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }

    pub fn points(self, polarity: Polarity) -> u32 {
        let agreement = match self {
            LikertAnswer::Agree => 3,
            LikertAnswer::SomewhatAgree => 2,
            LikertAnswer::SomewhatDisagree => 1,
            LikertAnswer::Disagree => 0,
        };
        match polarity {
            Polarity::Agreement => agreement,
            Polarity::Disagreement => 3 - agreement,
        }
    }
}

/// Points for one answer label, or `None` when the label is not one of the
/// four recognised answers.
pub fn map_answer(label: &str, polarity: Polarity) -> Option<u32> {
    LikertAnswer::parse(label).map(|a| a.points(polarity))
}

/// One questionnaire item and the subscale it feeds.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub code: String,
    pub polarity: Polarity,
    pub subscale_id: String,
}

impl Item {
    pub fn new(code: &str, polarity: Polarity, subscale_id: &str) -> Self {
        Self {
            code: code.to_string(),
            polarity,
            subscale_id: subscale_id.to_string(),
        }
    }
}

/// Norm table converting a raw total into a scaled score.
///
/// Entry `n` is the scaled score for raw total `n`. Raw totals past the end
/// of the table scale to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Baremo {
    pub scaled: Vec<i32>,
}

impl Baremo {
    pub fn new(scaled: &[i32]) -> Self {
        Self {
            scaled: scaled.to_vec(),
        }
    }

    pub fn scale(&self, raw_total: u32) -> i32 {
        usize::try_from(raw_total)
            .ok()
            .and_then(|i| self.scaled.get(i))
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub baremo: Baremo,
}

impl Subscale {
    pub fn new(id: &str, name: &str, scaled: &[i32]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            baremo: Baremo::new(scaled),
        }
    }
}

/// Raw and scaled score for one subscale (or for a whole instrument).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ScoredDimension {
    pub id: String,
    pub raw_total: u32,
    pub scaled_score: i32,
}

/// Sum item points per subscale, in the order `subscales` lists them.
///
/// Missing or unrecognised answers contribute 0. Items naming a subscale
/// the instrument does not define are dropped with a warning.
pub fn tally(
    instrument_id: &str,
    subscales: &[Subscale],
    items: &[Item],
    response: &QuestionnaireResponse,
) -> Vec<ScoredDimension> {
    let mut raw = vec![0u32; subscales.len()];

    for item in items {
        let Some(slot) = subscales.iter().position(|s| s.id == item.subscale_id) else {
            tracing::warn!(
                instrument = instrument_id,
                item = %item.code,
                subscale = %item.subscale_id,
                "item references an unknown subscale"
            );
            continue;
        };

        let points = match response.answer(&item.code) {
            None => {
                tracing::debug!(instrument = instrument_id, item = %item.code, "item not answered");
                0
            }
            Some(label) => map_answer(label, item.polarity).unwrap_or_else(|| {
                tracing::warn!(
                    instrument = instrument_id,
                    item = %item.code,
                    answer = label,
                    "unrecognised answer label"
                );
                0
            }),
        };
        raw[slot] += points;
    }

    subscales
        .iter()
        .zip(raw)
        .map(|(subscale, raw_total)| ScoredDimension {
            id: subscale.id.clone(),
            raw_total,
            scaled_score: subscale.baremo.scale(raw_total),
        })
        .collect()
}

/// Condition a scaled score must satisfy for a band to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPredicate {
    /// Inclusive on both ends.
    Between(i32, i32),
    /// Strictly greater than.
    Above(i32),
}

impl BandPredicate {
    pub fn holds(self, score: i32) -> bool {
        match self {
            BandPredicate::Between(min, max) => (min..=max).contains(&score),
            BandPredicate::Above(threshold) => score > threshold,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub label: &'static str,
    pub admissible: bool,
}

/// Ordered interpretation rules. The first predicate that holds wins; if
/// none does, `otherwise` applies.
#[derive(Debug, Clone)]
pub struct BandTable {
    pub rules: Vec<(BandPredicate, Band)>,
    pub otherwise: Band,
}

impl BandTable {
    pub fn classify(&self, score: i32) -> Interpretation {
        let band = self
            .rules
            .iter()
            .find(|(predicate, _)| predicate.holds(score))
            .map(|(_, band)| *band)
            .unwrap_or(self.otherwise);
        Interpretation {
            numeric_score: score,
            label: band.label.to_string(),
            admissible: band.admissible,
        }
    }
}

/// Clinical reading of an overall scaled score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Interpretation {
    #[serde(rename = "valor")]
    pub numeric_score: i32,
    #[serde(rename = "interpretacion")]
    pub label: String,
    #[serde(rename = "apto")]
    pub admissible: bool,
}

/// Result of an instrument whose verdict comes from one overall score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct BandedScore {
    #[serde(flatten)]
    pub interpretation: Interpretation,
    pub total: ScoredDimension,
    pub subscales: Vec<ScoredDimension>,
}

/// Tally, sum the raw subscale totals, scale the sum with `total_baremo`,
/// and classify it.
pub fn score_banded(
    instrument_id: &str,
    subscales: &[Subscale],
    items: &[Item],
    total_baremo: &Baremo,
    bands: &BandTable,
    response: &QuestionnaireResponse,
) -> BandedScore {
    let dimensions = tally(instrument_id, subscales, items, response);
    let raw_total = dimensions.iter().map(|d| d.raw_total).sum();
    let scaled_total = total_baremo.scale(raw_total);

    BandedScore {
        interpretation: bands.classify(scaled_total),
        total: ScoredDimension {
            id: "total".to_string(),
            raw_total,
            scaled_score: scaled_total,
        },
        subscales: dimensions,
    }
}
