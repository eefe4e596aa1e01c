use std::sync::LazyLock;

use bsl_core::models::questionnaire::QuestionnaireResponse;
use serde::Serialize;
use ts_rs::TS;

use crate::scoring::{Item, Polarity, ScoredDimension, Subscale, tally};
use crate::{Instrument, ScoreResult};

/// Life areas in which appraisal ("valoración") is compared against
/// behaviour ("conducta").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum CongruenceArea {
    #[serde(rename = "CongruenciaFamilia")]
    Family,
    #[serde(rename = "CongruenciaRelacion")]
    Relationships,
    #[serde(rename = "CongruenciaAutocuidado")]
    SelfCare,
    #[serde(rename = "CongruenciaOcupacional")]
    Occupational,
}

impl CongruenceArea {
    pub const ALL: [CongruenceArea; 4] = [
        CongruenceArea::Family,
        CongruenceArea::Relationships,
        CongruenceArea::SelfCare,
        CongruenceArea::Occupational,
    ];

    fn subscale_ids(self) -> (&'static str, &'static str) {
        match self {
            CongruenceArea::Family => ("familia_valoracion", "familia_conducta"),
            CongruenceArea::Relationships => ("relacion_valoracion", "relacion_conducta"),
            CongruenceArea::SelfCare => ("autocuidado_valoracion", "autocuidado_conducta"),
            CongruenceArea::Occupational => ("ocupacional_valoracion", "ocupacional_conducta"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum CongruenceLevel {
    #[serde(rename = "MUY ALTO")]
    VeryHigh,
    #[serde(rename = "ALTO")]
    High,
    #[serde(rename = "MEDIO ALTO")]
    MediumHigh,
    #[serde(rename = "MEDIO BAJO")]
    MediumLow,
    #[serde(rename = "BAJO")]
    Low,
    #[serde(rename = "MUY BAJO")]
    VeryLow,
}

impl CongruenceLevel {
    pub fn label(self) -> &'static str {
        match self {
            CongruenceLevel::VeryHigh => "MUY ALTO",
            CongruenceLevel::High => "ALTO",
            CongruenceLevel::MediumHigh => "MEDIO ALTO",
            CongruenceLevel::MediumLow => "MEDIO BAJO",
            CongruenceLevel::Low => "BAJO",
            CongruenceLevel::VeryLow => "MUY BAJO",
        }
    }
}

/// One area's appraisal and behaviour scores and the level read from the
/// matrix. `level` is `None` when the pair falls in no matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AreaCongruence {
    pub area: CongruenceArea,
    pub appraisal: ScoredDimension,
    pub behaviour: ScoredDimension,
    pub level: Option<CongruenceLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CongruenceScore {
    pub areas: Vec<AreaCongruence>,
}

impl CongruenceScore {
    pub fn level(&self, area: CongruenceArea) -> Option<CongruenceLevel> {
        self.areas
            .iter()
            .find(|a| a.area == area)
            .and_then(|a| a.level)
    }
}

pub struct Congruence;

static SUBSCALES: LazyLock<Vec<Subscale>> = LazyLock::new(|| {
    vec![
        Subscale::new(
            "familia_valoracion",
            "Familia (valoración)",
            &[-4, -2, 1, 4, 6, 9, 11, 14, 17, 19],
        ),
        Subscale::new(
            "familia_conducta",
            "Familia (conducta)",
            &[4, 5, 7, 8, 10, 11, 13, 14, 16, 17],
        ),
        Subscale::new(
            "relacion_valoracion",
            "Relación (valoración)",
            &[-2, 1, 3, 5, 8, 10, 12, 15, 17, 19],
        ),
        Subscale::new(
            "relacion_conducta",
            "Relación (conducta)",
            &[3, 5, 7, 8, 10, 12, 13, 15, 16, 18],
        ),
        Subscale::new(
            "autocuidado_valoracion",
            "Autocuidado (valoración)",
            &[-8, -5, -2, 2, 5, 8, 12, 15, 18, 22],
        ),
        Subscale::new(
            "autocuidado_conducta",
            "Autocuidado (conducta)",
            &[3, 4, 6, 8, 10, 11, 13, 15, 17, 18],
        ),
        Subscale::new(
            "ocupacional_valoracion",
            "Ocupacional (valoración)",
            &[-3, 0, 2, 5, 7, 10, 12, 15, 17, 20],
        ),
        Subscale::new(
            "ocupacional_conducta",
            "Ocupacional (conducta)",
            &[-1, 1, 4, 6, 8, 10, 12, 15, 17, 19],
        ),
    ]
});

static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    use Polarity::{Agreement as DA, Disagreement as DE};
    [
        ("cofv01", DA, "familia_valoracion"),
        ("cofv02", DE, "familia_valoracion"),
        ("cofv03", DA, "familia_valoracion"),
        ("cofc06", DE, "familia_conducta"),
        ("cofc08", DE, "familia_conducta"),
        ("cofc10", DE, "familia_conducta"),
        ("corv11", DA, "relacion_valoracion"),
        ("corv12", DE, "relacion_valoracion"),
        ("corv15", DA, "relacion_valoracion"),
        ("corc16", DE, "relacion_conducta"),
        ("corc17", DE, "relacion_conducta"),
        ("corc18", DE, "relacion_conducta"),
        ("coav21", DA, "autocuidado_valoracion"),
        ("coav24", DA, "autocuidado_valoracion"),
        ("coav25", DA, "autocuidado_valoracion"),
        ("coac26", DA, "autocuidado_conducta"),
        ("coac27", DE, "autocuidado_conducta"),
        ("coac29", DA, "autocuidado_conducta"),
        ("coov32", DA, "ocupacional_valoracion"),
        ("coov34", DA, "ocupacional_valoracion"),
        ("coov35", DE, "ocupacional_valoracion"),
        ("cooc37", DA, "ocupacional_conducta"),
        ("cooc39", DE, "ocupacional_conducta"),
        ("cooc40", DA, "ocupacional_conducta"),
    ]
    .into_iter()
    .map(|(code, polarity, subscale)| Item::new(code, polarity, subscale))
    .collect()
});

type Range = (i32, i32);

const BEHAVIOUR_BANDS: [Range; 6] = [(0, 3), (5, 7), (8, 10), (11, 13), (14, 16), (17, 40)];

/// Appraisal band, then the level for each behaviour band in
/// `BEHAVIOUR_BANDS` order. Rows are searched top to bottom; the first
/// cell containing both scores wins.
static MATRIX: LazyLock<Vec<(Range, [CongruenceLevel; 6])>> = LazyLock::new(|| {
    use CongruenceLevel::{
        High as A, Low as B, MediumHigh as MA, MediumLow as MB, VeryHigh as MUA, VeryLow as MUB,
    };
    vec![
        ((0, 3), [MUA, A, MA, MB, B, MUB]),
        ((-5, 4), [MUA, A, MA, MB, B, MUB]),
        ((5, 7), [A, MUA, A, MA, MB, B]),
        ((8, 10), [MA, A, MUA, A, MA, MB]),
        ((11, 13), [MB, MA, A, MUA, A, MA]),
        ((14, 16), [B, MB, MA, A, MUA, A]),
        ((17, 40), [MUB, B, MB, MA, A, MUA]),
    ]
});

fn in_range((min, max): Range, value: i32) -> bool {
    (min..=max).contains(&value)
}

/// Look up the congruence level for an appraisal/behaviour pair of scaled
/// scores.
pub fn lookup(appraisal: i32, behaviour: i32) -> Option<CongruenceLevel> {
    MATRIX
        .iter()
        .filter(|(row, _)| in_range(*row, appraisal))
        .flat_map(|(_, levels)| BEHAVIOUR_BANDS.iter().zip(levels))
        .find(|(band, _)| in_range(**band, behaviour))
        .map(|(_, level)| *level)
}

impl Congruence {
    pub fn score_areas(&self, response: &QuestionnaireResponse) -> CongruenceScore {
        let dimensions = tally(self.id(), self.subscales(), self.items(), response);
        let find = |id: &str| {
            dimensions
                .iter()
                .find(|d| d.id == id)
                .cloned()
                .unwrap_or_else(|| ScoredDimension {
                    id: id.to_string(),
                    raw_total: 0,
                    scaled_score: 0,
                })
        };

        let areas = CongruenceArea::ALL
            .into_iter()
            .map(|area| {
                let (appraisal_id, behaviour_id) = area.subscale_ids();
                let appraisal = find(appraisal_id);
                let behaviour = find(behaviour_id);
                let level = lookup(appraisal.scaled_score, behaviour.scaled_score);
                if level.is_none() {
                    tracing::debug!(
                        area = ?area,
                        appraisal = appraisal.scaled_score,
                        behaviour = behaviour.scaled_score,
                        "no congruence cell for score pair"
                    );
                }
                AreaCongruence {
                    area,
                    appraisal,
                    behaviour,
                    level,
                }
            })
            .collect();

        CongruenceScore { areas }
    }
}

impl Instrument for Congruence {
    fn id(&self) -> &str {
        "congruence"
    }

    fn name(&self) -> &str {
        "Congruencia"
    }

    fn subscales(&self) -> &[Subscale] {
        &SUBSCALES
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn score_response(&self, response: &QuestionnaireResponse, _company: Option<&str>) -> ScoreResult {
        ScoreResult::Congruence(self.score_areas(response))
    }
}
