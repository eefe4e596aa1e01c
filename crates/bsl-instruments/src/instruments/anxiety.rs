use std::sync::LazyLock;

use bsl_core::models::questionnaire::QuestionnaireResponse;

use crate::scoring::{
    Band, BandPredicate, BandTable, Baremo, Item, Polarity, Subscale, score_banded,
};
use crate::{Instrument, ScoreResult};

/// Company whose anxiety verdict uses a wider "normal" band.
pub const WIDE_NORMAL_COMPANY: &str = "SITEL";

const LOW: Band = Band {
    label: "Ansiedad Baja. Apto",
    admissible: true,
};
const NORMAL: Band = Band {
    label: "Ansiedad Normal. Apto",
    admissible: true,
};
const HIGH: Band = Band {
    label: "Ansiedad Alta. No Apto",
    admissible: false,
};

/// Anxiety scale: 20 items over four components, 5 items each.
pub struct Anxiety;

static SUBSCALES: LazyLock<Vec<Subscale>> = LazyLock::new(|| {
    vec![
        Subscale::new(
            "afectivo",
            "Afectivo",
            &[8, 9, 10, 12, 13, 14, 15, 17, 18, 19, 20, 22, 23, 24, 25, 27],
        ),
        Subscale::new(
            "cognitiva",
            "Cognitiva",
            &[7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22],
        ),
        Subscale::new(
            "conductual",
            "Conductual",
            &[3, 5, 6, 8, 9, 11, 12, 13, 15, 16, 18, 19, 21, 22, 24, 25],
        ),
        Subscale::new(
            "fisiologica",
            "Fisiológica",
            &[8, 9, 10, 11, 13, 14, 15, 17, 18, 19, 20, 22, 23, 24, 26, 27],
        ),
    ]
});

static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    use Polarity::{Agreement as DA, Disagreement as DE};
    [
        ("an18", DE, "afectivo"),
        ("an19", DA, "afectivo"),
        ("an20", DA, "afectivo"),
        ("an31", DE, "afectivo"),
        ("an35", DE, "afectivo"),
        ("an03", DA, "cognitiva"),
        ("an04", DE, "cognitiva"),
        ("an05", DA, "cognitiva"),
        ("an22", DA, "cognitiva"),
        ("an23", DE, "cognitiva"),
        ("an11", DA, "conductual"),
        ("an14", DA, "conductual"),
        ("an36", DE, "conductual"),
        ("an38", DA, "conductual"),
        ("an39", DA, "conductual"),
        ("an07", DA, "fisiologica"),
        ("an09", DA, "fisiologica"),
        ("an26", DE, "fisiologica"),
        ("an27", DA, "fisiologica"),
        ("an30", DE, "fisiologica"),
    ]
    .into_iter()
    .map(|(code, polarity, subscale)| Item::new(code, polarity, subscale))
    .collect()
});

// Raw totals 0..=49.
static TOTAL: LazyLock<Baremo> = LazyLock::new(|| {
    Baremo::new(&[
        6, 6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 11, 11, 11, 12, 12, 12, 13, 13, 13, 14, 14, 15,
        15, 15, 16, 16, 16, 17, 17, 17, 18, 18, 19, 19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22,
        23, 23, 24,
    ])
});

// Rules are checked in order, so the normal band [8, 17] shadows the
// high rule up to 17 and only 18 and above read as high.
static WIDE_NORMAL_BANDS: LazyLock<BandTable> = LazyLock::new(|| BandTable {
    rules: vec![
        (BandPredicate::Between(1, 7), LOW),
        (BandPredicate::Between(8, 17), NORMAL),
        (BandPredicate::Above(14), HIGH),
    ],
    otherwise: NORMAL,
});

static STANDARD_BANDS: LazyLock<BandTable> = LazyLock::new(|| BandTable {
    rules: vec![
        (BandPredicate::Between(1, 7), LOW),
        (BandPredicate::Between(8, 13), NORMAL),
        (BandPredicate::Above(13), HIGH),
    ],
    otherwise: NORMAL,
});

impl Anxiety {
    pub fn bands_for(company: Option<&str>) -> &'static BandTable {
        if company == Some(WIDE_NORMAL_COMPANY) {
            &WIDE_NORMAL_BANDS
        } else {
            &STANDARD_BANDS
        }
    }
}

impl Instrument for Anxiety {
    fn id(&self) -> &str {
        "anxiety"
    }

    fn name(&self) -> &str {
        "Ansiedad"
    }

    fn subscales(&self) -> &[Subscale] {
        &SUBSCALES
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn bands(&self, company: Option<&str>) -> Option<&'static BandTable> {
        Some(Self::bands_for(company))
    }

    fn score_response(&self, response: &QuestionnaireResponse, company: Option<&str>) -> ScoreResult {
        ScoreResult::Banded(score_banded(
            self.id(),
            self.subscales(),
            self.items(),
            &TOTAL,
            Self::bands_for(company),
            response,
        ))
    }
}
