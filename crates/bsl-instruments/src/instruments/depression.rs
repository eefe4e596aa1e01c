use std::sync::LazyLock;

use bsl_core::models::questionnaire::QuestionnaireResponse;

use crate::scoring::{
    Band, BandPredicate, BandTable, Baremo, Item, Polarity, Subscale, score_banded,
};
use crate::{Instrument, ScoreResult};

/// Depression scale: 21 items over three perspectives (future, world, self).
pub struct Depression;

static SUBSCALES: LazyLock<Vec<Subscale>> = LazyLock::new(|| {
    vec![
        Subscale::new(
            "futuro",
            "Futuro",
            &[
                8, 10, 11, 12, 13, 15, 16, 17, 18, 20, 21, 22, 23, 25, 26, 27, 28, 30, 31, 32, 34,
                35,
            ],
        ),
        Subscale::new(
            "mundo",
            "Mundo",
            &[
                8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
                28,
            ],
        ),
        Subscale::new(
            "ti_mismo",
            "Ti mismo",
            &[
                8, 10, 11, 12, 14, 15, 16, 18, 19, 20, 21, 23, 24, 25, 27, 28, 29, 31, 32, 33, 35,
                36,
            ],
        ),
    ]
});

static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    use Polarity::{Agreement as DA, Disagreement as DE};
    [
        ("de08", DE, "futuro"),
        ("de12", DA, "futuro"),
        ("de13", DE, "futuro"),
        ("de35", DE, "futuro"),
        ("de37", DE, "futuro"),
        ("de38", DA, "futuro"),
        ("de40", DE, "futuro"),
        ("de14", DA, "mundo"),
        ("de15", DA, "mundo"),
        ("de16", DA, "mundo"),
        ("de20", DA, "mundo"),
        ("de29", DA, "mundo"),
        ("de32", DA, "mundo"),
        ("de33", DA, "mundo"),
        ("de03", DA, "ti_mismo"),
        ("de04", DE, "ti_mismo"),
        ("de05", DA, "ti_mismo"),
        ("de06", DA, "ti_mismo"),
        ("de07", DA, "ti_mismo"),
        ("de21", DE, "ti_mismo"),
        ("de27", DE, "ti_mismo"),
    ]
    .into_iter()
    .map(|(code, polarity, subscale)| Item::new(code, polarity, subscale))
    .collect()
});

// Raw totals 0..=63; everything from 49 up saturates at 29.
static TOTAL: LazyLock<Baremo> = LazyLock::new(|| {
    let mut scaled = vec![
        8, 8, 9, 9, 10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, 16, 17, 17,
        18, 18, 19, 19, 19, 20, 20, 21, 21, 22, 22, 22, 23, 23, 24, 24, 25, 25, 25, 26, 26, 27,
        27, 27, 28, 28,
    ];
    scaled.resize(64, 29);
    Baremo { scaled }
});

static BANDS: LazyLock<BandTable> = LazyLock::new(|| BandTable {
    rules: vec![
        (
            BandPredicate::Between(1, 7),
            Band {
                label: "Bajo. Apto",
                admissible: true,
            },
        ),
        (
            BandPredicate::Between(8, 17),
            Band {
                label: "Sin Depresión. Apto",
                admissible: true,
            },
        ),
        (
            BandPredicate::Above(17),
            Band {
                label: "Riesgo Alto. No Apto",
                admissible: false,
            },
        ),
    ],
    otherwise: Band {
        label: "Sin Depresión. Autovaloración adecuada",
        admissible: true,
    },
});

impl Instrument for Depression {
    fn id(&self) -> &str {
        "depression"
    }

    fn name(&self) -> &str {
        "Depresión"
    }

    fn subscales(&self) -> &[Subscale] {
        &SUBSCALES
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn bands(&self, _company: Option<&str>) -> Option<&'static BandTable> {
        Some(&BANDS)
    }

    fn score_response(&self, response: &QuestionnaireResponse, _company: Option<&str>) -> ScoreResult {
        ScoreResult::Banded(score_banded(
            self.id(),
            self.subscales(),
            self.items(),
            &TOTAL,
            &BANDS,
            response,
        ))
    }
}
