use bsl_core::models::questionnaire::QuestionnaireResponse;
use bsl_instruments::scoring::{
    Band, BandPredicate, BandTable, Baremo, Item, LikertAnswer, Polarity, Subscale, map_answer,
    tally,
};

#[test]
fn agreement_items_score_agreement_highest() {
    assert_eq!(map_answer("De acuerdo", Polarity::Agreement), Some(3));
    assert_eq!(map_answer("Medianamente de acuerdo", Polarity::Agreement), Some(2));
    assert_eq!(map_answer("Medianamente en desacuerdo", Polarity::Agreement), Some(1));
    assert_eq!(map_answer("En desacuerdo", Polarity::Agreement), Some(0));
}

#[test]
fn disagreement_items_are_reversed() {
    for answer in LikertAnswer::ALL {
        assert_eq!(
            answer.points(Polarity::Agreement) + answer.points(Polarity::Disagreement),
            3
        );
    }
    assert_eq!(map_answer("En desacuerdo", Polarity::Disagreement), Some(3));
}

#[test]
fn labels_match_exactly() {
    assert_eq!(map_answer("de acuerdo", Polarity::Agreement), None);
    assert_eq!(map_answer(" De acuerdo", Polarity::Agreement), None);
    assert_eq!(map_answer("", Polarity::Agreement), None);
}

#[test]
fn baremo_past_the_table_scales_to_zero() {
    let baremo = Baremo::new(&[-2, 4, 9]);
    assert_eq!(baremo.scale(0), -2);
    assert_eq!(baremo.scale(2), 9);
    assert_eq!(baremo.scale(3), 0);
    assert_eq!(baremo.scale(u32::MAX), 0);
}

#[test]
fn band_rules_are_checked_in_order() {
    let table = BandTable {
        rules: vec![
            (
                BandPredicate::Between(0, 10),
                Band {
                    label: "first",
                    admissible: true,
                },
            ),
            (
                BandPredicate::Above(5),
                Band {
                    label: "second",
                    admissible: false,
                },
            ),
        ],
        otherwise: Band {
            label: "fallback",
            admissible: true,
        },
    };

    assert_eq!(table.classify(7).label, "first");
    assert_eq!(table.classify(11).label, "second");
    assert!(!table.classify(11).admissible);
    assert_eq!(table.classify(-1).label, "fallback");
    assert_eq!(table.classify(-1).numeric_score, -1);
}

#[test]
fn tally_sums_per_subscale_and_ignores_bad_answers() {
    let subscales = vec![
        Subscale::new("a", "A", &[10, 11, 12, 13, 14, 15, 16]),
        Subscale::new("b", "B", &[20, 21, 22, 23]),
    ];
    let items = vec![
        Item::new("q1", Polarity::Agreement, "a"),
        Item::new("q2", Polarity::Disagreement, "a"),
        Item::new("q3", Polarity::Agreement, "b"),
        Item::new("q4", Polarity::Agreement, "nowhere"),
    ];
    let response: QuestionnaireResponse = [
        ("q1", "De acuerdo"),
        ("q2", "Medianamente de acuerdo"),
        ("q3", "Tal vez"),
        ("q4", "De acuerdo"),
    ]
    .into_iter()
    .collect();

    let dims = tally("test", &subscales, &items, &response);

    assert_eq!(dims.len(), 2);
    assert_eq!(dims[0].id, "a");
    assert_eq!(dims[0].raw_total, 4);
    assert_eq!(dims[0].scaled_score, 14);
    assert_eq!(dims[1].raw_total, 0);
    assert_eq!(dims[1].scaled_score, 20);
}
