use bsl_core::models::questionnaire::QuestionnaireResponse;
use bsl_instruments::instruments::anxiety::Anxiety;
use bsl_instruments::scoring::BandedScore;
use bsl_instruments::{Instrument, ScoreOutcome, ScoreResult};

const AGREEMENT_ITEMS: [&str; 12] = [
    "an19", "an20", "an03", "an05", "an22", "an11", "an14", "an38", "an39", "an07", "an09",
    "an27",
];

fn agree_with(codes: &[&str]) -> QuestionnaireResponse {
    codes.iter().map(|c| (*c, "De acuerdo")).collect()
}

fn banded(outcome: ScoreOutcome) -> BandedScore {
    match outcome {
        ScoreOutcome::Scored(ScoreResult::Banded(score)) => score,
        other => panic!("expected a banded score, got {other:?}"),
    }
}

#[test]
fn missing_response_is_not_taken() {
    assert_eq!(Anxiety.score(None, None), ScoreOutcome::NotTaken);
    let empty = QuestionnaireResponse::default();
    assert_eq!(Anxiety.score(Some(&empty), None), ScoreOutcome::NotTaken);
}

#[test]
fn all_agree_scores_high() {
    let codes: Vec<String> = Anxiety.items().iter().map(|i| i.code.clone()).collect();
    let response: QuestionnaireResponse =
        codes.iter().map(|c| (c.as_str(), "De acuerdo")).collect();

    let score = banded(Anxiety.score(Some(&response), None));

    let raw: Vec<u32> = score.subscales.iter().map(|d| d.raw_total).collect();
    let scaled: Vec<i32> = score.subscales.iter().map(|d| d.scaled_score).collect();
    assert_eq!(raw, vec![6, 9, 12, 9]);
    assert_eq!(scaled, vec![15, 16, 21, 19]);
    assert_eq!(score.total.raw_total, 36);
    assert_eq!(score.interpretation.numeric_score, 19);
    assert_eq!(score.interpretation.label, "Ansiedad Alta. No Apto");
    assert!(!score.interpretation.admissible);
}

#[test]
fn fifteen_to_seventeen_are_normal_only_for_the_wide_company() {
    // Each agreement item adds 3 raw points: raw 24, 27, 30 scale to 15, 16, 17.
    for (count, scaled) in [(8, 15), (9, 16), (10, 17)] {
        let response = agree_with(&AGREEMENT_ITEMS[..count]);

        let wide = banded(Anxiety.score(Some(&response), Some("SITEL")));
        assert_eq!(wide.interpretation.numeric_score, scaled);
        assert_eq!(wide.interpretation.label, "Ansiedad Normal. Apto", "SITEL {scaled}");
        assert!(wide.interpretation.admissible);

        for company in [Some("ACME"), None] {
            let score = banded(Anxiety.score(Some(&response), company));
            assert_eq!(score.interpretation.numeric_score, scaled);
            assert_eq!(score.interpretation.label, "Ansiedad Alta. No Apto", "{company:?} {scaled}");
            assert!(!score.interpretation.admissible);
        }
    }
}

#[test]
fn wide_bands_classify_in_rule_order() {
    let bands = Anxiety::bands_for(Some("SITEL"));
    for scaled in 8..=17 {
        assert_eq!(bands.classify(scaled).label, "Ansiedad Normal. Apto", "{scaled}");
    }
    assert_eq!(bands.classify(18).label, "Ansiedad Alta. No Apto");
    assert_eq!(bands.classify(3).label, "Ansiedad Baja. Apto");
}

#[test]
fn scaled_fourteen_depends_on_company() {
    // Seven items at 3 points and one at 1: raw 22, scaled 14.
    let mut response = agree_with(&AGREEMENT_ITEMS[..7]);
    response
        .answers
        .insert(AGREEMENT_ITEMS[7].to_string(), "Medianamente en desacuerdo".to_string());

    let standard = banded(Anxiety.score(Some(&response), Some("ACME")));
    assert_eq!(standard.total.raw_total, 22);
    assert_eq!(standard.interpretation.numeric_score, 14);
    assert_eq!(standard.interpretation.label, "Ansiedad Alta. No Apto");

    let wide = banded(Anxiety.score(Some(&response), Some("SITEL")));
    assert_eq!(wide.interpretation.numeric_score, 14);
    assert_eq!(wide.interpretation.label, "Ansiedad Normal. Apto");
    assert!(wide.interpretation.admissible);
}

#[test]
fn wide_normal_company_still_flags_eighteen() {
    // Raw 33 scales to 18.
    let response = agree_with(&AGREEMENT_ITEMS[..11]);
    let score = banded(Anxiety.score(Some(&response), Some("SITEL")));
    assert_eq!(score.total.raw_total, 33);
    assert_eq!(score.interpretation.numeric_score, 18);
    assert_eq!(score.interpretation.label, "Ansiedad Alta. No Apto");
}

#[test]
fn unrecognised_answers_score_as_zero() {
    let response: QuestionnaireResponse = [("an03", "Quizás")].into_iter().collect();
    let score = banded(Anxiety.score(Some(&response), None));
    assert_eq!(score.total.raw_total, 0);
    assert_eq!(score.interpretation.numeric_score, 6);
    assert_eq!(score.interpretation.label, "Ansiedad Baja. Apto");
}

#[test]
fn raw_total_past_norm_table_falls_back_to_normal() {
    let response: QuestionnaireResponse = Anxiety
        .items()
        .iter()
        .map(|item| {
            let answer = match item.polarity {
                bsl_instruments::scoring::Polarity::Agreement => "De acuerdo",
                bsl_instruments::scoring::Polarity::Disagreement => "En desacuerdo",
            };
            (item.code.clone(), answer.to_string())
        })
        .collect();

    let score = banded(Anxiety.score(Some(&response), None));
    assert_eq!(score.total.raw_total, 60);
    assert_eq!(score.interpretation.numeric_score, 0);
    assert_eq!(score.interpretation.label, "Ansiedad Normal. Apto");
}
