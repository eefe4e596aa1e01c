use bsl_core::models::questionnaire::QuestionnaireResponse;
use bsl_instruments::instruments::depression::Depression;
use bsl_instruments::scoring::BandedScore;
use bsl_instruments::{Instrument, ScoreOutcome, ScoreResult};

fn everyone_answers(answer: &str) -> QuestionnaireResponse {
    Depression
        .items()
        .iter()
        .map(|i| (i.code.clone(), answer.to_string()))
        .collect()
}

fn banded(outcome: ScoreOutcome) -> BandedScore {
    match outcome {
        ScoreOutcome::Scored(ScoreResult::Banded(score)) => score,
        other => panic!("expected a banded score, got {other:?}"),
    }
}

#[test]
fn all_agree_is_high_risk() {
    let score = banded(Depression.score(Some(&everyone_answers("De acuerdo")), None));

    let scaled: Vec<i32> = score.subscales.iter().map(|d| d.scaled_score).collect();
    assert_eq!(scaled, vec![16, 28, 24]);
    assert_eq!(score.total.raw_total, 39);
    assert_eq!(score.interpretation.numeric_score, 25);
    assert_eq!(score.interpretation.label, "Riesgo Alto. No Apto");
    assert!(!score.interpretation.admissible);
}

#[test]
fn all_disagree_uses_reversed_items() {
    let score = banded(Depression.score(Some(&everyone_answers("En desacuerdo")), None));

    let raw: Vec<u32> = score.subscales.iter().map(|d| d.raw_total).collect();
    assert_eq!(raw, vec![15, 0, 9]);
    assert_eq!(score.total.raw_total, 24);
    assert_eq!(score.interpretation.numeric_score, 18);
    assert_eq!(score.interpretation.label, "Riesgo Alto. No Apto");
}

#[test]
fn moderate_world_view_is_admissible() {
    let response: QuestionnaireResponse = ["de14", "de15", "de16", "de20", "de29", "de32", "de33"]
        .into_iter()
        .map(|c| (c, "Medianamente de acuerdo"))
        .collect();

    let score = banded(Depression.score(Some(&response), None));
    assert_eq!(score.total.raw_total, 14);
    assert_eq!(score.interpretation.numeric_score, 14);
    assert_eq!(score.interpretation.label, "Sin Depresión. Apto");
    assert!(score.interpretation.admissible);
}

#[test]
fn company_does_not_change_bands() {
    let response = everyone_answers("De acuerdo");
    assert_eq!(
        Depression.score(Some(&response), Some("SITEL")),
        Depression.score(Some(&response), None)
    );
}

#[test]
fn absent_record_is_not_taken() {
    assert!(!Depression.score(None, Some("SITEL")).is_taken());
}
