use bsl_storage::query::{Query, compare_values};
use serde_json::json;
use std::cmp::Ordering;

#[test]
fn ne_matches_records_missing_the_field() {
    let query = Query::new("CHATBOT").ne("atendido", "ATENDIDO");
    assert!(query.matches(&json!({ "_id": "a" })));
    assert!(query.matches(&json!({ "_id": "a", "atendido": "PENDIENTE" })));
    assert!(!query.matches(&json!({ "_id": "a", "atendido": "ATENDIDO" })));
}

#[test]
fn range_filters_compare_timestamps_chronologically() {
    let query = Query::new("CHATBOT")
        .ge("fechaAtencion", "2025-03-01T14:45:00Z")
        .le("fechaAtencion", "2025-03-01T16:00:00Z");

    // 10:00 in Bogotá is 15:00 UTC
    assert!(query.matches(&json!({ "fechaAtencion": "2025-03-01T10:00:00-05:00" })));
    assert!(query.matches(&json!({ "fechaAtencion": "2025-03-01T14:45:00Z" })));
    assert!(query.matches(&json!({ "fechaAtencion": "2025-03-01T16:00:00Z" })));
    assert!(!query.matches(&json!({ "fechaAtencion": "2025-03-01T16:00:01Z" })));
    assert!(!query.matches(&json!({ "otherField": 1 })));
}

#[test]
fn contains_is_case_insensitive() {
    let query = Query::new("HistoriaClinica").contains("medico", "NUBIA");
    assert!(query.matches(&json!({ "medico": "Dra. Nubia Restrepo" })));
    assert!(!query.matches(&json!({ "medico": "JUAN" })));
    assert!(!query.matches(&json!({ "medico": 7 })));
}

#[test]
fn is_in_matches_any_listed_value() {
    let query = Query::new("HistoriaClinica").is_in("codEmpresa", ["SIIGO", "MASIN"]);
    assert!(query.matches(&json!({ "codEmpresa": "MASIN" })));
    assert!(!query.matches(&json!({ "codEmpresa": "SITEL" })));
    assert!(!query.matches(&json!({})));
}

#[test]
fn apply_sorts_and_limits() {
    let records = vec![
        json!({ "_id": "late", "fechaAtencion": "2025-03-01T16:00:00Z" }),
        json!({ "_id": "none" }),
        json!({ "_id": "early", "fechaAtencion": "2025-03-01T09:00:00-05:00" }),
        json!({ "_id": "mid", "fechaAtencion": "2025-03-01T15:00:00Z" }),
    ];

    let ids: Vec<_> = Query::new("CHATBOT")
        .ascending("fechaAtencion")
        .limit(3)
        .apply(records)
        .into_iter()
        .map(|r| r["_id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(ids, vec!["early", "mid", "late"]);
}

#[test]
fn numbers_and_strings_do_not_compare() {
    assert_eq!(compare_values(&json!(1), &json!("1")), None);
    assert_eq!(compare_values(&json!(2), &json!(10)), Some(Ordering::Less));
    assert_eq!(compare_values(&json!("b"), &json!("a")), Some(Ordering::Greater));
}
