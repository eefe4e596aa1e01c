use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A subject's answers to the psychometric battery (`ADCTEST`), keyed by
/// question code (`an03`, `de12`, `cofv01`, ...).
///
/// Values are the free-text Likert labels exactly as submitted. Only
/// string-valued fields of the source record are kept; everything else
/// (ids, timestamps, the subject's document number) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireResponse {
    pub answers: BTreeMap<String, String>,
}

impl QuestionnaireResponse {
    pub fn from_record(record: &serde_json::Value) -> Result<Self, CoreError> {
        let object = record.as_object().ok_or(CoreError::NotAnObject)?;
        let answers = object
            .iter()
            .filter_map(|(code, value)| value.as_str().map(|v| (code.clone(), v.to_string())))
            .collect();
        Ok(Self { answers })
    }

    pub fn answer(&self, code: &str) -> Option<&str> {
        self.answers.get(code).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QuestionnaireResponse {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
