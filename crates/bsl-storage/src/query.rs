use std::cmp::Ordering;

use serde_json::Value;

/// A single field predicate.
///
/// Semantics follow the CMS the records were migrated from: a missing field
/// never satisfies `Eq`, `Ge`, `Le`, `In` or `Contains`, but always
/// satisfies `Ne`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { field: String, value: Value },
    Ne { field: String, value: Value },
    Ge { field: String, value: Value },
    Le { field: String, value: Value },
    In { field: String, values: Vec<Value> },
    /// Case-insensitive substring match on string fields.
    Contains { field: String, needle: String },
}

impl Filter {
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Filter::Eq { field, value } => record
                .get(field)
                .is_some_and(|actual| values_equal(actual, value)),
            Filter::Ne { field, value } => record
                .get(field)
                .is_none_or(|actual| !values_equal(actual, value)),
            Filter::Ge { field, value } => record
                .get(field)
                .and_then(|actual| compare_values(actual, value))
                .is_some_and(|ord| ord != Ordering::Less),
            Filter::Le { field, value } => record
                .get(field)
                .and_then(|actual| compare_values(actual, value))
                .is_some_and(|ord| ord != Ordering::Greater),
            Filter::In { field, values } => record
                .get(field)
                .is_some_and(|actual| values.iter().any(|v| values_equal(actual, v))),
            Filter::Contains { field, needle } => record
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&needle.to_lowercase())),
        }
    }
}

/// A filtered selection over one collection.
///
/// Built fluently, then handed to [`crate::store::RecordStore::find`]:
///
/// ```
/// use bsl_storage::query::Query;
///
/// let query = Query::new("CHATBOT")
///     .ge("fechaAtencion", "2025-03-01T14:45:00Z")
///     .le("fechaAtencion", "2025-03-01T16:00:00Z")
///     .ne("atendido", "ATENDIDO")
///     .ascending("fechaAtencion");
/// assert_eq!(query.filters().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    collection: String,
    filters: Vec<Filter>,
    sort: Option<String>,
    limit: Option<usize>,
}

impl Query {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            sort: None,
            limit: None,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn ne(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Ne {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn ge(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Ge {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn le(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Le {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn is_in<V: Into<Value>>(
        mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.filters.push(Filter::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn contains(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.filters.push(Filter::Contains {
            field: field.into(),
            needle: needle.into(),
        });
        self
    }

    pub fn ascending(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, record: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    /// Filter, sort and truncate a full collection scan.
    ///
    /// Records missing the sort field sort last.
    pub fn apply(&self, records: impl IntoIterator<Item = Value>) -> Vec<Value> {
        let mut selected: Vec<Value> = records.into_iter().filter(|r| self.matches(r)).collect();

        if let Some(field) = &self.sort {
            selected.sort_by(|a, b| match (a.get(field), b.get(field)) {
                (Some(x), Some(y)) => compare_values(x, y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

/// Order two field values.
///
/// Strings that both parse as RFC 3339 timestamps compare chronologically,
/// so `2025-03-01T10:00:00-05:00` sorts after `2025-03-01T14:30:00Z`.
/// Values of different kinds are unordered.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => {
            match (x.parse::<jiff::Timestamp>(), y.parse::<jiff::Timestamp>()) {
                (Ok(x), Ok(y)) => Some(x.cmp(&y)),
                _ => Some(x.cmp(y)),
            }
        }
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    a == b || compare_values(a, b) == Some(Ordering::Equal)
}
