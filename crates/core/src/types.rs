use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row returned by a remote procedure.
///
/// Rows are carried as loosely-typed JSON objects so that columns this
/// system does not consume pass through to clients untouched.
pub type Row = serde_json::Map<String, Value>;

/// One result set returned by a remote procedure.
pub type RecordSet = Vec<Row>;

/// Opaque identifier of a selectable record (work area code, plan id,
/// process work id, worker id).
///
/// Upstream projections mix numeric and textual keys, so identifiers are
/// normalized to their text form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(String);

impl SelectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read an identifier from a JSON value. Strings and numbers are
    /// accepted; everything else (including empty strings) is not an id.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self(s.trim().to_string())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// Read the identifier stored under the first present key of `keys`.
    pub fn from_row(row: &Row, keys: &[&str]) -> Option<Self> {
        keys.iter()
            .filter_map(|key| row.get(*key))
            .find_map(Self::from_json)
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SelectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SelectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for SelectionId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// Convert a JSON array of objects into a record set, dropping non-object
/// entries.
pub fn record_set(value: Value) -> RecordSet {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(row) => Some(row),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn selection_id_from_number_and_string() {
        assert_eq!(SelectionId::from_json(&json!(7)), Some(SelectionId::from("7")));
        assert_eq!(
            SelectionId::from_json(&json!(" E001 ")),
            Some(SelectionId::from("E001"))
        );
    }

    #[test]
    fn selection_id_rejects_blank_and_structured_values() {
        assert_eq!(SelectionId::from_json(&json!("")), None);
        assert_eq!(SelectionId::from_json(&json!(null)), None);
        assert_eq!(SelectionId::from_json(&json!([1])), None);
    }

    #[test]
    fn selection_id_from_row_uses_first_present_key() {
        let row = record_set(json!([{ "empNo": "E009", "name": "Kim" }])).remove(0);
        assert_eq!(
            SelectionId::from_row(&row, &["id", "empNo"]),
            Some(SelectionId::from("E009"))
        );
    }

    #[test]
    fn record_set_skips_non_objects() {
        let set = record_set(json!([{ "a": 1 }, 2, "x", { "b": 2 }]));
        assert_eq!(set.len(), 2);
        assert!(record_set(json!({ "a": 1 })).is_empty());
    }
}
