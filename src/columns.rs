//! Column Inference
//!
//! Grid columns for the raw user table are taken from the key set of the
//! first record only. Keys that appear only on later records get no column.

use serde::{Deserialize, Serialize};

use crate::records::UserRecord;

/// A grid column: display name and the record field it reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub header_name: String,
    pub field: String,
}

impl ColumnDefinition {
    pub fn new(header_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
            field: field.into(),
        }
    }
}

/// Columns for `records`, empty when there are no records
pub fn infer_columns(records: &[UserRecord]) -> Vec<ColumnDefinition> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    first
        .keys()
        .map(|key| ColumnDefinition::new(key.as_str(), key.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::record;
    use serde_json::json;

    #[test]
    fn test_first_record_only() {
        let records = vec![record(json!({"a": 1, "b": 2})), record(json!({"a": 3, "c": 4}))];

        let columns = infer_columns(&records);
        assert_eq!(
            columns,
            vec![ColumnDefinition::new("a", "a"), ColumnDefinition::new("b", "b")]
        );
    }

    #[test]
    fn test_empty_records() {
        assert!(infer_columns(&[]).is_empty());
    }

    #[test]
    fn test_keeps_key_order() {
        let records = vec![record(json!({"zeta": 1, "alpha": 2, "mid": 3}))];
        let fields: Vec<_> = infer_columns(&records).into_iter().map(|c| c.field).collect();
        assert_eq!(fields, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_serialized_names() {
        let value = serde_json::to_value(ColumnDefinition::new("City", "city")).unwrap();
        assert_eq!(value, json!({"headerName": "City", "field": "city"}));
    }
}
