//! User Records
//!
//! A record is whatever the users endpoint returns for one user: an ordered
//! mapping of field name to JSON value. The shape is not declared ahead of
//! time, so records are kept as raw JSON objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One fetched user entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    /// Wrap an already parsed JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Value of a field, `None` when the key is absent
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field names in response order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric reading of a field, see [`coerce_number`]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(coerce_number)
    }

    /// Display text of a field, empty for a missing key
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(display_value).unwrap_or_default()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for UserRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Coerce a JSON value to a number.
///
/// Numbers pass through, booleans become 1/0, `null` and blank strings
/// become 0, other strings are parsed as decimals. Objects, arrays,
/// unparsable strings and non-finite results yield `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };

    n.is_finite().then_some(n)
}

/// Render a value as grid cell text. Strings are unquoted, nested values
/// are written as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn record(value: Value) -> UserRecord {
    match value {
        Value::Object(map) => UserRecord::new(map),
        other => panic!("test record must be an object, got {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(28)), Some(28.0));
        assert_eq!(coerce_number(&json!(187.5)), Some(187.5));
        assert_eq!(coerce_number(&json!(" 42 ")), Some(42.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!(null)), Some(0.0));
        assert_eq!(coerce_number(&json!("tall")), None);
        assert_eq!(coerce_number(&json!({"color": "Brown"})), None);
        assert_eq!(coerce_number(&json!([1, 2])), None);
    }

    #[test]
    fn test_coerce_number_drops_infinity_and_arrays() {
        assert_eq!(coerce_number(&json!("Infinity")), None);
        assert_eq!(coerce_number(&json!("-inf")), None);
        assert_eq!(coerce_number(&json!("1e999")), None);
        assert_eq!(coerce_number(&json!([7])), None);
        assert_eq!(coerce_number(&json!([])), None);
    }

    #[test]
    fn test_keys_keep_response_order() {
        let user: UserRecord =
            serde_json::from_str(r#"{"id": 1, "firstName": "Emily", "age": 28, "eyeColor": "Green"}"#)
                .unwrap();
        let keys: Vec<_> = user.keys().cloned().collect();
        assert_eq!(keys, vec!["id", "firstName", "age", "eyeColor"]);
    }

    #[test]
    fn test_text_rendering() {
        let user = record(json!({
            "firstName": "Emily",
            "age": 28,
            "hair": {"color": "Brown"},
        }));
        assert_eq!(user.text("firstName"), "Emily");
        assert_eq!(user.text("age"), "28");
        assert_eq!(user.text("hair"), r#"{"color":"Brown"}"#);
        assert_eq!(user.text("missing"), "");
    }
}
