use crate::Record;
use serde::{Deserialize, Serialize};

/// Loosely-typed field value as delivered by the query service.
///
/// Records arrive as JSON objects whose values may be scalars, lists or nested
/// related records (for relational paths like `Owner.Name`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Record(Record),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Truthiness used for pill eligibility and boolean rendering.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Int(i) => *i != 0,
            FieldValue::Float(f) => *f != 0.0 && !f.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::List(_) | FieldValue::Record(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Plain string form, without any type-aware formatting.
    pub fn as_display_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) => float_to_string(*f),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::as_display_string)
                .collect::<Vec<_>>()
                .join(","),
            FieldValue::Record(r) => serde_json::to_string(r).unwrap_or_default(),
        }
    }
}

fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        f.to_string()
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_display_string())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<Record> for FieldValue {
    fn from(value: Record) -> Self {
        FieldValue::Record(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_loose_json_values() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[null, true, 3, 2.5, "x", [1, "a"], {"Id": "001"}]"#)
                .expect("valid json");

        assert_eq!(values[0], FieldValue::Null);
        assert_eq!(values[1], FieldValue::Bool(true));
        assert_eq!(values[2], FieldValue::Int(3));
        assert_eq!(values[3], FieldValue::Float(2.5));
        assert_eq!(values[4], FieldValue::Text("x".to_string()));
        assert!(matches!(values[5], FieldValue::List(_)));
        assert_eq!(
            values[6].as_record().and_then(Record::id),
            Some("001")
        );
    }

    #[test]
    fn display_string_matches_plain_conversion() {
        assert_eq!(FieldValue::Null.as_display_string(), "");
        assert_eq!(FieldValue::Float(3.0).as_display_string(), "3");
        assert_eq!(FieldValue::Float(1.25).as_display_string(), "1.25");
        assert_eq!(FieldValue::Bool(false).as_display_string(), "false");
        assert_eq!(
            FieldValue::List(vec![FieldValue::Int(1), FieldValue::from("b")]).as_display_string(),
            "1,b"
        );
    }

    #[test]
    fn truthiness() {
        assert!(!FieldValue::Null.is_truthy());
        assert!(!FieldValue::from("").is_truthy());
        assert!(!FieldValue::Int(0).is_truthy());
        assert!(FieldValue::from("Open").is_truthy());
        assert!(FieldValue::Record(Record::new()).is_truthy());
    }
}
