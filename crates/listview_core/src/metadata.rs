use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field data type as reported by the query service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    #[default]
    String,
    Boolean,
    Currency,
    Percent,
    Date,
    DateTime,
    Email,
    Phone,
    Url,
    Other(String),
}

impl FieldType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "" | "STRING" => Self::String,
            "BOOLEAN" => Self::Boolean,
            "CURRENCY" => Self::Currency,
            "PERCENT" => Self::Percent,
            "DATE" => Self::Date,
            "DATETIME" => Self::DateTime,
            "EMAIL" => Self::Email,
            "PHONE" => Self::Phone,
            "URL" => Self::Url,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Currency => "CURRENCY",
            Self::Percent => "PERCENT",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Url => "URL",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.as_str().to_string()
    }
}

/// Per-field description returned alongside each result.
///
/// Authoritative over the column declaration for label fallback and
/// sortability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldMetadata {
    pub label: Option<String>,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// `None` means the service did not say; such fields are sortable.
    pub sortable: Option<bool>,

    pub is_name_field: bool,
}

impl FieldMetadata {
    pub fn is_sortable(&self) -> bool {
        self.sortable != Some(false)
    }
}

pub type FieldMetadataMap = HashMap<String, FieldMetadata>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_metadata() {
        let json = r#"{
            "Name": {"label": "Account Name", "type": "STRING", "isNameField": true},
            "IsActive": {"type": "boolean", "sortable": false},
            "Geo": {"type": "LOCATION"}
        }"#;

        let map: FieldMetadataMap = serde_json::from_str(json).expect("valid metadata");

        let name = &map["Name"];
        assert_eq!(name.label.as_deref(), Some("Account Name"));
        assert!(name.is_name_field);
        assert!(name.is_sortable());

        assert_eq!(map["IsActive"].field_type, FieldType::Boolean);
        assert!(!map["IsActive"].is_sortable());

        assert_eq!(
            map["Geo"].field_type,
            FieldType::Other("LOCATION".to_string())
        );
    }
}
