use crate::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type RecordId = String;

/// Record collection as delivered by one fetch.
///
/// Replaced wholesale on every successful fetch; its pointer identity is what
/// the display cache keys on.
pub type RecordSet = Arc<[Record]>;

/// Field name holding the record identifier.
pub const ID_FIELD: &str = "Id";

/// One row returned by the query service: field path to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.get(ID_FIELD).and_then(FieldValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve a field path, following dotted relational segments through
    /// nested records.
    ///
    /// Any missing or non-record intermediate yields `None`.
    pub fn resolve(&self, path: &str) -> Option<&FieldValue> {
        if path.is_empty() {
            return None;
        }

        let Some((head, rest)) = path.split_once('.') else {
            return self.get(path);
        };

        let mut current = self.get(head)?.as_record()?;
        let mut remaining = rest;

        loop {
            match remaining.split_once('.') {
                Some((segment, tail)) => {
                    current = current.get(segment)?.as_record()?;
                    remaining = tail;
                }
                None => return current.get(remaining),
            }
        }
    }

    /// Id of the related record addressed by the first segment of a dotted
    /// path, or this record's own id for a plain field.
    pub fn link_record_id(&self, path: &str) -> Option<&str> {
        match path.split_once('.') {
            Some((relationship, _)) => self.get(relationship)?.as_record()?.id(),
            None => self.id(),
        }
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opportunity() -> Record {
        Record::new()
            .with_field("Id", "006A")
            .with_field("Name", "Big Deal")
            .with_field(
                "Account",
                Record::new()
                    .with_field("Id", "001A")
                    .with_field("Name", "Acme")
                    .with_field("Owner", Record::new().with_field("Name", "Ada")),
            )
            .with_field("Amount", 1200)
    }

    #[test]
    fn resolves_plain_and_dotted_paths() {
        let record = opportunity();

        assert_eq!(record.resolve("Name"), Some(&FieldValue::from("Big Deal")));
        assert_eq!(record.resolve("Account.Name"), Some(&FieldValue::from("Acme")));
        assert_eq!(
            record.resolve("Account.Owner.Name"),
            Some(&FieldValue::from("Ada"))
        );
    }

    #[test]
    fn missing_intermediates_resolve_to_none() {
        let record = opportunity();

        assert_eq!(record.resolve("Contact.Name"), None);
        assert_eq!(record.resolve("Amount.Currency"), None);
        assert_eq!(record.resolve("Account.Parent.Name"), None);
        assert_eq!(record.resolve(""), None);
    }

    #[test]
    fn link_record_id_uses_relationship_for_dotted_paths() {
        let record = opportunity();

        assert_eq!(record.link_record_id("Name"), Some("006A"));
        assert_eq!(record.link_record_id("Account.Name"), Some("001A"));
        assert_eq!(record.link_record_id("Contact.Name"), None);
    }
}
