use crate::{FakeDirectory, FakeOwnerChange, FakeQueryService};
use listview_core::{
    ColumnSlot, FieldMetadata, FieldMetadataMap, FieldType, ListView, ListViewConfig,
    ListViewServices, QueryResponse, Record,
};

pub const ACCOUNT_QUERY: &str = "SELECT Id, Name, Status__c, Owner.Name FROM Account";

/// Build a record from a JSON object literal.
pub fn record(json: serde_json::Value) -> Record {
    serde_json::from_value(json).expect("fixture record must be a JSON object")
}

/// `count` accounts with ids `001..` and names `Account 1..`.
pub fn accounts(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| {
            Record::new()
                .with_field("Id", format!("001{:03}", i))
                .with_field("Name", format!("Account {}", i))
                .with_field("Status__c", if i % 2 == 0 { "Closed" } else { "Open" })
        })
        .collect()
}

pub fn response(records: Vec<Record>, total: u64) -> QueryResponse {
    QueryResponse::ok(records, total)
}

pub fn metadata(fields: &[(&str, &str, FieldType)]) -> FieldMetadataMap {
    fields
        .iter()
        .map(|(name, label, field_type)| {
            (
                name.to_string(),
                FieldMetadata {
                    label: Some(label.to_string()),
                    field_type: field_type.clone(),
                    sortable: None,
                    is_name_field: *name == "Name",
                },
            )
        })
        .collect()
}

/// Account view with a name column, a filterable pill status column and a
/// relational owner column.
pub fn account_config() -> ListViewConfig {
    let mut config = ListViewConfig::new(ACCOUNT_QUERY)
        .with_column(ColumnSlot::new("Name"))
        .with_column(
            ColumnSlot::new("Status__c")
                .with_label("Status")
                .with_pill_colors("open:#2e844a, closed:#c9c9c9")
                .with_filter_values("Open, Closed"),
        )
        .with_column(ColumnSlot::new("Owner.Name").with_label("Owner"));
    config.title = "My Accounts".to_string();
    config.allow_user_sort = true;
    config.selectable_rows = true;
    config
}

pub struct Harness {
    pub query: FakeQueryService,
    pub directory: FakeDirectory,
    pub owner_change: FakeOwnerChange,
}

impl Harness {
    pub fn new(query: FakeQueryService) -> Self {
        Self {
            query,
            directory: FakeDirectory::new(),
            owner_change: FakeOwnerChange::new(),
        }
    }

    pub fn with_directory(mut self, directory: FakeDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_owner_change(mut self, owner_change: FakeOwnerChange) -> Self {
        self.owner_change = owner_change;
        self
    }

    pub fn services(&self) -> ListViewServices {
        ListViewServices::new(
            self.query.as_service_arc(),
            self.directory.as_directory_arc(),
            self.owner_change.as_service_arc(),
        )
    }

    pub fn list_view(&self, config: ListViewConfig) -> ListView {
        ListView::new(config, self.services()).expect("fixture config must be valid")
    }
}
