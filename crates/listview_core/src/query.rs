use crate::filter::ActiveFilters;
use crate::{FieldMetadataMap, Record};
use serde::{Deserialize, Serialize};

/// Sort direction sent to the query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// How a column header shows the current sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::Unsorted => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Unsorted => "utility:sort",
            Self::Ascending => "utility:arrowup",
            Self::Descending => "utility:arrowdown",
        }
    }

    pub fn is_sorted(self) -> bool {
        !matches!(self, Self::Unsorted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    field: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn new(field: Option<String>) -> Self {
        Self {
            field: field.filter(|f| !f.is_empty()),
            direction: SortDirection::Ascending,
        }
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Clicking the current sort field flips the direction; any other field
    /// becomes the sort field, ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn indicator_for(&self, field: &str) -> SortIndicator {
        match (&self.field, self.direction) {
            (Some(current), SortDirection::Ascending) if current == field => {
                SortIndicator::Ascending
            }
            (Some(current), SortDirection::Descending) if current == field => {
                SortIndicator::Descending
            }
            _ => SortIndicator::Unsorted,
        }
    }
}

/// Snapshot of everything that shapes the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub search_term: String,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
    pub page: u32,
    pub page_size: u32,
    pub filters: ActiveFilters,
    pub scope_record_id: Option<String>,
    pub bypass_sharing: bool,
}

impl QueryParams {
    pub fn into_request(self, query: impl Into<String>) -> QueryRequest {
        QueryRequest {
            query: query.into(),
            scope_id: self.scope_record_id.unwrap_or_default(),
            search_term: self.search_term,
            sort_field: self.sort_field.unwrap_or_default(),
            sort_direction: self.sort_direction,
            page_size: self.page_size,
            page_number: self.page,
            filters: self.filters,
            bypass_sharing: self.bypass_sharing,
        }
    }
}

/// Wire request for the record query service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    pub scope_id: String,
    pub search_term: String,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub page_size: u32,
    pub page_number: u32,
    pub filters: ActiveFilters,
    pub bypass_sharing: bool,
}

/// Wire response from the record query service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryResponse {
    pub success: bool,
    pub records: Vec<Record>,
    pub total_count: u64,
    pub field_metadata: FieldMetadataMap,
    pub error_message: Option<String>,
}

impl QueryResponse {
    pub fn ok(records: Vec<Record>, total_count: u64) -> Self {
        Self {
            success: true,
            records,
            total_count,
            ..Default::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, field_metadata: FieldMetadataMap) -> Self {
        self.field_metadata = field_metadata;
        self
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
