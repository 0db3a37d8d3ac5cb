use crate::ListViewError;
use crate::columns::MAX_COLUMN_SLOTS;
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "List View";
pub const DEFAULT_HOVER_COLOR: &str = "#f0f7ff";

/// How cell text that overflows its column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextWrap {
    #[default]
    Clip,
    Wrap,
}

impl TextWrap {
    pub fn toggled(self) -> Self {
        match self {
            Self::Clip => Self::Wrap,
            Self::Wrap => Self::Clip,
        }
    }
}

/// One admin-declared column slot.
///
/// A slot with an empty `field` is inert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSlot {
    pub field: String,
    pub label: String,
    pub display_as_pill: bool,

    /// Comma-separated `value:color` pairs.
    pub pill_colors: String,

    /// Comma-separated quick-filter options.
    pub filter_values: String,
}

impl ColumnSlot {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_pill_colors(mut self, spec: impl Into<String>) -> Self {
        self.display_as_pill = true;
        self.pill_colors = spec.into();
        self
    }

    pub fn with_filter_values(mut self, values: impl Into<String>) -> Self {
        self.filter_values = values.into();
        self
    }
}

/// Admin-supplied configuration of one list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListViewConfig {
    /// Query text handed to the query service as-is.
    pub query: String,
    pub title: String,
    pub subtitle: String,
    pub hover_row_color: String,
    pub display_search_box: bool,
    pub display_actions_button: bool,
    pub record_count_per_page: u32,
    pub default_sort_column: String,
    pub allow_user_sort: bool,
    pub selectable_rows: bool,
    pub display_row_actions: bool,
    pub bypass_sharing: bool,
    pub column_text_wrap: TextWrap,
    pub disable_export_page: bool,
    pub disable_export_all: bool,
    pub columns: Vec<ColumnSlot>,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            query: String::new(),
            title: DEFAULT_TITLE.to_string(),
            subtitle: String::new(),
            hover_row_color: DEFAULT_HOVER_COLOR.to_string(),
            display_search_box: false,
            display_actions_button: false,
            record_count_per_page: DEFAULT_PAGE_SIZE,
            default_sort_column: String::new(),
            allow_user_sort: false,
            selectable_rows: false,
            display_row_actions: false,
            bypass_sharing: false,
            column_text_wrap: TextWrap::Clip,
            disable_export_page: false,
            disable_export_all: false,
            columns: Vec::new(),
        }
    }
}

impl ListViewConfig {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_column(mut self, slot: ColumnSlot) -> Self {
        self.columns.push(slot);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ListViewError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject shapes the engine cannot honour. An empty query is accepted
    /// here and reported when the first load is attempted.
    pub fn validate(&self) -> Result<(), ListViewError> {
        if self.columns.len() > MAX_COLUMN_SLOTS {
            return Err(ListViewError::InvalidConfig(format!(
                "at most {} columns may be declared, found {}",
                MAX_COLUMN_SLOTS,
                self.columns.len()
            )));
        }

        if self.record_count_per_page == 0 {
            return Err(ListViewError::InvalidConfig(
                "recordCountPerPage must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn hover_color(&self) -> &str {
        if self.hover_row_color.trim().is_empty() {
            DEFAULT_HOVER_COLOR
        } else {
            &self.hover_row_color
        }
    }
}
