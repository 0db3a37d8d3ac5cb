mod actions;
mod fetch;
mod owner;
mod presentation;

use crate::columns::ColumnConfigResolver;
use crate::config::{ListViewConfig, TextWrap};
use crate::debounce::Debouncer;
use crate::display_cache::DisplayCache;
use crate::file::FileObjectKind;
use crate::filter::FilterState;
use crate::notification::Notification;
use crate::owner_change::OwnerChangeDialog;
use crate::pagination::Pagination;
use crate::pill::PillColorResolver;
use crate::query::SortState;
use crate::resize::ColumnResizeController;
use crate::selection::SelectionTracker;
use crate::service::ListViewServices;
use crate::{FieldMetadataMap, ListViewError, RecordSet};

pub use fetch::{FetchOutcome, FetchTicket};
pub use owner::{OWNER_CHANGE_FALLBACK, OwnerChangeOutcome};
pub use presentation::EmptyState;

/// Message shown when a failed load carries no text of its own.
pub const LOAD_ERROR_FALLBACK: &str = "An error occurred while loading data.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// One configured list view: the state machine behind the table.
///
/// Every mutation that reshapes the result (search, sort, filters) returns to
/// page 1 and issues one fetch. Plain page moves and refreshes keep the page.
pub struct ListView {
    config: ListViewConfig,
    services: ListViewServices,
    scope_record_id: Option<String>,
    file_kind: Option<FileObjectKind>,

    column_configs: ColumnConfigResolver,
    pill_colors: PillColorResolver,
    display_cache: DisplayCache,

    filters: FilterState,
    selection: SelectionTracker,
    resize: ColumnResizeController,
    sort: SortState,
    pagination: Pagination,

    search_term: String,
    search_input: Debouncer<String>,

    records: RecordSet,
    field_metadata: FieldMetadataMap,
    load_state: LoadState,
    latest_fetch: u64,

    user_text_wrap: Option<TextWrap>,
    owner_dialog: OwnerChangeDialog,
    notifications: Vec<Notification>,
}

impl ListView {
    pub fn new(config: ListViewConfig, services: ListViewServices) -> Result<Self, ListViewError> {
        config.validate()?;

        let mut column_configs = ColumnConfigResolver::new(config.columns.clone());
        let filterable = column_configs
            .resolve()
            .iter()
            .filter(|c| c.is_filterable())
            .map(|c| c.field.clone())
            .collect::<Vec<_>>();

        let file_kind = FileObjectKind::detect(&config.query);
        if let Some(kind) = file_kind {
            log::debug!("List view targets file objects ({:?})", kind);
        }

        Ok(Self {
            scope_record_id: None,
            file_kind,
            column_configs,
            pill_colors: PillColorResolver::new(),
            display_cache: DisplayCache::new(),
            filters: FilterState::new(filterable),
            selection: SelectionTracker::new(),
            resize: ColumnResizeController::new(),
            sort: SortState::new(Some(config.default_sort_column.trim().to_string())),
            pagination: Pagination::new(config.record_count_per_page),
            search_term: String::new(),
            search_input: Debouncer::default(),
            records: RecordSet::from(Vec::new()),
            field_metadata: FieldMetadataMap::new(),
            load_state: LoadState::Idle,
            latest_fetch: 0,
            user_text_wrap: None,
            owner_dialog: OwnerChangeDialog::new(),
            notifications: Vec::new(),
            config,
            services,
        })
    }

    /// Anchor the query to a parent record.
    pub fn with_scope_record(mut self, record_id: impl Into<String>) -> Self {
        let record_id = record_id.into();
        self.scope_record_id = (!record_id.is_empty()).then_some(record_id);
        self
    }

    pub fn config(&self) -> &ListViewConfig {
        &self.config
    }

    pub fn file_kind(&self) -> Option<FileObjectKind> {
        self.file_kind
    }

    pub fn is_file_object(&self) -> bool {
        self.file_kind.is_some()
    }

    pub fn notify(&mut self, notification: Notification) {
        log::debug!(
            "Queued {} notification: {}",
            notification.severity.as_str(),
            notification.message
        );
        self.notifications.push(notification);
    }

    /// Hand queued notifications to the host.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Release timers and pointer tracking before the view goes away.
    pub fn teardown(&mut self) {
        self.search_input.cancel();
        self.owner_dialog.cancel_search();
        self.resize.end();
        self.filters.close_menus();
    }

    /// Replace the column slots. Active filters are dropped and cached rows
    /// are rebuilt on next access.
    pub fn reconfigure_columns(
        &mut self,
        slots: Vec<crate::ColumnSlot>,
    ) -> Result<(), ListViewError> {
        let mut candidate = self.config.clone();
        candidate.columns = slots;
        candidate.validate()?;

        self.column_configs.reconfigure(candidate.columns.clone());
        self.filters = FilterState::new(
            self.column_configs
                .resolve()
                .iter()
                .filter(|c| c.is_filterable())
                .map(|c| c.field.clone())
                .collect::<Vec<_>>(),
        );
        self.display_cache.invalidate();
        self.config = candidate;
        Ok(())
    }
}
