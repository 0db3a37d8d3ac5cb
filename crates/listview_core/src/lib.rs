mod columns;
mod config;
mod debounce;
mod display;
mod display_cache;
mod error;
mod file;
mod filter;
mod list_view;
mod metadata;
mod navigation;
mod notification;
mod owner_change;
mod pagination;
mod pill;
mod query;
mod record;
mod resize;
mod selection;
mod service;
mod store;
mod value;

pub use columns::{ColumnConfig, ColumnConfigResolver, ColumnView, MAX_COLUMN_SLOTS};
pub use config::{ColumnSlot, DEFAULT_HOVER_COLOR, DEFAULT_TITLE, ListViewConfig, TextWrap};
pub use debounce::{DEBOUNCE_DELAY, Debouncer};
pub use display::{
    CellKind, DisplayCell, DisplayRow, DisplayRowBuilder, LinkTarget, URL_DISPLAY_LIMIT,
    format_value, is_link_eligible, truncate_with_ellipsis, url_display,
};
pub use display_cache::{DisplayCache, SelectableRow};
pub use error::{ListViewError, ServiceError, UNEXPECTED_ERROR_MESSAGE};
pub use file::{DEFAULT_FILE_ICON, FileAttributes, FileObjectKind, file_extension, file_icon};
pub use filter::{
    ALL_FILTER_LABEL, ActiveFilters, FilterConfiguration, FilterOption, FilterState,
    filter_button_label, parse_filter_options,
};
pub use list_view::{
    EmptyState, FetchOutcome, FetchTicket, LOAD_ERROR_FALLBACK, ListView, LoadState,
    OWNER_CHANGE_FALLBACK, OwnerChangeOutcome,
};
pub use metadata::{FieldMetadata, FieldMetadataMap, FieldType};
pub use navigation::{
    DOWNLOAD_MISSING_ID_MESSAGE, NavigationIntent, PREVIEW_MISSING_ID_MESSAGE, RowAction,
    download_url,
};
pub use notification::{Notification, Severity};
pub use owner_change::{MIN_USER_SEARCH_LENGTH, OwnerChangeDialog, UserChoice};
pub use pagination::{DEFAULT_PAGE_SIZE, Pagination};
pub use pill::{
    DARK_FOREGROUND, DEFAULT_PILL_BACKGROUND, DEFAULT_PILL_FOREGROUND, LIGHT_FOREGROUND,
    PillColorMap, PillColorResolver, PillStyle, contrasting_text,
};
pub use query::{
    QueryParams, QueryRequest, QueryResponse, SortDirection, SortIndicator, SortState,
};
pub use record::{ID_FIELD, Record, RecordId, RecordSet};
pub use resize::{ColumnResizeController, MIN_COLUMN_WIDTH, ResizeState};
pub use selection::SelectionTracker;
pub use service::{
    DirectoryUser, ListViewServices, OwnerChangeRequest, OwnerChangeResponse, OwnerChangeService,
    RecordQueryService, UserDirectory,
};
pub use store::ListViewConfigStore;
pub use value::FieldValue;
