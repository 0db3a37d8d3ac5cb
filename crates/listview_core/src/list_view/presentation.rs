use super::{ListView, LoadState};
use crate::columns::ColumnView;
use crate::config::TextWrap;
use crate::display::DisplayRowBuilder;
use crate::display_cache::SelectableRow;
use crate::filter::{ActiveFilters, FilterConfiguration};
use crate::query::SortState;
use crate::{FieldMetadataMap, RecordId, RecordSet};

/// What the table shows in place of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub message: &'static str,
    pub subtext: &'static str,
}

impl ListView {
    // --- Load state ---

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn field_metadata(&self) -> &FieldMetadataMap {
        &self.field_metadata
    }

    pub fn total_records(&self) -> u64 {
        self.pagination.total_records()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn has_subtitle(&self) -> bool {
        !self.config.subtitle.trim().is_empty()
    }

    pub fn container_style(&self) -> String {
        format!("--hover-color: {};", self.config.hover_color())
    }

    pub fn record_count_label(&self) -> String {
        match self.total_records() {
            0 => "No records".to_string(),
            1 => "1 record".to_string(),
            n => format!("{} records", n),
        }
    }

    pub fn has_records(&self) -> bool {
        !self.is_loading() && self.error_message().is_none() && !self.records.is_empty()
    }

    pub fn show_empty_state(&self) -> bool {
        !self.is_loading() && self.error_message().is_none() && self.records.is_empty()
    }

    pub fn empty_state(&self) -> EmptyState {
        let filtered = self.has_active_filters();
        let searched = !self.search_term.is_empty();

        match (filtered, searched) {
            (true, true) => EmptyState {
                icon: "utility:filterList",
                message: "No records match your filters and search",
                subtext: "Try adjusting your filters or search criteria",
            },
            (true, false) => EmptyState {
                icon: "utility:filterList",
                message: "No records match the selected filters",
                subtext: "Try changing or clearing your filter selections",
            },
            (false, true) => EmptyState {
                icon: "utility:search",
                message: "No records found",
                subtext: "Try adjusting your search criteria",
            },
            (false, false) => EmptyState {
                icon: "utility:table",
                message: "No records found",
                subtext: "",
            },
        }
    }

    // --- Columns & rows ---

    /// Visible columns in slot order, with metadata, sort and width applied.
    pub fn columns(&mut self) -> Vec<ColumnView> {
        let configs = self.column_configs.resolve();

        configs
            .iter()
            .filter(|config| config.is_active())
            .map(|config| {
                let metadata = self.field_metadata.get(&config.field);

                ColumnView {
                    field_name: config.field.clone(),
                    label: config.resolve_label(metadata),
                    field_type: metadata.map(|m| m.field_type.clone()).unwrap_or_default(),
                    sortable: metadata.is_none_or(|m| m.is_sortable()),
                    is_name_field: metadata.is_some_and(|m| m.is_name_field),
                    sort: self.sort.indicator_for(&config.field),
                    display_as_pill: config.display_as_pill,
                    pill_colors: self.pill_colors.resolve(&config.pill_color_spec),
                    width: self.resize.width(&config.field),
                }
            })
            .collect()
    }

    /// Rows for the current record set, rebuilt only when a fetch replaced
    /// it, then overlaid with the current selection.
    pub fn display_records(&mut self) -> Vec<SelectableRow> {
        if !self.display_cache.is_current(&self.records) {
            let columns = self.columns();
            let builder = DisplayRowBuilder::new(&columns, self.file_kind);
            self.display_cache.refresh(&self.records, &builder);
        }

        self.display_cache.decorate(&self.selection)
    }

    pub fn display_build_count(&self) -> usize {
        self.display_cache.build_count()
    }

    pub fn show_file_type_column(&self) -> bool {
        self.is_file_object()
    }

    // --- Filters ---

    pub fn filter_configurations(&mut self) -> Vec<FilterConfiguration> {
        let configs = self.column_configs.resolve();

        configs
            .iter()
            .filter(|config| config.is_active())
            .filter_map(|config| {
                let options = config.filter_options();
                if options.is_empty() {
                    return None;
                }

                let label = config.resolve_label(self.field_metadata.get(&config.field));
                Some(FilterConfiguration::new(
                    &config.field,
                    label,
                    &options,
                    &self.filters,
                ))
            })
            .collect()
    }

    pub fn has_quick_filters(&mut self) -> bool {
        self.column_configs
            .resolve()
            .iter()
            .any(|config| config.is_filterable())
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters()
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        self.filters.active()
    }

    pub fn open_filter_menu(&self) -> Option<&str> {
        self.filters.open_menu()
    }

    // --- Pagination ---

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> u32 {
        self.pagination.page_size()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn show_pagination(&self) -> bool {
        self.pagination.show_pagination()
    }

    pub fn is_first_page(&self) -> bool {
        self.pagination.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.pagination.is_last_page()
    }

    pub fn pagination_start_record(&self) -> u64 {
        self.pagination.start_record()
    }

    pub fn pagination_end_record(&self) -> u64 {
        self.pagination.end_record()
    }

    // --- Selection ---

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn has_selected_records(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selected_count_label(&self) -> String {
        match self.selection.len() {
            0 => String::new(),
            n => format!("{} selected", n),
        }
    }

    pub fn show_selection_actions(&self) -> bool {
        self.config.selectable_rows && self.has_selected_records()
    }

    pub fn all_selected_on_page(&self) -> bool {
        self.selection.all_selected_on_page()
    }

    pub fn is_selected(&self, record_id: &str) -> bool {
        self.selection.contains(record_id)
    }

    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.selection.ids()
    }

    // --- Text wrap & widths ---

    /// The user's override if set, else the configured default.
    pub fn active_text_wrap(&self) -> TextWrap {
        self.user_text_wrap.unwrap_or(self.config.column_text_wrap)
    }

    pub fn is_text_wrapped(&self) -> bool {
        self.active_text_wrap() == TextWrap::Wrap
    }

    pub fn wrap_toggle_label(&self) -> &'static str {
        if self.is_text_wrapped() {
            "Clip Column Text"
        } else {
            "Wrap Column Text"
        }
    }

    pub fn table_cell_class(&self) -> &'static str {
        if self.is_text_wrapped() {
            "table-cell cell-wrap"
        } else {
            "table-cell"
        }
    }

    pub fn has_custom_column_widths(&self) -> bool {
        self.resize.has_custom_widths()
    }

    pub fn table_class(&self) -> &'static str {
        if self.has_custom_column_widths() {
            "data-table data-table-fixed"
        } else {
            "data-table"
        }
    }

    // --- Export menu ---

    pub fn show_export_page(&self) -> bool {
        !self.config.disable_export_page
    }

    pub fn show_export_all(&self) -> bool {
        !self.config.disable_export_all
    }

    pub fn show_any_export(&self) -> bool {
        self.show_export_page() || self.show_export_all()
    }
}
