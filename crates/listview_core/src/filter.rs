use crate::ListViewError;
use std::collections::{BTreeMap, BTreeSet};

/// Field name to the ordered set of selected values.
///
/// A field is present only while it has at least one selected value.
pub type ActiveFilters = BTreeMap<String, Vec<String>>;

pub const ALL_FILTER_LABEL: &str = "All";

/// Active quick-filter selections plus which filter menu is open.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active: ActiveFilters,
    filterable: BTreeSet<String>,
    open_menu: Option<String>,
}

impl FilterState {
    /// `filterable` lists the fields whose column declares filter values;
    /// only those may ever hold a selection.
    pub fn new(filterable: impl IntoIterator<Item = String>) -> Self {
        Self {
            active: ActiveFilters::new(),
            filterable: filterable.into_iter().collect(),
            open_menu: None,
        }
    }

    pub fn is_filterable(&self, field: &str) -> bool {
        self.filterable.contains(field)
    }

    /// Replace the selection for `field`. An empty selection removes the key.
    pub fn set_filter(&mut self, field: &str, values: Vec<String>) -> Result<(), ListViewError> {
        if !self.is_filterable(field) {
            log::warn!("Ignoring filter on non-filterable field '{}'", field);
            return Err(ListViewError::UnknownFilterField(field.to_string()));
        }

        let mut selections: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !selections.contains(&value) {
                selections.push(value);
            }
        }

        if selections.is_empty() {
            self.active.remove(field);
        } else {
            self.active.insert(field.to_string(), selections);
        }

        Ok(())
    }

    /// Check or uncheck a single option, keeping the other selections.
    pub fn set_option(
        &mut self,
        field: &str,
        value: &str,
        checked: bool,
    ) -> Result<(), ListViewError> {
        let mut selections = self.selected(field).to_vec();

        if checked {
            if !selections.iter().any(|v| v == value) {
                selections.push(value.to_string());
            }
        } else {
            selections.retain(|v| v != value);
        }

        self.set_filter(field, selections)
    }

    pub fn clear_all(&mut self) {
        self.active.clear();
        self.open_menu = None;
    }

    pub fn selected(&self, field: &str) -> &[String] {
        self.active.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active(&self) -> &ActiveFilters {
        &self.active
    }

    pub fn has_active_filters(&self) -> bool {
        self.active.values().any(|v| !v.is_empty())
    }

    pub fn open_menu(&self) -> Option<&str> {
        self.open_menu.as_deref()
    }

    /// Open the menu for `field`, or close it if it is already open.
    pub fn toggle_menu(&mut self, field: &str) {
        if self.open_menu.as_deref() == Some(field) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(field.to_string());
        }
    }

    /// Returns true if a menu was open.
    pub fn close_menus(&mut self) -> bool {
        self.open_menu.take().is_some()
    }
}

pub fn filter_button_label(selected: &[String]) -> String {
    match selected {
        [] => ALL_FILTER_LABEL.to_string(),
        [only] => only.clone(),
        many => format!("{} selected", many.len()),
    }
}

/// Split a comma-separated option list, trimming and dropping empty entries.
pub fn parse_filter_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
    pub is_checked: bool,
    pub key: String,
}

/// Render model for one quick-filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfiguration {
    pub field_name: String,
    pub label: String,
    pub options: Vec<FilterOption>,
    pub selected_values: Vec<String>,
    pub button_label: String,
    pub has_selections: bool,
    pub is_open: bool,
}

impl FilterConfiguration {
    pub fn new(field: &str, label: String, options: &[String], state: &FilterState) -> Self {
        let selected = state.selected(field);

        Self {
            field_name: field.to_string(),
            label,
            options: options
                .iter()
                .map(|value| FilterOption {
                    label: value.clone(),
                    value: value.clone(),
                    is_checked: selected.contains(value),
                    key: format!("{}-{}", field, value),
                })
                .collect(),
            selected_values: selected.to_vec(),
            button_label: filter_button_label(selected),
            has_selections: !selected.is_empty(),
            is_open: state.open_menu() == Some(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FilterState {
        FilterState::new(["Status".to_string(), "Priority".to_string()])
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_selection_removes_key() {
        let mut filters = state();

        filters
            .set_filter("Status", strings(&["Open", "Closed"]))
            .expect("filterable");
        assert_eq!(filters.selected("Status"), ["Open", "Closed"]);

        filters.set_filter("Status", Vec::new()).expect("filterable");
        assert!(!filters.active().contains_key("Status"));
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn rejects_fields_without_filter_values() {
        let mut filters = state();

        let err = filters.set_filter("Name", strings(&["Acme"]));
        assert!(matches!(err, Err(ListViewError::UnknownFilterField(f)) if f == "Name"));
        assert!(filters.active().is_empty());
    }

    #[test]
    fn set_option_appends_and_removes() {
        let mut filters = state();

        filters.set_option("Status", "Open", true).expect("ok");
        filters.set_option("Status", "Closed", true).expect("ok");
        filters.set_option("Status", "Open", true).expect("ok");
        assert_eq!(filters.selected("Status"), ["Open", "Closed"]);

        filters.set_option("Status", "Open", false).expect("ok");
        filters.set_option("Status", "Closed", false).expect("ok");
        assert!(filters.active().is_empty());
    }

    #[test]
    fn only_one_menu_open_at_a_time() {
        let mut filters = state();

        filters.toggle_menu("Status");
        assert_eq!(filters.open_menu(), Some("Status"));

        filters.toggle_menu("Priority");
        assert_eq!(filters.open_menu(), Some("Priority"));

        filters.toggle_menu("Priority");
        assert_eq!(filters.open_menu(), None);

        filters.toggle_menu("Status");
        assert!(filters.close_menus());
        assert!(!filters.close_menus());
    }

    #[test]
    fn clear_all_closes_menu() {
        let mut filters = state();
        filters.set_option("Status", "Open", true).expect("ok");
        filters.toggle_menu("Status");

        filters.clear_all();

        assert!(filters.active().is_empty());
        assert_eq!(filters.open_menu(), None);
    }

    #[test]
    fn button_labels() {
        assert_eq!(filter_button_label(&[]), "All");
        assert_eq!(filter_button_label(&strings(&["Open"])), "Open");
        assert_eq!(filter_button_label(&strings(&["Open", "New"])), "2 selected");
    }

    #[test]
    fn option_parsing_trims_and_drops_empties() {
        assert_eq!(
            parse_filter_options(" Open, ,Closed ,"),
            strings(&["Open", "Closed"])
        );
        assert!(parse_filter_options(" , ").is_empty());
    }

    #[test]
    fn configuration_reflects_selection() {
        let mut filters = state();
        filters.set_option("Status", "Closed", true).expect("ok");
        filters.toggle_menu("Status");

        let config = FilterConfiguration::new(
            "Status",
            "Status".to_string(),
            &strings(&["Open", "Closed"]),
            &filters,
        );

        assert!(config.is_open);
        assert!(config.has_selections);
        assert_eq!(config.button_label, "Closed");
        assert!(!config.options[0].is_checked);
        assert!(config.options[1].is_checked);
        assert_eq!(config.options[1].key, "Status-Closed");
    }
}
