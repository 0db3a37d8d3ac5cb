use crate::config::ColumnSlot;
use crate::filter::parse_filter_options;
use crate::pill::PillColorMap;
use crate::query::SortIndicator;
use crate::{FieldMetadata, FieldType};
use std::sync::Arc;

/// Number of column slots an admin can fill.
pub const MAX_COLUMN_SLOTS: usize = 10;

/// Normalized declaration of one column slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// 1-based slot position.
    pub slot: usize,
    pub field: String,
    pub label: String,
    pub display_as_pill: bool,
    pub pill_color_spec: String,
    pub filter_values: String,
}

impl ColumnConfig {
    fn from_slot(slot: usize, raw: &ColumnSlot) -> Self {
        Self {
            slot,
            field: raw.field.trim().to_string(),
            label: raw.label.trim().to_string(),
            display_as_pill: raw.display_as_pill,
            pill_color_spec: raw.pill_colors.clone(),
            filter_values: raw.filter_values.clone(),
        }
    }

    fn empty(slot: usize) -> Self {
        Self {
            slot,
            ..Default::default()
        }
    }

    /// Inert slots have no field and are skipped by every consumer.
    pub fn is_active(&self) -> bool {
        !self.field.is_empty()
    }

    pub fn filter_options(&self) -> Vec<String> {
        parse_filter_options(&self.filter_values)
    }

    pub fn is_filterable(&self) -> bool {
        self.is_active() && !self.filter_options().is_empty()
    }

    /// Declared label, then metadata label, then the field path.
    pub fn resolve_label(&self, metadata: Option<&FieldMetadata>) -> String {
        if !self.label.is_empty() {
            return self.label.clone();
        }

        metadata
            .and_then(|m| m.label.as_deref())
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.field)
            .to_string()
    }
}

/// Memoizes the normalized slot list until it is explicitly reset.
#[derive(Debug, Default)]
pub struct ColumnConfigResolver {
    slots: Vec<ColumnSlot>,
    cache: Option<Arc<[ColumnConfig]>>,
    resolutions: usize,
}

impl ColumnConfigResolver {
    pub fn new(slots: Vec<ColumnSlot>) -> Self {
        if slots.len() > MAX_COLUMN_SLOTS {
            log::warn!(
                "Ignoring {} column slots beyond the first {}",
                slots.len() - MAX_COLUMN_SLOTS,
                MAX_COLUMN_SLOTS
            );
        }

        Self {
            slots,
            cache: None,
            resolutions: 0,
        }
    }

    /// Always `MAX_COLUMN_SLOTS` entries, inert ones included, in slot order.
    pub fn resolve(&mut self) -> Arc<[ColumnConfig]> {
        if let Some(cached) = &self.cache {
            return cached.clone();
        }

        let resolved: Arc<[ColumnConfig]> = (0..MAX_COLUMN_SLOTS)
            .map(|index| match self.slots.get(index) {
                Some(raw) => ColumnConfig::from_slot(index + 1, raw),
                None => ColumnConfig::empty(index + 1),
            })
            .collect();

        self.resolutions += 1;
        self.cache = Some(resolved.clone());
        resolved
    }

    pub fn active(&mut self) -> Vec<ColumnConfig> {
        self.resolve()
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect()
    }

    pub fn reset(&mut self) {
        self.cache = None;
    }

    pub fn reconfigure(&mut self, slots: Vec<ColumnSlot>) {
        self.slots = slots;
        self.reset();
    }

    /// How many times the slot list was actually normalized.
    pub fn resolution_count(&self) -> usize {
        self.resolutions
    }
}

/// Render model for one visible column header.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub field_name: String,
    pub label: String,
    pub field_type: FieldType,
    pub sortable: bool,
    pub is_name_field: bool,
    pub sort: SortIndicator,
    pub display_as_pill: bool,
    pub pill_colors: Arc<PillColorMap>,
    pub width: Option<f32>,
}

impl ColumnView {
    pub fn sort_title(&self) -> String {
        format!("Sort by {}", self.label)
    }

    pub fn sort_button_class(&self) -> &'static str {
        if self.sort.is_sorted() {
            "sort-button active"
        } else {
            "sort-button"
        }
    }

    pub fn has_custom_width(&self) -> bool {
        self.width.is_some()
    }

    pub fn header_style(&self) -> String {
        match self.width {
            Some(width) => format!(
                "width: {w}px; min-width: {w}px; max-width: {w}px;",
                w = width
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> Vec<ColumnSlot> {
        vec![
            ColumnSlot::new("Name"),
            ColumnSlot::new(""),
            ColumnSlot::new("Status__c")
                .with_label("Status")
                .with_filter_values("Open, Closed"),
        ]
    }

    #[test]
    fn resolve_pads_to_ten_slots_in_order() {
        let mut resolver = ColumnConfigResolver::new(slots());
        let resolved = resolver.resolve();

        assert_eq!(resolved.len(), MAX_COLUMN_SLOTS);
        assert_eq!(resolved[0].slot, 1);
        assert_eq!(resolved[2].field, "Status__c");
        assert!(!resolved[1].is_active());
        assert!(!resolved[9].is_active());

        let active = resolver.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[1].slot, 3);
    }

    #[test]
    fn resolution_is_memoized_until_reset() {
        let mut resolver = ColumnConfigResolver::new(slots());

        let first = resolver.resolve();
        let second = resolver.resolve();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(resolver.resolution_count(), 1);

        resolver.reconfigure(vec![ColumnSlot::new("Subject")]);
        let third = resolver.resolve();
        assert_eq!(resolver.resolution_count(), 2);
        assert_eq!(third[0].field, "Subject");
    }

    #[test]
    fn label_falls_back_through_metadata_to_field() {
        let column = ColumnConfig::from_slot(1, &ColumnSlot::new("Owner.Name"));
        assert_eq!(column.resolve_label(None), "Owner.Name");

        let metadata = FieldMetadata {
            label: Some("Owner Name".to_string()),
            ..Default::default()
        };
        assert_eq!(column.resolve_label(Some(&metadata)), "Owner Name");

        let labelled = ColumnConfig::from_slot(1, &ColumnSlot::new("Owner.Name").with_label("Owner"));
        assert_eq!(labelled.resolve_label(Some(&metadata)), "Owner");
    }

    #[test]
    fn filterable_requires_non_blank_options() {
        let blank = ColumnConfig::from_slot(1, &ColumnSlot::new("Status").with_filter_values(" , "));
        assert!(!blank.is_filterable());

        let resolved = ColumnConfigResolver::new(slots()).resolve();
        assert!(resolved[2].is_filterable());
        assert_eq!(resolved[2].filter_options(), vec!["Open", "Closed"]);
    }

    #[test]
    fn header_style_only_with_custom_width() {
        let mut view = ColumnView {
            field_name: "Name".to_string(),
            label: "Account Name".to_string(),
            field_type: FieldType::String,
            sortable: true,
            is_name_field: true,
            sort: SortIndicator::Unsorted,
            display_as_pill: false,
            pill_colors: Arc::default(),
            width: None,
        };

        assert_eq!(view.header_style(), "");
        assert_eq!(view.sort_title(), "Sort by Account Name");

        view.width = Some(120.0);
        assert_eq!(
            view.header_style(),
            "width: 120px; min-width: 120px; max-width: 120px;"
        );
    }
}
