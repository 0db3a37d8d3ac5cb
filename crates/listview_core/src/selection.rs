use crate::{Record, RecordId};
use indexmap::IndexSet;
use std::sync::Arc;

/// Ids the user has ticked, kept across pages, sorts, filters and searches.
///
/// The set is shared copy-on-write: [`SelectionTracker::snapshot`] hands out
/// the current value, and any later mutation produces a new one.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: Arc<IndexSet<RecordId>>,
    all_selected_on_page: bool,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick or untick every record on the current page only.
    pub fn select_all(&mut self, page: &[Record], checked: bool) {
        let selected = Arc::make_mut(&mut self.selected);

        for id in page.iter().filter_map(Record::id) {
            if checked {
                selected.insert(id.to_string());
            } else {
                selected.shift_remove(id);
            }
        }

        self.refresh_page_state(page);
    }

    pub fn toggle(&mut self, id: &str, checked: bool, page: &[Record]) {
        let selected = Arc::make_mut(&mut self.selected);

        if checked {
            selected.insert(id.to_string());
        } else {
            selected.shift_remove(id);
        }

        self.refresh_page_state(page);
    }

    pub fn clear(&mut self) {
        self.selected = Arc::default();
        self.all_selected_on_page = false;
    }

    /// Make `ids` the entire selection.
    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = RecordId>, page: &[Record]) {
        self.selected = Arc::new(ids.into_iter().collect());
        self.refresh_page_state(page);
    }

    /// True iff the page is non-empty and every record on it is selected.
    pub fn refresh_page_state(&mut self, page: &[Record]) {
        self.all_selected_on_page = !page.is_empty()
            && page
                .iter()
                .all(|r| r.id().is_some_and(|id| self.selected.contains(id)));
    }

    pub fn all_selected_on_page(&self) -> bool {
        self.all_selected_on_page
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.selected.iter().cloned().collect()
    }

    pub fn snapshot(&self) -> Arc<IndexSet<RecordId>> {
        self.selected.clone()
    }
}
