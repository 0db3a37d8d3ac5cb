use crate::display::{DisplayRow, DisplayRowBuilder};
use crate::selection::SelectionTracker;
use crate::RecordSet;
use std::sync::Arc;

/// A cached row overlaid with the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableRow {
    pub row: Arc<DisplayRow>,
    pub is_selected: bool,
}

impl SelectableRow {
    pub fn row_class(&self) -> &'static str {
        if self.is_selected {
            "table-row selected-row"
        } else {
            "table-row"
        }
    }
}

/// Display rows built once per record set.
///
/// The cache is keyed by the pointer identity of the [`RecordSet`]: equal
/// contents delivered by a new fetch still rebuild, and selection changes
/// never do.
#[derive(Debug, Default)]
pub struct DisplayCache {
    source: Option<RecordSet>,
    rows: Vec<Arc<DisplayRow>>,
    builds: usize,
}

impl DisplayCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_current(&self, records: &RecordSet) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, records))
    }

    /// Rebuild the rows unless `records` is the set they were built from.
    pub fn refresh(&mut self, records: &RecordSet, builder: &DisplayRowBuilder<'_>) {
        if self.is_current(records) {
            return;
        }

        self.rows = records
            .iter()
            .map(|record| Arc::new(builder.build_row(record)))
            .collect();
        self.source = Some(records.clone());
        self.builds += 1;

        log::debug!("Rebuilt {} display rows", self.rows.len());
    }

    pub fn rows(&self) -> &[Arc<DisplayRow>] {
        &self.rows
    }

    /// Cheap per-render pass: attach selection state to the cached rows.
    pub fn decorate(&self, selection: &SelectionTracker) -> Vec<SelectableRow> {
        self.rows
            .iter()
            .map(|row| SelectableRow {
                is_selected: selection.contains(&row.id),
                row: row.clone(),
            })
            .collect()
    }

    /// Number of full rebuilds performed so far.
    pub fn build_count(&self) -> usize {
        self.builds
    }

    /// Force the next `refresh` to rebuild, e.g. after the columns changed.
    pub fn invalidate(&mut self) {
        self.source = None;
    }
}
