use crate::columns::ColumnView;
use crate::file::{FileAttributes, FileObjectKind};
use crate::pill::PillStyle;
use crate::{FieldType, FieldValue, Record, RecordId};

/// Longest URL shown verbatim when it does not parse as an absolute URL.
pub const URL_DISPLAY_LIMIT: usize = 30;

/// Shared formatting for cells and CSV export.
///
/// Missing values are empty, booleans read `Yes`/`No`, everything else uses
/// its plain string form.
pub fn format_value(value: Option<&FieldValue>, field_type: &FieldType) -> String {
    match value {
        None | Some(FieldValue::Null) => String::new(),
        Some(value) if *field_type == FieldType::Boolean => {
            let text = if value.is_truthy() { "Yes" } else { "No" };
            text.to_string()
        }
        Some(value) => value.as_display_string(),
    }
}

/// Host of an absolute URL, otherwise the text clipped to
/// [`URL_DISPLAY_LIMIT`] characters.
pub fn url_display(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(parsed) = url::Url::parse(raw) {
        return parsed.host_str().unwrap_or_default().to_string();
    }

    truncate_with_ellipsis(raw, URL_DISPLAY_LIMIT)
}

pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

/// Navigation target of a link cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub record_id: RecordId,
    pub url: String,
}

impl LinkTarget {
    fn new(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            url: format!("/{}", record_id),
        }
    }
}

/// How a cell should be rendered. Pills take precedence over every typed
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Pill(PillStyle),
    Link(LinkTarget),
    Boolean { checked: bool },
    Currency,
    Percent,
    Date,
    DateTime,
    Email { href: String },
    Phone { href: String },
    Url { display: String },
    Text,
}

impl CellKind {
    pub fn is_pill(&self) -> bool {
        matches!(self, Self::Pill(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCell {
    pub key: String,
    pub field_name: String,
    pub raw_value: Option<FieldValue>,
    pub display_value: String,
    pub kind: CellKind,
}

impl DisplayCell {
    pub fn link(&self) -> Option<&LinkTarget> {
        match &self.kind {
            CellKind::Link(target) => Some(target),
            _ => None,
        }
    }

    pub fn pill_style(&self) -> Option<&PillStyle> {
        match &self.kind {
            CellKind::Pill(style) => Some(style),
            _ => None,
        }
    }
}

/// Render-ready projection of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub id: RecordId,
    pub cells: Vec<DisplayCell>,
    pub file: Option<FileAttributes>,
}

impl DisplayRow {
    pub fn cell(&self, field: &str) -> Option<&DisplayCell> {
        self.cells.iter().find(|c| c.field_name == field)
    }
}

pub fn is_link_eligible(column: &ColumnView) -> bool {
    column.is_name_field || column.field_name == "Name" || column.field_name.ends_with(".Name")
}

/// Projects records against a fixed set of visible columns.
pub struct DisplayRowBuilder<'a> {
    columns: &'a [ColumnView],
    file_kind: Option<FileObjectKind>,
}

impl<'a> DisplayRowBuilder<'a> {
    pub fn new(columns: &'a [ColumnView], file_kind: Option<FileObjectKind>) -> Self {
        Self { columns, file_kind }
    }

    pub fn build_row(&self, record: &Record) -> DisplayRow {
        let id = record.id().unwrap_or_default().to_string();

        let cells = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| self.build_cell(record, &id, index, column))
            .collect();

        DisplayRow {
            cells,
            file: self
                .file_kind
                .map(|kind| FileAttributes::from_record(kind, record)),
            id,
        }
    }

    fn build_cell(
        &self,
        record: &Record,
        id: &str,
        index: usize,
        column: &ColumnView,
    ) -> DisplayCell {
        let value = record.resolve(&column.field_name);
        let display_value = format_value(value, &column.field_type);

        DisplayCell {
            key: format!("{}-{}-{}", id, column.field_name, index),
            field_name: column.field_name.clone(),
            raw_value: value.cloned(),
            kind: cell_kind(record, value, &display_value, column),
            display_value,
        }
    }
}

fn cell_kind(
    record: &Record,
    value: Option<&FieldValue>,
    display_value: &str,
    column: &ColumnView,
) -> CellKind {
    let truthy = value.is_some_and(FieldValue::is_truthy);

    if column.display_as_pill && truthy {
        let raw = value.map(FieldValue::as_display_string).unwrap_or_default();
        return CellKind::Pill(column.pill_colors.style_for(&raw));
    }

    if is_link_eligible(column)
        && let Some(record_id) = record
            .link_record_id(&column.field_name)
            .filter(|id| !id.is_empty())
    {
        return CellKind::Link(LinkTarget::new(record_id));
    }

    let href = |scheme: &str| {
        if truthy {
            format!("{}:{}", scheme, display_value)
        } else {
            String::new()
        }
    };

    match &column.field_type {
        FieldType::Boolean => CellKind::Boolean { checked: truthy },
        FieldType::Currency => CellKind::Currency,
        FieldType::Percent => CellKind::Percent,
        FieldType::Date => CellKind::Date,
        FieldType::DateTime => CellKind::DateTime,
        FieldType::Email => CellKind::Email {
            href: href("mailto"),
        },
        FieldType::Phone => CellKind::Phone { href: href("tel") },
        FieldType::Url => CellKind::Url {
            display: url_display(display_value),
        },
        FieldType::String | FieldType::Other(_) => CellKind::Text,
    }
}
