use crate::ExportError;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use listview_core::{ColumnView, Record, format_value};
use std::io::Write;

pub const CSV_MIME_TYPE: &str = "text/csv";

/// Byte-order mark written ahead of the header row.
pub const UTF8_BOM: &str = "\u{feff}";

/// Writes records as CSV using the same cell formatting as the table.
///
/// Every field is quoted. Rows are separated by `\n` with no terminator
/// after the last one.
pub struct CsvExporter;

impl CsvExporter {
    pub fn export(
        &self,
        records: &[Record],
        columns: &[ColumnView],
        writer: &mut dyn Write,
    ) -> Result<(), ExportError> {
        let mut body = Vec::new();
        {
            let mut csv_writer = WriterBuilder::new()
                .quote_style(QuoteStyle::Always)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(&mut body);

            csv_writer.write_record(columns.iter().map(|c| c.label.as_str()))?;

            for record in records {
                for column in columns {
                    let value = record.resolve(&column.field_name);
                    csv_writer.write_field(format_value(value, &column.field_type))?;
                }
                csv_writer.write_record(None::<&[u8]>)?;
            }

            csv_writer.flush()?;
        }

        if body.last() == Some(&b'\n') {
            body.pop();
        }

        writer.write_all(UTF8_BOM.as_bytes())?;
        writer.write_all(&body)?;
        writer.flush()?;
        Ok(())
    }

    pub fn export_to_string(
        &self,
        records: &[Record],
        columns: &[ColumnView],
    ) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.export(records, columns, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Finished CSV file ready to hand to the host for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
    pub record_count: usize,
}

/// `<title>_export.csv` with every whitespace run collapsed to `_`.
pub fn export_file_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 11);
    let mut in_whitespace = false;

    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(ch);
            in_whitespace = false;
        }
    }

    name.push_str("_export.csv");
    name
}
