use crate::csv::{CSV_MIME_TYPE, CsvArtifact, CsvExporter, export_file_name};
use crate::ExportError;
use listview_core::{ListView, Notification, Record};
use log::{error, info, warn};

pub const NOTHING_TO_EXPORT_MESSAGE: &str = "No records to export";
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to export data";
pub const FETCH_ALL_FAILED_MESSAGE: &str = "Failed to fetch all records for export";

/// Export the records currently shown.
pub fn export_page(view: &mut ListView) -> Result<CsvArtifact, ExportError> {
    let records = view.records().clone();
    write_artifact(view, &records)
}

/// Fetch every matching record in one request and export them.
///
/// An empty or rejected result yields a warning, a failed call an error
/// notification; neither produces a file.
pub async fn export_all(view: &mut ListView) -> Result<CsvArtifact, ExportError> {
    if view.total_records() == 0 {
        view.notify(Notification::warning(NOTHING_TO_EXPORT_MESSAGE));
        return Err(ExportError::NothingToExport);
    }

    match view.fetch_full_result().await {
        Ok(records) => write_artifact(view, &records),
        Err(err) => {
            error!("Export fetch failed: {}", err);
            view.notify(Notification::error(FETCH_ALL_FAILED_MESSAGE));
            Err(ExportError::FetchFailed(err.to_string()))
        }
    }
}

fn write_artifact(view: &mut ListView, records: &[Record]) -> Result<CsvArtifact, ExportError> {
    if records.is_empty() {
        warn!("Nothing to export");
        view.notify(Notification::warning(NOTHING_TO_EXPORT_MESSAGE));
        return Err(ExportError::NothingToExport);
    }

    let columns = view.columns();
    let content = match CsvExporter.export_to_string(records, &columns) {
        Ok(content) => content,
        Err(err) => {
            error!("CSV export failed: {}", err);
            view.notify(Notification::error(EXPORT_FAILED_MESSAGE));
            return Err(err);
        }
    };

    let record_count = records.len();
    info!("Exported {} record(s)", record_count);
    view.notify(Notification::success(format!(
        "Exported {} record(s)",
        record_count
    )));

    Ok(CsvArtifact {
        file_name: export_file_name(view.title()),
        mime_type: CSV_MIME_TYPE,
        content,
        record_count,
    })
}
