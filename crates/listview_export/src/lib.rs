mod csv;
mod flow;

use thiserror::Error;

pub use csv::{CSV_MIME_TYPE, CsvArtifact, CsvExporter, UTF8_BOM, export_file_name};
pub use flow::{
    EXPORT_FAILED_MESSAGE, FETCH_ALL_FAILED_MESSAGE, NOTHING_TO_EXPORT_MESSAGE, export_all,
    export_page,
};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("No records to export")]
    NothingToExport,

    #[error("Failed to fetch records for export: {0}")]
    FetchFailed(String),
}
