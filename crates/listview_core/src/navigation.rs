use crate::RecordId;

pub const PREVIEW_MISSING_ID_MESSAGE: &str =
    "Unable to preview file - Content Document ID not found";
pub const DOWNLOAD_MISSING_ID_MESSAGE: &str = "Unable to download file - file ID not found";

/// Per-row menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    ChangeOwner,
    ViewFile,
    DownloadFile,
}

impl RowAction {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "view" => Some(Self::View),
            "edit" => Some(Self::Edit),
            "changeOwner" => Some(Self::ChangeOwner),
            "viewFile" => Some(Self::ViewFile),
            "downloadFile" => Some(Self::DownloadFile),
            _ => None,
        }
    }
}

/// Where the host should take the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    RecordView { record_id: RecordId },
    RecordEdit { record_id: RecordId },
    FilePreview { content_document_id: String },
    FileDownload { url: String },
}

/// Version downloads are preferred; the document URL is the fallback.
pub fn download_url(
    content_document_id: Option<&str>,
    content_version_id: Option<&str>,
) -> Option<String> {
    if let Some(version_id) = non_empty(content_version_id) {
        return Some(format!("/sfc/servlet.shepherd/version/download/{}", version_id));
    }

    non_empty(content_document_id)
        .map(|document_id| format!("/sfc/servlet.shepherd/document/download/{}", document_id))
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}
