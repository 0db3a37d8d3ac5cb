use crate::{FieldValue, Record};

pub const DEFAULT_FILE_ICON: &str = "doctype:attachment";

const EXTENSION_FIELDS: [&str; 4] = [
    "FileExtension",
    "FileType",
    "ContentDocument.FileExtension",
    "ContentDocument.FileType",
];

const TITLE_FIELDS: [&str; 4] = ["Title", "Name", "ContentDocument.Title", "PathOnClient"];

/// Which file-like object a query targets, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileObjectKind {
    ContentVersion,
    ContentDocumentLink,
    ContentDocument,
}

impl FileObjectKind {
    /// Detect the object from the `FROM` clause. `CONTENTDOCUMENTLINK` must be
    /// tested before its `CONTENTDOCUMENT` prefix.
    pub fn detect(query: &str) -> Option<Self> {
        let upper = query.to_uppercase();

        if upper.contains("FROM CONTENTVERSION") {
            Some(Self::ContentVersion)
        } else if upper.contains("FROM CONTENTDOCUMENTLINK") {
            Some(Self::ContentDocumentLink)
        } else if upper.contains("FROM CONTENTDOCUMENT") {
            Some(Self::ContentDocument)
        } else {
            None
        }
    }

    pub fn content_document_id(self, record: &Record) -> Option<String> {
        let value = match self {
            Self::ContentDocument => record.resolve("Id"),
            Self::ContentDocumentLink => non_empty(record.resolve("ContentDocumentId"))
                .or_else(|| record.resolve("ContentDocument.Id")),
            Self::ContentVersion => record.resolve("ContentDocumentId"),
        };

        non_empty_string(value)
    }

    pub fn content_version_id(self, record: &Record) -> Option<String> {
        let value = match self {
            Self::ContentVersion => record.resolve("Id"),
            Self::ContentDocument => record.resolve("LatestPublishedVersionId"),
            Self::ContentDocumentLink => {
                record.resolve("ContentDocument.LatestPublishedVersionId")
            }
        };

        non_empty_string(value)
    }
}

fn non_empty(value: Option<&FieldValue>) -> Option<&FieldValue> {
    value.filter(|v| v.is_truthy())
}

fn non_empty_string(value: Option<&FieldValue>) -> Option<String> {
    non_empty(value).map(FieldValue::as_display_string)
}

/// File facts derived once per record when the view targets files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    pub extension: String,
    pub icon: &'static str,
    pub content_document_id: Option<String>,
    pub content_version_id: Option<String>,
}

impl FileAttributes {
    pub fn from_record(kind: FileObjectKind, record: &Record) -> Self {
        let extension = file_extension(record);

        Self {
            icon: file_icon(&extension),
            extension,
            content_document_id: kind.content_document_id(record),
            content_version_id: kind.content_version_id(record),
        }
    }
}

/// Lower-cased extension from the explicit extension fields, else from the
/// first title-like field containing a dot.
pub fn file_extension(record: &Record) -> String {
    for field in EXTENSION_FIELDS {
        if let Some(value) = non_empty(record.resolve(field)) {
            return value.as_display_string().to_lowercase();
        }
    }

    for field in TITLE_FIELDS {
        if let Some(title) = record.resolve(field).and_then(FieldValue::as_str)
            && let Some((_, suffix)) = title.rsplit_once('.')
        {
            return suffix.to_lowercase();
        }
    }

    String::new()
}

pub fn file_icon(extension: &str) -> &'static str {
    let normalized = extension.to_lowercase().replacen('.', "", 1);

    match normalized.as_str() {
        "pdf" => "doctype:pdf",
        "doc" | "docx" | "word_x" => "doctype:word",
        "xls" | "xlsx" | "xlsm" => "doctype:excel",
        "csv" => "doctype:csv",
        "ppt" | "pptx" => "doctype:ppt",
        "txt" => "doctype:txt",
        "rtf" => "doctype:rtf",
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" | "tiff" | "tif" | "ico" => {
            "doctype:image"
        }
        "mp4" | "avi" | "mov" | "wmv" | "mkv" | "webm" => "doctype:video",
        "mp3" | "wav" | "ogg" | "flac" | "m4a" => "doctype:audio",
        "zip" | "rar" | "7z" | "tar" | "gz" => "doctype:zip",
        "html" | "htm" => "doctype:html",
        "xml" => "doctype:xml",
        "js" | "css" | "json" => "doctype:unknown",
        "eps" => "doctype:eps",
        "ai" => "doctype:ai",
        "psd" => "doctype:psd",
        "gdoc" => "doctype:gdoc",
        "gsheet" => "doctype:gsheet",
        "gpres" => "doctype:gpres",
        "keynote" => "doctype:keynote",
        "pages" => "doctype:pages",
        "numbers" => "doctype:numbers",
        "visio" => "doctype:visio",
        "link" => "doctype:link",
        "library_folder" => "doctype:library_folder",
        "folder" => "doctype:folder",
        _ => DEFAULT_FILE_ICON,
    }
}
