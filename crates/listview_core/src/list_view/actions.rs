use super::ListView;
use crate::file::FileAttributes;
use crate::navigation::{
    DOWNLOAD_MISSING_ID_MESSAGE, NavigationIntent, PREVIEW_MISSING_ID_MESSAGE, RowAction,
    download_url,
};
use crate::notification::Notification;

impl ListView {
    // --- Selection ---

    pub fn select_all(&mut self, checked: bool) {
        self.selection.select_all(&self.records, checked);
    }

    pub fn toggle_selection(&mut self, record_id: &str, checked: bool) {
        self.selection.toggle(record_id, checked, &self.records);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- Filter menus ---

    pub fn toggle_filter_menu(&mut self, field: &str) {
        self.filters.toggle_menu(field);
    }

    /// Outside click on the filter bar.
    pub fn close_filter_menus(&mut self) -> bool {
        self.filters.close_menus()
    }

    // --- Column resize ---

    pub fn begin_resize(&mut self, field: &str, pointer_x: f32, current_width: f32) {
        self.resize.begin(field, pointer_x, current_width);
    }

    pub fn drag_resize(&mut self, pointer_x: f32) -> Option<f32> {
        self.resize.drag_to(pointer_x)
    }

    pub fn end_resize(&mut self) {
        self.resize.end();
    }

    pub fn reset_column_widths(&mut self) {
        self.resize.reset();
    }

    pub fn is_tracking_pointer(&self) -> bool {
        self.resize.is_tracking_pointer()
    }

    // --- Text wrap ---

    pub fn toggle_text_wrap(&mut self) {
        self.user_text_wrap = Some(self.active_text_wrap().toggled());
    }

    // --- Navigation ---

    /// Clicking a row body opens the record.
    pub fn row_click(&self, record_id: &str) -> Option<NavigationIntent> {
        (!record_id.is_empty()).then(|| NavigationIntent::RecordView {
            record_id: record_id.to_string(),
        })
    }

    /// Clicking a name link opens the linked record, which may be a related
    /// one for relational name fields.
    pub fn link_click(&self, record_id: &str) -> Option<NavigationIntent> {
        self.row_click(record_id)
    }

    pub fn handle_row_action(
        &mut self,
        action: RowAction,
        record_id: &str,
    ) -> Option<NavigationIntent> {
        match action {
            RowAction::View => self.row_click(record_id),
            RowAction::Edit => (!record_id.is_empty()).then(|| NavigationIntent::RecordEdit {
                record_id: record_id.to_string(),
            }),
            RowAction::ChangeOwner => {
                self.open_change_owner_for(record_id);
                None
            }
            RowAction::ViewFile => {
                let document_id = self
                    .file_attributes(record_id)
                    .and_then(|f| f.content_document_id);

                match document_id {
                    Some(content_document_id) => {
                        Some(NavigationIntent::FilePreview { content_document_id })
                    }
                    None => {
                        self.notify(Notification::error(PREVIEW_MISSING_ID_MESSAGE));
                        None
                    }
                }
            }
            RowAction::DownloadFile => {
                let file = self.file_attributes(record_id);
                let url = file.as_ref().and_then(|f| {
                    download_url(
                        f.content_document_id.as_deref(),
                        f.content_version_id.as_deref(),
                    )
                });

                match url {
                    Some(url) => Some(NavigationIntent::FileDownload { url }),
                    None => {
                        self.notify(Notification::error(DOWNLOAD_MISSING_ID_MESSAGE));
                        None
                    }
                }
            }
        }
    }

    fn file_attributes(&self, record_id: &str) -> Option<FileAttributes> {
        let kind = self.file_kind?;
        self.records
            .iter()
            .find(|r| r.id() == Some(record_id))
            .map(|record| FileAttributes::from_record(kind, record))
    }
}
