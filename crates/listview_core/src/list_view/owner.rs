use super::ListView;
use crate::notification::Notification;
use crate::owner_change::OwnerChangeDialog;
use crate::service::OwnerChangeRequest;
use log::{debug, error, info, warn};

pub const OWNER_CHANGE_FALLBACK: &str = "Failed to change owner";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerChangeOutcome {
    /// No target owner or no selected records; nothing was sent.
    Skipped,
    Changed { count: u32 },
    Failed { message: String },
}

impl ListView {
    pub fn owner_dialog(&self) -> &OwnerChangeDialog {
        &self.owner_dialog
    }

    pub fn open_change_owner(&mut self) {
        self.owner_dialog.open();
    }

    /// Single-row shortcut: the row becomes the whole selection.
    pub fn open_change_owner_for(&mut self, record_id: &str) {
        self.selection
            .replace_with([record_id.to_string()], &self.records);
        self.owner_dialog.open();
    }

    pub fn close_change_owner(&mut self) {
        self.owner_dialog.close();
    }

    pub fn on_user_search_input(&mut self, value: &str) {
        self.owner_dialog.on_search_input(value);
    }

    /// Wait for user-search typing to settle and run the directory lookup.
    ///
    /// Returns false when no search was pending. Lookup failures clear the
    /// results and are only logged.
    pub async fn settle_user_search(&mut self) -> bool {
        let Some(term) = self.owner_dialog.settled_search().await else {
            return false;
        };

        let directory = self.services.directory.clone();
        match directory.search_users(&term).await {
            Ok(users) => {
                debug!("User search '{}' returned {} users", term, users.len());
                self.owner_dialog.search_finished(users);
            }
            Err(err) => {
                error!("Error searching users: {}", err);
                self.owner_dialog.search_finished(Vec::new());
            }
        }

        true
    }

    pub fn select_new_owner(&mut self, user_id: &str) -> bool {
        self.owner_dialog.select_user(user_id)
    }

    /// Reassign every selected record to the chosen owner.
    pub async fn confirm_owner_change(&mut self) -> OwnerChangeOutcome {
        let Some(owner) = self.owner_dialog.selected_owner().cloned() else {
            debug!("Owner change confirmed without a target owner");
            return OwnerChangeOutcome::Skipped;
        };

        if self.selection.is_empty() {
            debug!("Owner change confirmed without selected records");
            return OwnerChangeOutcome::Skipped;
        }

        self.owner_dialog.set_changing(true);

        let request = OwnerChangeRequest {
            record_ids: self.selection.ids(),
            new_owner_id: owner.id.clone(),
        };
        info!(
            "Changing owner of {} record(s) to {}",
            request.record_ids.len(),
            owner.id
        );

        let service = self.services.owner_change.clone();
        let outcome = match service.change_owner(request).await {
            Ok(response) if response.success => {
                let count = response.success_count;
                self.notify(Notification::success(format!(
                    "Successfully changed owner for {} record(s)",
                    count
                )));
                self.selection.clear();
                self.owner_dialog.close();

                if let Err(err) = self.refresh().await {
                    warn!("Reload after owner change failed: {}", err);
                }

                OwnerChangeOutcome::Changed { count }
            }
            Ok(response) => {
                let message = response
                    .error_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| OWNER_CHANGE_FALLBACK.to_string());
                error!("Owner change rejected: {}", message);
                self.notify(Notification::error(message.clone()));
                OwnerChangeOutcome::Failed { message }
            }
            Err(err) => {
                error!("Owner change failed: {}", err);
                let message = err.user_message();
                self.notify(Notification::error(message.clone()));
                OwnerChangeOutcome::Failed { message }
            }
        };

        self.owner_dialog.set_changing(false);
        outcome
    }
}
