use crate::debounce::Debouncer;
use crate::service::DirectoryUser;
use tokio::time::Instant;

/// Directory searches are only issued for at least this many characters.
pub const MIN_USER_SEARCH_LENGTH: usize = 2;

/// A directory result annotated with the current choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChoice {
    pub user: DirectoryUser,
    pub is_selected: bool,
}

impl UserChoice {
    pub fn item_class(&self) -> &'static str {
        if self.is_selected {
            "user-item user-item-selected"
        } else {
            "user-item"
        }
    }
}

/// State of the "change owner" dialog.
#[derive(Debug, Default)]
pub struct OwnerChangeDialog {
    open: bool,
    search_term: String,
    results: Vec<DirectoryUser>,
    selected_owner: Option<DirectoryUser>,
    is_searching: bool,
    is_changing: bool,
    search: Debouncer<String>,
}

impl OwnerChangeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with a blank search.
    pub fn open(&mut self) {
        self.reset();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.reset();
        self.open = false;
    }

    fn reset(&mut self) {
        self.search.cancel();
        self.search_term.clear();
        self.results.clear();
        self.selected_owner = None;
        self.is_searching = false;
        self.is_changing = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Record a keystroke. Input shorter than [`MIN_USER_SEARCH_LENGTH`]
    /// clears the results and drops any pending search.
    pub fn on_search_input(&mut self, value: &str) {
        self.search_term = value.to_string();

        if value.chars().count() < MIN_USER_SEARCH_LENGTH {
            self.search.cancel();
            self.results.clear();
            return;
        }

        self.search.schedule(value.to_string());
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Wait for the typing to settle and return the term to look up.
    pub(crate) async fn settled_search(&mut self) -> Option<String> {
        let term = self.search.settled().await?;
        self.is_searching = true;
        Some(term)
    }

    pub(crate) fn search_finished(&mut self, results: Vec<DirectoryUser>) {
        self.results = results;
        self.is_searching = false;
    }

    pub fn cancel_search(&mut self) -> bool {
        self.search.cancel()
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn results(&self) -> Vec<UserChoice> {
        let selected_id = self.selected_owner.as_ref().map(|u| u.id.as_str());

        self.results
            .iter()
            .map(|user| UserChoice {
                is_selected: selected_id == Some(user.id.as_str()),
                user: user.clone(),
            })
            .collect()
    }

    /// Pick one of the current results. Unknown ids are ignored.
    pub fn select_user(&mut self, user_id: &str) -> bool {
        match self.results.iter().find(|u| u.id == user_id) {
            Some(user) => {
                self.selected_owner = Some(user.clone());
                true
            }
            None => false,
        }
    }

    pub fn selected_owner(&self) -> Option<&DirectoryUser> {
        self.selected_owner.as_ref()
    }

    pub fn is_changing(&self) -> bool {
        self.is_changing
    }

    pub(crate) fn set_changing(&mut self, changing: bool) {
        self.is_changing = changing;
    }

    pub fn confirm_disabled(&self) -> bool {
        self.selected_owner.is_none() || self.is_changing
    }

    pub fn confirm_button_label(&self) -> &'static str {
        if self.is_changing {
            "Changing..."
        } else {
            "Change Owner"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn users() -> Vec<DirectoryUser> {
        vec![
            DirectoryUser::new("005A", "Ada Lovelace"),
            DirectoryUser::new("005B", "Alan Turing"),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn short_input_clears_results_and_cancels_search() {
        let mut dialog = OwnerChangeDialog::new();
        dialog.open();
        dialog.search_finished(users());

        dialog.on_search_input("ad");
        assert!(dialog.search_deadline().is_some());

        dialog.on_search_input("a");
        assert!(dialog.search_deadline().is_none());
        assert!(!dialog.has_results());
        assert_eq!(dialog.settled_search().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn search_settles_on_last_term() {
        let mut dialog = OwnerChangeDialog::new();
        dialog.open();

        dialog.on_search_input("ad");
        tokio::time::advance(Duration::from_millis(200)).await;
        dialog.on_search_input("ada");

        assert_eq!(dialog.settled_search().await.as_deref(), Some("ada"));
        assert!(dialog.is_searching());

        dialog.search_finished(users());
        assert!(!dialog.is_searching());
        assert!(dialog.has_results());
    }

    #[test]
    fn selection_marks_results_and_enables_confirm() {
        let mut dialog = OwnerChangeDialog::new();
        dialog.open();
        dialog.search_finished(users());
        assert!(dialog.confirm_disabled());

        assert!(!dialog.select_user("005Z"));
        assert!(dialog.select_user("005B"));

        let results = dialog.results();
        assert!(!results[0].is_selected);
        assert!(results[1].is_selected);
        assert_eq!(results[1].item_class(), "user-item user-item-selected");
        assert!(!dialog.confirm_disabled());

        dialog.set_changing(true);
        assert!(dialog.confirm_disabled());
        assert_eq!(dialog.confirm_button_label(), "Changing...");
    }

    #[test]
    fn close_resets_everything() {
        let mut dialog = OwnerChangeDialog::new();
        dialog.open();
        dialog.search_finished(users());
        dialog.select_user("005A");
        dialog.set_changing(true);

        dialog.close();

        assert!(!dialog.is_open());
        assert!(dialog.selected_owner().is_none());
        assert!(!dialog.is_changing());
        assert_eq!(dialog.confirm_button_label(), "Change Owner");
    }
}
