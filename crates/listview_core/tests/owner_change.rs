use listview_core::{
    DirectoryUser, OWNER_CHANGE_FALLBACK, OwnerChangeOutcome, RowAction, ServiceError, Severity,
};
use listview_test_support::fixtures::{Harness, account_config, accounts};
use listview_test_support::{
    FakeDirectory, FakeOwnerChange, FakeOwnerChangeOutcome, FakeQueryService,
};

fn directory() -> FakeDirectory {
    FakeDirectory::new().with_users(vec![
        DirectoryUser::new("005A", "Ada Lovelace"),
        DirectoryUser::new("005B", "Alan Turing"),
        DirectoryUser::new("005C", "Grace Hopper"),
    ])
}

async fn pick_owner(view: &mut listview_core::ListView, term: &str, user_id: &str) {
    view.on_user_search_input(term);
    assert!(view.settle_user_search().await);
    assert!(view.select_new_owner(user_id));
}

#[tokio::test(start_paused = true)]
async fn user_search_is_debounced_and_needs_two_characters() {
    let harness = Harness::new(FakeQueryService::new()).with_directory(directory());
    let mut view = harness.list_view(account_config());
    view.open_change_owner();

    view.on_user_search_input("a");
    assert!(!view.settle_user_search().await);
    assert!(harness.directory.searches().is_empty());

    view.on_user_search_input("al");
    view.on_user_search_input("ala");
    view.on_user_search_input("alan");
    assert!(view.settle_user_search().await);

    assert_eq!(harness.directory.searches(), vec!["alan"]);
    let results = view.owner_dialog().results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].user.name, "Alan Turing");
    assert!(!view.owner_dialog().is_searching());

    view.on_user_search_input("a");
    assert!(!view.owner_dialog().has_results());
}

#[tokio::test(start_paused = true)]
async fn directory_failures_clear_results() {
    let harness = Harness::new(FakeQueryService::new())
        .with_directory(directory().with_error(ServiceError::transport("offline")));
    let mut view = harness.list_view(account_config());
    view.open_change_owner();

    view.on_user_search_input("Ada");
    assert!(view.settle_user_search().await);

    assert!(!view.owner_dialog().has_results());
    assert!(!view.owner_dialog().is_searching());
    assert!(view.take_notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn successful_change_clears_selection_and_reloads() {
    let harness = Harness::new(FakeQueryService::new().with_dataset(accounts(5)))
        .with_directory(directory());
    let mut view = harness.list_view(account_config());
    view.refresh().await.expect("initial fetch");
    view.toggle_selection("001001", true);
    view.toggle_selection("001003", true);

    view.open_change_owner();
    pick_owner(&mut view, "Grace", "005C").await;
    assert!(!view.owner_dialog().confirm_disabled());
    assert!(view.owner_dialog().results()[0].is_selected);

    let outcome = view.confirm_owner_change().await;

    assert_eq!(outcome, OwnerChangeOutcome::Changed { count: 2 });
    let requests = harness.owner_change.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].record_ids, vec!["001001", "001003"]);
    assert_eq!(requests[0].new_owner_id, "005C");

    assert!(!view.has_selected_records());
    assert!(!view.owner_dialog().is_open());
    assert!(!view.owner_dialog().is_changing());
    assert_eq!(harness.query.request_count(), 2);

    let notifications = view.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Success);
    assert_eq!(
        notifications[0].message,
        "Successfully changed owner for 2 record(s)"
    );
}

#[tokio::test(start_paused = true)]
async fn rejected_change_keeps_dialog_and_selection() {
    let harness = Harness::new(FakeQueryService::new().with_dataset(accounts(3)))
        .with_directory(directory())
        .with_owner_change(FakeOwnerChange::new().with_outcome(
            FakeOwnerChangeOutcome::Rejected(Some("Insufficient privileges".to_string())),
        ));
    let mut view = harness.list_view(account_config());
    view.refresh().await.expect("initial fetch");
    view.select_all(true);
    view.open_change_owner();
    pick_owner(&mut view, "Ada", "005A").await;

    let outcome = view.confirm_owner_change().await;

    assert_eq!(
        outcome,
        OwnerChangeOutcome::Failed {
            message: "Insufficient privileges".to_string()
        }
    );
    assert!(view.owner_dialog().is_open());
    assert!(!view.owner_dialog().is_changing());
    assert_eq!(view.owner_dialog().confirm_button_label(), "Change Owner");
    assert_eq!(view.selected_count(), 3);
    assert_eq!(harness.query.request_count(), 1);

    let notifications = view.take_notifications();
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(notifications[0].message, "Insufficient privileges");
}

#[tokio::test(start_paused = true)]
async fn rejection_without_message_uses_fallback() {
    let harness = Harness::new(FakeQueryService::new().with_dataset(accounts(1)))
        .with_directory(directory())
        .with_owner_change(
            FakeOwnerChange::new().with_outcome(FakeOwnerChangeOutcome::Rejected(None)),
        );
    let mut view = harness.list_view(account_config());
    view.refresh().await.expect("initial fetch");
    view.select_all(true);
    view.open_change_owner();
    pick_owner(&mut view, "Ada", "005A").await;

    let outcome = view.confirm_owner_change().await;

    assert_eq!(
        outcome,
        OwnerChangeOutcome::Failed {
            message: OWNER_CHANGE_FALLBACK.to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn transport_failure_is_reported() {
    let harness = Harness::new(FakeQueryService::new().with_dataset(accounts(1)))
        .with_directory(directory())
        .with_owner_change(FakeOwnerChange::new().with_outcome(
            FakeOwnerChangeOutcome::Transport(ServiceError::remote("Row lock")),
        ));
    let mut view = harness.list_view(account_config());
    view.refresh().await.expect("initial fetch");
    view.select_all(true);
    view.open_change_owner();
    pick_owner(&mut view, "Ada", "005A").await;

    let outcome = view.confirm_owner_change().await;

    assert_eq!(
        outcome,
        OwnerChangeOutcome::Failed {
            message: "Row lock".to_string()
        }
    );
    assert!(!view.owner_dialog().is_changing());
}

#[tokio::test]
async fn confirm_without_owner_or_selection_is_skipped() {
    let harness = Harness::new(FakeQueryService::new().with_dataset(accounts(2)))
        .with_directory(directory());
    let mut view = harness.list_view(account_config());
    view.refresh().await.expect("initial fetch");
    view.open_change_owner();

    assert_eq!(
        view.confirm_owner_change().await,
        OwnerChangeOutcome::Skipped
    );
    assert!(view.owner_dialog().confirm_disabled());
    assert!(harness.owner_change.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn row_action_changes_owner_of_that_row_only() {
    let harness = Harness::new(FakeQueryService::new().with_dataset(accounts(4)))
        .with_directory(directory());
    let mut view = harness.list_view(account_config());
    view.refresh().await.expect("initial fetch");
    view.toggle_selection("001001", true);
    view.toggle_selection("001002", true);

    let intent = view.handle_row_action(RowAction::ChangeOwner, "001004");
    assert_eq!(intent, None);
    assert!(view.owner_dialog().is_open());
    assert_eq!(view.selected_ids(), vec!["001004"]);

    pick_owner(&mut view, "Alan", "005B").await;
    view.confirm_owner_change().await;

    let requests = harness.owner_change.requests();
    assert_eq!(requests[0].record_ids, vec!["001004"]);
}

#[tokio::test]
async fn closing_the_dialog_resets_it() {
    let harness = Harness::new(FakeQueryService::new()).with_directory(directory());
    let mut view = harness.list_view(account_config());
    view.open_change_owner();
    view.on_user_search_input("Ada");

    view.close_change_owner();

    assert!(!view.owner_dialog().is_open());
    assert_eq!(view.owner_dialog().search_term(), "");
    assert!(view.owner_dialog().search_deadline().is_none());
}
