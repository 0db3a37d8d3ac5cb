use listview_core::{
    FetchOutcome, LOAD_ERROR_FALLBACK, ListViewConfig, ListViewError, LoadState, QueryResponse,
    ServiceError, UNEXPECTED_ERROR_MESSAGE,
};
use listview_test_support::fixtures::{Harness, account_config, accounts, response};
use listview_test_support::{FakeQueryOutcome, FakeQueryService, init_logging};

#[tokio::test]
async fn successful_fetch_replaces_records_and_total() {
    init_logging();
    let harness = Harness::new(FakeQueryService::new().with_dataset(accounts(45)));
    let mut view = harness.list_view(account_config());

    let outcome = view.refresh().await.expect("fetch succeeds");

    assert_eq!(
        outcome,
        FetchOutcome::Loaded {
            records: 20,
            total: 45
        }
    );
    assert_eq!(view.records().len(), 20);
    assert_eq!(view.total_records(), 45);
    assert_eq!(view.total_pages(), 3);
    assert!(!view.is_loading());
    assert_eq!(view.error_message(), None);
    assert_eq!(view.record_count_label(), "45 records");

    let request = harness.query.last_request().expect("one request");
    assert_eq!(request.page_number, 1);
    assert_eq!(request.page_size, 20);
    assert_eq!(request.scope_id, "");
}

#[tokio::test]
async fn rejected_query_clears_records_and_shows_message() {
    let query = FakeQueryService::new().with_dataset(accounts(5));
    let harness = Harness::new(query.clone());
    let mut view = harness.list_view(account_config());
    view.refresh().await.expect("first fetch succeeds");
    view.toggle_selection("001001", true);

    query.push_outcome(FakeQueryOutcome::Rejected("Field X not queryable".to_string()));
    let err = view.refresh().await.expect_err("rejected query");

    assert!(matches!(err, ListViewError::Service(ref m) if m == "Field X not queryable"));
    assert_eq!(view.error_message(), Some("Field X not queryable"));
    assert!(view.records().is_empty());
    assert_eq!(view.total_records(), 0);
    assert!(!view.is_loading());
    assert!(view.is_selected("001001"));
    assert!(!view.show_empty_state());
}

#[tokio::test]
async fn rejection_without_message_uses_fallback() {
    let query = FakeQueryService::new();
    query.push_response(QueryResponse {
        success: false,
        ..Default::default()
    });
    let mut view = Harness::new(query).list_view(account_config());

    assert!(view.refresh().await.is_err());
    assert_eq!(view.error_message(), Some(LOAD_ERROR_FALLBACK));
}

#[tokio::test]
async fn transport_failure_extracts_message() {
    let query = FakeQueryService::new();
    query.push_outcome(FakeQueryOutcome::Transport(ServiceError::remote(
        "Insufficient access",
    )));
    query.push_outcome(FakeQueryOutcome::Transport(ServiceError::Unknown));
    let mut view = Harness::new(query).list_view(account_config());

    let err = view.refresh().await.expect_err("transport failure");
    assert!(matches!(err, ListViewError::Transport(_)));
    assert_eq!(view.error_message(), Some("Insufficient access"));

    view.refresh().await.expect_err("transport failure");
    assert_eq!(view.error_message(), Some(UNEXPECTED_ERROR_MESSAGE));
}

#[tokio::test]
async fn missing_query_is_reported_without_fetching() {
    let harness = Harness::new(FakeQueryService::new());
    let mut view = harness.list_view(ListViewConfig::new("   "));

    let err = view.refresh().await.expect_err("no query configured");

    assert!(matches!(err, ListViewError::MissingQuery));
    assert_eq!(
        view.error_message(),
        Some("Please configure a SOQL query for this component.")
    );
    assert!(!view.is_loading());
    assert_eq!(harness.query.request_count(), 0);
}

#[test]
fn loading_spans_the_whole_fetch() {
    let mut view = Harness::new(FakeQueryService::new()).list_view(account_config());

    let ticket = view.begin_fetch().expect("query configured");
    assert!(view.is_loading());
    assert!(!view.show_empty_state());
    assert!(!view.has_records());

    view.finish_fetch(ticket, Ok(response(accounts(2), 2)))
        .expect("fetch succeeds");
    assert!(!view.is_loading());
    assert!(view.has_records());
}

#[test]
fn stale_responses_are_ignored() {
    let mut view = Harness::new(FakeQueryService::new()).list_view(account_config());

    let first = view.begin_fetch().expect("query configured");
    let second = view.begin_fetch().expect("query configured");
    assert!(second.seq() > first.seq());

    let stale = view
        .finish_fetch(first, Ok(response(accounts(10), 10)))
        .expect("stale results are not errors");
    assert_eq!(stale, FetchOutcome::Stale);
    assert!(view.records().is_empty());
    assert!(view.is_loading());

    view.finish_fetch(second, Ok(response(accounts(3), 3)))
        .expect("latest fetch applies");
    assert_eq!(view.records().len(), 3);
    assert_eq!(view.load_state(), &LoadState::Idle);
}

#[test]
fn stale_failure_does_not_clobber_fresh_data() {
    let mut view = Harness::new(FakeQueryService::new()).list_view(account_config());

    let first = view.begin_fetch().expect("query configured");
    let second = view.begin_fetch().expect("query configured");
    view.finish_fetch(second, Ok(response(accounts(4), 4)))
        .expect("latest fetch applies");

    let outcome = view
        .finish_fetch(first, Err(ServiceError::transport("timeout")))
        .expect("stale results are not errors");

    assert_eq!(outcome, FetchOutcome::Stale);
    assert_eq!(view.records().len(), 4);
    assert_eq!(view.error_message(), None);
}

#[tokio::test]
async fn request_carries_scope_and_sharing_flag() {
    let harness = Harness::new(FakeQueryService::new());
    let mut config = account_config();
    config.bypass_sharing = true;
    config.default_sort_column = "Name".to_string();
    let mut view = harness.list_view(config).with_scope_record("001PARENT");

    view.refresh().await.expect("fetch succeeds");

    let request = harness.query.last_request().expect("one request");
    assert_eq!(request.scope_id, "001PARENT");
    assert!(request.bypass_sharing);
    assert_eq!(request.sort_field, "Name");
    assert_eq!(request.sort_direction.as_str(), "ASC");
}
