//! Integration tests for the customer list coordinator.
//!
//! A `wiremock` server stands in for the Directory Service; the tests
//! drive the coordinator the way the list screen would and assert on the
//! requests the service actually saw.

#![allow(clippy::indexing_slicing)]

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rolodex_core::{CustomerId, ListQuery, SortKey};
use rolodex_directory::FetchPhase;

use rolodex_integration_tests::{
    DEBOUNCE_SETTLE, mutation_ack_json, page_json, test_session, user_json,
};

#[tokio::test]
async fn test_search_burst_fetches_once_with_final_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            1,
            10,
            1,
            vec![user_json("u-1", "Grace", "Hopper")],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session(&server);
    let list = session.list();

    // A burst of keystrokes inside one debounce window.
    list.set_search_term("g");
    list.set_search_term("gr");
    list.set_search_term("gra");

    tokio::time::sleep(DEBOUNCE_SETTLE).await;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1, "burst should cost a single request");
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("search=gra"), "got query: {query}");
    assert!(query.contains("page=1"), "search resets to the first page");

    let snapshot = list.snapshot();
    assert_eq!(snapshot.phase, FetchPhase::Ready);
    assert_eq!(snapshot.query.search_term, "gra");
    assert_eq!(snapshot.query.page_index, 0);
    assert_eq!(snapshot.records.len(), 1);
}

#[tokio::test]
async fn test_new_keystroke_restarts_debounce() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(1, 10, 0, Vec::new())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session(&server);
    let list = session.list();

    // Second keystroke lands mid-window; only it may fire.
    list.set_search_term("a");
    tokio::time::sleep(Duration::from_millis(20)).await;
    list.set_search_term("ab");

    tokio::time::sleep(DEBOUNCE_SETTLE).await;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("search=ab"), "got query: {query}");
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let server = MockServer::start().await;

    // The first page answers slowly, the second immediately.
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(1, 10, 25, vec![user_json("u-old", "Ada", "Lovelace")]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            2,
            10,
            25,
            vec![user_json("u-new", "Grace", "Hopper")],
        )))
        .mount(&server)
        .await;

    let session = test_session(&server);
    let list = session.list();

    // Issue the slow fetch first, the fast one second.
    tokio::join!(list.set_page(0), list.set_page(1));

    // Give the slow response time to come back after the fast one applied.
    tokio::time::sleep(Duration::from_millis(400)).await;

    let snapshot = list.snapshot();
    assert_eq!(snapshot.phase, FetchPhase::Ready);
    assert_eq!(snapshot.query.page_index, 1);
    assert_eq!(snapshot.records.len(), 1);
    assert_eq!(
        snapshot.records[0].id,
        CustomerId::from("u-new"),
        "the newer fetch must win regardless of arrival order"
    );
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            1,
            10,
            1,
            vec![user_json("u-1", "Grace", "Hopper")],
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let session = test_session(&server);
    let list = session.list();

    list.refresh().await;
    assert_eq!(list.snapshot().phase, FetchPhase::Ready);

    list.refresh().await;

    let snapshot = list.snapshot();
    assert!(
        matches!(snapshot.phase, FetchPhase::Failed(_)),
        "got phase: {:?}",
        snapshot.phase
    );
    assert_eq!(snapshot.records.len(), 1, "stale records stay visible");
    assert_eq!(snapshot.total, 1);
}

#[tokio::test]
async fn test_page_size_and_sort_changes_keep_page_index() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(1, 10, 0, Vec::new())),
        )
        .expect(3)
        .mount(&server)
        .await;

    let session = test_session(&server);
    let list = session.list();

    list.set_page(3).await;
    list.set_sort_key(SortKey::Email).await;
    list.set_page_size(25).await;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 3, "each change fetches immediately");
    let first = requests[0].url.query().unwrap_or_default();
    assert!(first.contains("page=4"), "0-based index 3 is wire page 4");
    let second = requests[1].url.query().unwrap_or_default();
    assert!(second.contains("sortBy=email"), "got query: {second}");
    assert!(second.contains("page=4"), "sort change keeps the page index");
    let third = requests[2].url.query().unwrap_or_default();
    assert!(third.contains("perPage=25"), "got query: {third}");
    assert!(third.contains("page=4"), "size change keeps the page index");
    assert_eq!(list.snapshot().query.page_index, 3);
}

#[tokio::test]
async fn test_apply_query_issues_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("search", "hopper"))
        .and(query_param("page", "2"))
        .and(query_param("perPage", "25"))
        .and(query_param("sortBy", "country"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(2, 25, 30, Vec::new())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session(&server);
    session
        .list()
        .apply_query(ListQuery {
            search_term: "hopper".to_string(),
            page_index: 1,
            page_size: 25,
            sort_key: SortKey::Country,
        })
        .await;

    assert_eq!(session.list().snapshot().phase, FetchPhase::Ready);
}

#[tokio::test]
async fn test_declined_delete_issues_no_requests() {
    let server = MockServer::start().await;

    let session = test_session(&server);
    let deleted = session
        .delete_record(&CustomerId::from("u-1"), false)
        .await;

    assert!(!deleted);
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "declining must not touch the network");
}

#[tokio::test]
async fn test_confirmed_delete_issues_delete_then_refetch() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mutation_ack_json(true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(1, 10, 0, Vec::new())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session(&server);
    let deleted = session.delete_record(&CustomerId::from("u-1"), true).await;

    assert!(deleted);
    let snapshot = session.list().snapshot();
    assert_eq!(snapshot.phase, FetchPhase::Ready);
    assert_eq!(snapshot.total, 0);
}

#[tokio::test]
async fn test_failed_delete_surfaces_in_phase() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/u-1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session(&server);
    let deleted = session.delete_record(&CustomerId::from("u-1"), true).await;

    assert!(!deleted);
    assert!(matches!(
        session.list().snapshot().phase,
        FetchPhase::Failed(_)
    ));
}
