//! Tests for the Keitaro adapter against a local server

use domain_monitor::adapters::KeitaroClient;
use domain_monitor::config::KeitaroConfig;
use domain_monitor::core::ports::DomainSource;
use domain_monitor::error::FetchError;

use crate::common::{MockServer, refused_url};

const LISTING: &str = r#"[
    {"id": 1, "name": "a.example", "group": "killa", "state": "active", "group_id": 10},
    {"id": 2, "name": "b.example", "group": "other", "state": "deleted", "group_id": 20},
    {"id": 3, "name": "c.example", "group": "killa", "state": "active", "group_id": 10},
    {"id": 4, "name": "d.example", "group": "Killa", "state": "active", "group_id": 11},
    {"id": 5, "name": "e.example", "group": "killa", "state": "inactive", "group_id": 10}
]"#;

fn client_for(base_url: &str) -> KeitaroClient {
    KeitaroClient::new(&KeitaroConfig {
        api_key: "tracker-key".to_string(),
        base_url: base_url.to_string(),
    })
    .unwrap()
}

fn names(domains: &[domain_monitor::core::models::TrackedDomain]) -> Vec<&str> {
    domains.iter().map(|d| d.name.as_str()).collect()
}

#[test]
fn list_all_preserves_upstream_order() {
    let server = MockServer::fixed(200, LISTING);
    let domains = client_for(server.url()).list_all().unwrap();

    assert_eq!(names(&domains), vec!["a.example", "b.example", "c.example", "d.example", "e.example"]);
    assert_eq!(domains[1].activity_state, "deleted");
    assert_eq!(domains[3].group_id, 11);
}

#[test]
fn list_all_sends_authenticated_get() {
    let server = MockServer::fixed(200, "[]");
    client_for(&format!("{}/admin_api/v1", server.url())).list_all().unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/admin_api/v1/domains");
    assert_eq!(requests[0].header("Api-Key"), Some("tracker-key"));
}

#[test]
fn list_active_filters_by_state() {
    let server = MockServer::fixed(200, LISTING);
    let domains = client_for(server.url()).list_active().unwrap();
    assert_eq!(names(&domains), vec!["a.example", "c.example", "d.example"]);
    assert!(domains.iter().all(|d| d.activity_state == "active"));
}

#[test]
fn list_by_group_is_case_sensitive() {
    let server = MockServer::fixed(200, LISTING);
    let client = client_for(server.url());
    assert_eq!(names(&client.list_by_group("killa").unwrap()), vec!["a.example", "c.example", "e.example"]);
    assert_eq!(names(&client.list_by_group("Killa").unwrap()), vec!["d.example"]);
    assert!(client.list_by_group("killa ").unwrap().is_empty());
}

#[test]
fn list_limit_returns_prefix() {
    let server = MockServer::fixed(200, LISTING);
    let client = client_for(server.url());
    assert_eq!(names(&client.list_limit(2).unwrap()), vec!["a.example", "b.example"]);
    assert_eq!(client.list_limit(99).unwrap().len(), 5);
}

#[test]
fn empty_listing_is_not_an_error() {
    let server = MockServer::fixed(200, "[]");
    let client = client_for(server.url());
    assert!(client.list_all().unwrap().is_empty());
    assert!(client.list_active().unwrap().is_empty());
}

#[test]
fn non_200_carries_only_status() {
    let server = MockServer::fixed(401, r#"{"error": "Unauthorized"}"#);
    let err = client_for(server.url()).list_active().unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 401, body: None }));
}

#[test]
fn malformed_listing_is_decode_error() {
    let server = MockServer::fixed(200, r#"{"domains": []}"#);
    let err = client_for(server.url()).list_all().unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn connection_refused_is_transport_error() {
    let err = client_for(&refused_url()).list_all().unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
