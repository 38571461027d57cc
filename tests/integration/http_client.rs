//! HTTP client tests against a mock Cloud Controller

use cforg::cloud::{CloudController, CloudControllerClient};
use cforg::config::ApiConfig;
use cforg::error::TransportError;
use cforg::org::{DomainScope, Limit, OrgCommandService};
use cforg::session::StaticSession;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CloudControllerClient {
    let session = StaticSession::logged_in(&server.uri(), "admin");
    CloudControllerClient::new(&ApiConfig::default(), Arc::new(session)).unwrap()
}

fn page(next_url: Option<&str>, resources: Vec<Value>) -> Value {
    json!({
        "total_results": resources.len(),
        "next_url": next_url,
        "resources": resources,
    })
}

fn resource(guid: &str, entity: Value) -> Value {
    json!({ "metadata": { "guid": guid, "url": "" }, "entity": entity })
}

fn quota_body(guid: &str, name: &str) -> Value {
    resource(
        guid,
        json!({
            "name": name,
            "non_basic_services_allowed": true,
            "total_services": 987,
            "total_routes": 789,
            "memory_limit": 123,
            "instance_memory_limit": 456,
            "app_instance_limit": 654,
            "total_reserved_route_ports": 321
        }),
    )
}

async fn mount_json(server: &MockServer, at: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_find_organization_sends_name_filter_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("q", "name:acme"))
        .and(header("Authorization", "bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            None,
            vec![
                resource("other-guid", json!({ "name": "ACME" })),
                resource(
                    "acme-guid",
                    json!({ "name": "acme", "quota_definition_guid": "q-guid" }),
                ),
            ],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let org = client_for(&server)
        .find_organization("acme")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(org.guid, "acme-guid");
    assert_eq!(org.quota_guid.as_deref(), Some("q-guid"));
}

#[tokio::test]
async fn test_find_organization_none_when_empty() {
    let server = MockServer::start().await;
    mount_json(&server, "/v2/organizations", page(None, vec![])).await;
    assert!(client_for(&server)
        .find_organization("ghost")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_listing_follows_next_url() {
    let server = MockServer::start().await;
    // first matching mock wins, so the page-2 mock goes in first
    Mock::given(method("GET"))
        .and(path("/v2/organizations/acme-guid/spaces"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            None,
            vec![resource("s2", json!({ "name": "second" }))],
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations/acme-guid/spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            Some("/v2/organizations/acme-guid/spaces?page=2"),
            vec![resource(
                "s1",
                json!({ "name": "first", "space_quota_definition_guid": "sq" }),
            )],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let spaces = client_for(&server).spaces("acme-guid").await.unwrap();
    let names: Vec<&str> = spaces.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(spaces[0].quota_guid.as_deref(), Some("sq"));
    assert!(spaces[1].quota_guid.is_none());
}

#[tokio::test]
async fn test_domains_carry_their_scope() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v2/shared_domains",
        page(None, vec![resource("d1", json!({ "name": "shared.example.com" }))]),
    )
    .await;
    mount_json(
        &server,
        "/v2/organizations/acme-guid/private_domains",
        page(None, vec![resource("d2", json!({ "name": "acme.example.com" }))]),
    )
    .await;

    let client = client_for(&server);
    let shared = client.shared_domains().await.unwrap();
    let owned = client.owned_domains("acme-guid").await.unwrap();
    assert_eq!(shared[0].scope, DomainScope::Shared);
    assert_eq!(owned[0].scope, DomainScope::Owned);
    assert_eq!(owned[0].name, "acme.example.com");
}

#[tokio::test]
async fn test_quota_translation_and_missing_quota() {
    let server = MockServer::start().await;
    mount_json(&server, "/v2/quota_definitions/q-guid", quota_body("q-guid", "gold")).await;
    mount_json(
        &server,
        "/v2/space_quota_definitions/sq-guid",
        resource("sq-guid", json!({ "name": "small", "instance_memory_limit": -1 })),
    )
    .await;

    let client = client_for(&server);
    let quota = client.org_quota("q-guid").await.unwrap().unwrap();
    assert_eq!(quota.name, "gold");
    assert_eq!(quota.memory_limit_mb, 123);
    assert_eq!(quota.instance_memory_limit_mb, Limit::Finite(456));
    assert!(quota.paid_services_allowed);

    let space_quota = client.space_quota("sq-guid").await.unwrap().unwrap();
    assert!(space_quota.instance_memory_limit_mb.is_unlimited());
    assert!(space_quota.reserved_route_ports.is_unlimited());

    // unmatched paths answer 404
    assert!(client.org_quota("gone").await.unwrap().is_none());
}

#[tokio::test]
async fn test_error_statuses_map_to_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/shared_domains"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/quota_definitions/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.find_organization("acme").await.unwrap_err(),
        TransportError::AuthenticationFailed(_)
    ));
    match client.shared_domains().await.unwrap_err() {
        TransportError::UnexpectedStatus { status, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(matches!(
        client.org_quota("broken").await.unwrap_err(),
        TransportError::InvalidResponse(_)
    ));
}

#[tokio::test]
async fn test_summary_end_to_end_fetches_shared_space_quota_once() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v2/organizations",
        page(
            None,
            vec![resource(
                "acme-guid",
                json!({ "name": "acme", "quota_definition_guid": "q-guid" }),
            )],
        ),
    )
    .await;
    mount_json(
        &server,
        "/v2/shared_domains",
        page(None, vec![resource("d1", json!({ "name": "shared.example.com" }))]),
    )
    .await;
    mount_json(
        &server,
        "/v2/organizations/acme-guid/private_domains",
        page(None, vec![resource("d2", json!({ "name": "acme.example.com" }))]),
    )
    .await;
    mount_json(&server, "/v2/quota_definitions/q-guid", quota_body("q-guid", "gold")).await;
    mount_json(
        &server,
        "/v2/organizations/acme-guid/spaces",
        page(
            None,
            vec![
                resource("s1", json!({ "name": "prod", "space_quota_definition_guid": "sq" })),
                resource("s2", json!({ "name": "dev", "space_quota_definition_guid": "sq" })),
            ],
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v2/space_quota_definitions/sq"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quota_body("sq", "small")))
        .expect(1)
        .mount(&server)
        .await;

    let session = StaticSession::logged_in(&server.uri(), "admin");
    let client = client_for(&server);
    let result = OrgCommandService::summary(&session, &client, "acme")
        .await
        .unwrap();

    let summary = result.summary;
    assert_eq!(summary.guid, "acme-guid");
    assert_eq!(summary.domains, vec!["acme.example.com", "shared.example.com"]);
    assert_eq!(summary.spaces, vec!["dev", "prod"]);
    assert_eq!(summary.space_quotas, vec!["small"]);
    assert_eq!(summary.quota.map(|q| q.name), Some("gold".to_string()));
}
