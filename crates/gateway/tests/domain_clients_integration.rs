//! Integration tests for the domain clients against a mock backend
//!
//! **Coverage:**
//! - Happy path: typed listing with a query filter → success envelope
//! - Upstream failure: 404 with a `detail` body → failure envelope
//! - Action endpoints: connector sync sends an empty JSON object
//! - Credential lifecycle: store → test → rotate → delete
//! - Auth attachment through a domain client
//! - Partial completion of parallel calls
//!
//! **Infrastructure:**
//! - WireMock HTTP server (simulates the Brain gateway)
//! - Real GatewayClient with default configuration

use std::sync::Arc;

use braingate_domain::config::GatewayConfig;
use braingate_domain::types::billing::InvoiceFilter;
use braingate_domain::types::byok::NewCredential;
use braingate_domain::types::crm::ContactFilter;
use braingate_gateway::{
    BillingClient, ByokClient, ConnectorsClient, CrmClient, GatewayClient, StaticToken,
};
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> GatewayClient {
    let config = GatewayConfig { base_url: server.uri(), ..GatewayConfig::default() };
    GatewayClient::new(config).expect("gateway client")
}

fn contact_json(id: Uuid, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "first_name": "Jane",
        "last_name": null,
        "phone": null,
        "status": "active",
        "tags": ["newsletter"],
        "created_at": "2026-02-01T09:30:00Z",
        "updated_at": null
    })
}

#[tokio::test]
async fn crm_search_filter_reaches_the_wire_and_decodes() {
    let server = MockServer::start().await;
    let id = Uuid::from_u128(0x42);
    Mock::given(method("GET"))
        .and(path("/api/brain/crm/contacts"))
        .and(query_param("search", "jane"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([contact_json(id, "jane@x.com")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let crm = CrmClient::new(gateway_for(&server));
    let filter = ContactFilter { search: Some("jane".to_string()), ..ContactFilter::default() };
    let resp = crm.list_contacts(&filter).await;

    assert!(resp.is_success());
    assert_eq!(resp.status, 200);
    let contacts = resp.data.expect("contacts");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "jane@x.com");
    assert_eq!(contacts[0].id, id);
}

#[tokio::test]
async fn absent_filter_fields_do_not_reach_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brain/crm/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let crm = CrmClient::new(gateway_for(&server));
    let resp = crm.list_contacts(&ContactFilter::default()).await;
    assert!(resp.is_success());

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn billing_404_detail_becomes_the_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brain/billing/invoices"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "not found"})),
        )
        .mount(&server)
        .await;

    let billing = BillingClient::new(gateway_for(&server));
    let resp = billing.list_invoices(&InvoiceFilter::default()).await;

    assert!(!resp.is_success());
    assert_eq!(resp.status, 404);
    assert_eq!(resp.error.as_deref(), Some("not found"));
    assert!(resp.data.is_none());
}

#[tokio::test]
async fn connector_sync_posts_an_empty_object_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/connectors/stripe/sync"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "id": Uuid::from_u128(0x77),
            "connector": "stripe",
            "state": "queued",
            "started_at": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connectors = ConnectorsClient::new(gateway_for(&server));
    let resp = connectors.sync("stripe").await;

    assert!(resp.is_success());
    assert_eq!(resp.status, 202);
    assert_eq!(resp.data.expect("job").state, "queued");
}

#[tokio::test]
async fn credential_lifecycle_round_trips() {
    let server = MockServer::start().await;
    let id = Uuid::from_u128(0xbeef);
    let stored = serde_json::json!({
        "id": id,
        "provider": "openai",
        "label": "prod key",
        "masked_hint": "...k3Jq",
        "status": "active",
        "last_tested_at": null,
        "created_at": "2026-03-10T08:00:00Z",
        "rotated_at": null
    });

    Mock::given(method("POST"))
        .and(path("/api/brain/byok/credentials"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&stored))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/api/brain/byok/credentials/{id}/test")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "credential_id": id,
            "ok": true,
            "message": null,
            "tested_at": "2026-03-10T08:01:00Z"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/brain/byok/credentials/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let byok = ByokClient::new(gateway_for(&server));

    let created = byok
        .store_credential(&NewCredential {
            provider: "openai".to_string(),
            label: "prod key".to_string(),
            secret: "sk-something".to_string(),
        })
        .await;
    assert_eq!(created.status, 201);

    let tested = byok.test_credential(id).await;
    assert!(tested.data.expect("test result").ok);

    let deleted = byok.delete_credential(id).await;
    assert!(deleted.is_success());
    assert_eq!(deleted.status, 204);
}

#[tokio::test]
async fn domain_clients_carry_the_gateway_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer portal-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = GatewayConfig { base_url: server.uri(), ..GatewayConfig::default() };
    let gateway = GatewayClient::builder()
        .config(config)
        .token_source(Arc::new(StaticToken::new("portal-session")))
        .build()
        .expect("gateway client");

    let crm = CrmClient::new(gateway);
    let resp = crm.list_contacts(&ContactFilter::default()).await;
    assert!(resp.is_success());
}

#[tokio::test]
async fn parallel_calls_complete_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brain/billing/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/brain/billing/subscription"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(serde_json::json!({"error": "maintenance"})),
        )
        .mount(&server)
        .await;

    let billing = BillingClient::new(gateway_for(&server));
    let (plans, subscription) =
        tokio::join!(billing.list_plans(), billing.get_subscription());

    // One succeeded, one failed; each envelope stands on its own.
    assert!(plans.is_success());
    assert!(!subscription.is_success());
    assert_eq!(subscription.status, 503);
    assert_eq!(subscription.error.as_deref(), Some("maintenance"));
}
