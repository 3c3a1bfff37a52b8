//! Browser session tests
//!
//! Two mock servers stand in for the profile service and the launched
//! browser's CDP endpoint.

use serde_json::json;

use crate::api::ProfileServiceClient;
use crate::http::tests::{MockBehavior, MockServer};
use crate::Error;

use super::session::{CloakBrowser, LaunchConfig};

fn browser_for(service: &MockServer, profile_id: Option<&str>) -> CloakBrowser {
    let client = ProfileServiceClient::new(Some(&service.addr));
    CloakBrowser::with_client(
        client,
        LaunchConfig {
            profile_id: profile_id.map(str::to_string),
            ..LaunchConfig::default()
        },
    )
}

#[tokio::test]
async fn test_start_polls_readiness_before_returning() {
    // CDP endpoint answers not-ready once, then ready
    let cdp = MockServer::start(MockBehavior::Respond(vec![
        (503, String::new()),
        (200, "{\"Browser\":\"Chrome/120.0\"}".to_string()),
    ]))
    .await;

    let service = MockServer::start(MockBehavior::Respond(vec![
        (
            200,
            json!({"puppeteerUrl": cdp.addr, "status": "ok"}).to_string(),
        ),
        (
            200,
            json!({"message": "profile stopped", "status": "ok"}).to_string(),
        ),
    ]))
    .await;

    let browser = browser_for(&service, Some("p-1"));
    let mut handle = browser.start().await.unwrap();

    assert_eq!(handle.debugger_url(), cdp.addr);
    assert_eq!(handle.profile_id(), "p-1");
    // Both the not-ready and the ready probe must have happened
    assert_eq!(cdp.hit_count(), 2);

    let raw = service.requests().remove(0);
    assert!(raw.starts_with("POST /automation/launch/puppeteer "));
    let body: serde_json::Value =
        serde_json::from_str(raw.split("\r\n\r\n").nth(1).unwrap()).unwrap();
    assert_eq!(body["profileID"], "p-1");

    handle.close().await.unwrap();
    assert!(handle.is_closed());
    let raw = service.requests().pop().unwrap();
    assert!(raw.starts_with("GET /profile/stop/p-1 "));

    // Closing again is a no-op
    let hits = service.hit_count();
    handle.close().await.unwrap();
    assert_eq!(service.hit_count(), hits);

    cdp.shutdown();
    service.shutdown();
}

#[tokio::test]
async fn test_start_without_connect_url_fails() {
    let service = MockServer::start(MockBehavior::Respond(vec![(
        200,
        json!({"status": "ok"}).to_string(),
    )]))
    .await;

    let browser = browser_for(&service, Some("p-2"));
    let result = browser.start().await;

    assert!(matches!(result, Err(Error::MissingConnectUrl)));
    service.shutdown();
}

#[tokio::test]
async fn test_start_without_profile_id_fails() {
    let service = MockServer::start(MockBehavior::Respond(vec![(200, "{}".to_string())])).await;

    let browser = browser_for(&service, None);
    let result = browser.start().await;

    assert!(matches!(result, Err(Error::Configuration(_))));
    assert_eq!(service.hit_count(), 0);
    service.shutdown();
}

#[tokio::test]
async fn test_quickstart_creates_profile_then_launches() {
    let cdp = MockServer::start(MockBehavior::Respond(vec![(200, String::new())])).await;

    let service = MockServer::start(MockBehavior::Respond(vec![
        (
            200,
            json!({"profile_browser_id": "fresh-id", "status": "ok"}).to_string(),
        ),
        (
            200,
            json!({"puppeteerUrl": cdp.addr, "status": "ok"}).to_string(),
        ),
    ]))
    .await;

    let mut browser = browser_for(&service, None);
    let handle = browser.quickstart(Some("smoke-profile")).await.unwrap();

    assert_eq!(handle.profile_id(), "fresh-id");

    let requests = service.requests();
    assert!(requests[0].starts_with("POST /profile/add "));
    assert!(requests[1].starts_with("POST /automation/launch/puppeteer "));

    // The created profile id must flow into the launch request
    let body: serde_json::Value =
        serde_json::from_str(requests[1].split("\r\n\r\n").nth(1).unwrap()).unwrap();
    assert_eq!(body["profileID"], "fresh-id");

    cdp.shutdown();
    service.shutdown();
}

#[tokio::test]
async fn test_headless_launch_sets_headless_arg() {
    let cdp = MockServer::start(MockBehavior::Respond(vec![(200, String::new())])).await;
    let service = MockServer::start(MockBehavior::Respond(vec![(
        200,
        json!({"puppeteerUrl": cdp.addr, "status": "ok"}).to_string(),
    )]))
    .await;

    let client = ProfileServiceClient::new(Some(&service.addr));
    let browser = CloakBrowser::with_client(
        client,
        LaunchConfig {
            profile_id: Some("p-3".to_string()),
            headless: true,
            ..LaunchConfig::default()
        },
    );
    browser.start().await.unwrap();

    let raw = service.requests().remove(0);
    let body: serde_json::Value =
        serde_json::from_str(raw.split("\r\n\r\n").nth(1).unwrap()).unwrap();
    assert_eq!(body["customArgs"], "--headless=new");

    cdp.shutdown();
    service.shutdown();
}
