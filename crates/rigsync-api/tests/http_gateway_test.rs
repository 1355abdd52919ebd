#![allow(clippy::unwrap_used)]
// Integration tests for `HttpGateway` + `DeviceClient` using wiremock.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rigsync_api::types::{AccessibleFolder, TriggerActionSet, WifiWorkingMode};
use rigsync_api::{DeviceClient, Error, HttpGateway, Method, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const TIMEOUT: Duration = Duration::from_secs(5);

async fn setup() -> (MockServer, DeviceClient) {
    let server = MockServer::start().await;
    let gateway = HttpGateway::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
    );
    (server, DeviceClient::new(Arc::new(gateway)))
}

fn rpc(name: &str) -> String {
    format!("/rpc/{name}")
}

// ── Results ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_stored_wifi_settings_preserves_order() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rpc("ListStoredWifiSettings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["office", "home"])))
        .mount(&server)
        .await;

    let names = client.list_stored_wifi_settings(TIMEOUT).await.unwrap();
    assert_eq!(names, vec!["office".to_string(), "home".to_string()]);
}

#[tokio::test]
async fn test_get_wifi_state() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rpc("GetWifiState")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "working_mode": "station",
            "channel": 6,
            "ssid": "lab",
            "current_settings": { "name": "lab", "channel": 6 }
        })))
        .mount(&server)
        .await;

    let state = client.get_wifi_state(TIMEOUT).await.unwrap();
    assert_eq!(state.working_mode, WifiWorkingMode::Station);
    assert_eq!(state.current_settings.name, "lab");
}

#[tokio::test]
async fn test_empty_body_decodes_as_unit() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rpc("StoreTriggerActionSet")))
        .and(body_json(json!({ "name": "boot", "trigger_actions": [] })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let set = TriggerActionSet {
        name: "boot".into(),
        trigger_actions: Vec::new(),
    };
    client.store_trigger_action_set(&set, TIMEOUT).await.unwrap();
}

// ── Arguments ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_download_file_sends_folder_and_name() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rpc("DownloadFile")))
        .and(body_json(json!({ "folder": "hid_scripts", "filename": "hello.js" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("type('hi')")))
        .mount(&server)
        .await;

    let content = client
        .download_file(AccessibleFolder::HidScripts, "hello.js", TIMEOUT)
        .await
        .unwrap();
    assert_eq!(content, "type('hi')");
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let server = MockServer::start().await;
    let mut transport = TransportConfig::new(Url::parse(&server.uri()).unwrap());
    transport.token = Some("s3cret".to_string().into());
    let client = DeviceClient::new(Arc::new(HttpGateway::new(&transport).unwrap()));

    Mock::given(method("POST"))
        .and(path(rpc("ListStoredBashScripts")))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["up.sh"])))
        .mount(&server)
        .await;

    let scripts = client.list_stored_bash_scripts(TIMEOUT).await.unwrap();
    assert_eq!(scripts, vec!["up.sh".to_string()]);
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unprocessable_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rpc("SetGadgetSettings")))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "error": "no USB function enabled" })),
        )
        .mount(&server)
        .await;

    let result = client
        .set_gadget_settings(&Default::default(), TIMEOUT)
        .await;

    match result {
        Err(Error::Rejected { method, message }) => {
            assert_eq!(method, Method::SetGadgetSettings);
            assert_eq!(message, "no USB function enabled");
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_remote() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rpc("DeployGadgetSettings")))
        .respond_with(ResponseTemplate::new(500).set_body_string("udc busy"))
        .mount(&server)
        .await;

    let result = client.deploy_gadget_settings(TIMEOUT).await;
    assert!(
        matches!(result, Err(Error::Remote { status: 500, ref message, .. }) if message == "udc busy"),
        "expected Remote error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_slow_device_times_out() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rpc("GetRunningHidJobStates")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let result = client.get_running_hid_jobs(Duration::from_millis(50)).await;
    let err = result.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got: {err:?}");
}
