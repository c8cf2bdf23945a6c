#![allow(clippy::unwrap_used)]
// Integration tests for `NetworkApi` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use netstage_api::models::WireConnection;
use netstage_api::{BaseHttpClient, Error, NetworkApi};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, NetworkApi) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BaseHttpClient::with_client(reqwest::Client::new(), base_url);
    (server, NetworkApi::new(client))
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, api) = setup().await;

    let body = json!([{
        "iface": "eth0",
        "type": 1,
        "ipConfig": {
            "addresses": ["192.168.1.5/24"],
            "nameservers": ["192.168.1.1"],
            "routes4": [{ "destination": "0.0.0.0/0", "nextHop": "192.168.1.1" }]
        },
        "macAddress": "aa:bb:cc:dd:ee:ff"
    }]);

    Mock::given(method("GET"))
        .and(path("/network/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let devices = api.devices().await.unwrap();

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].iface, "eth0");
    assert_eq!(devices[0].device_type, 1);
    let ip_config = devices[0].ip_config.as_ref().unwrap();
    assert_eq!(ip_config.addresses, vec!["192.168.1.5/24"]);
    // Unknown backend fields survive in the catch-all bag.
    assert_eq!(
        devices[0].extra.get("macAddress").and_then(|v| v.as_str()),
        Some("aa:bb:cc:dd:ee:ff")
    );
}

#[tokio::test]
async fn test_list_connections() {
    let (server, api) = setup().await;

    let body = json!([{
        "id": "Wired 1",
        "iface": "eth0",
        "addresses": ["10.0.0.2/255.255.255.0"],
        "nameservers": ["10.0.0.1"],
        "gateway4": "10.0.0.1"
    }]);

    Mock::given(method("GET"))
        .and(path("/network/connections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let connections = api.connections().await.unwrap();

    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].id, "Wired 1");
    assert_eq!(connections[0].gateway4.as_deref(), Some("10.0.0.1"));
    assert!(connections[0].wireless.is_none());
}

#[tokio::test]
async fn test_add_connection_returns_server_record() {
    let (server, api) = setup().await;

    let request = WireConnection {
        id: "office".into(),
        iface: Some("eth1".into()),
        addresses: vec!["192.168.2.10/24".into()],
        ..WireConnection::default()
    };

    // The server echoes the record back post-normalization.
    let response_body = json!({
        "id": "office",
        "iface": "eth1",
        "addresses": ["192.168.2.10/24"],
        "nameservers": [],
        "status": "down"
    });

    Mock::given(method("POST"))
        .and(path("/network/connections"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .mount(&server)
        .await;

    let created = api.add_connection(&request).await.unwrap();

    assert_eq!(created.id, "office");
    assert_eq!(
        created.extra.get("status").and_then(|v| v.as_str()),
        Some("down")
    );
}

#[tokio::test]
async fn test_update_and_delete_connection_paths() {
    let (server, api) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/network/connections/office"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/network/connections/office"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let conn = WireConnection {
        id: "office".into(),
        ..WireConnection::default()
    };

    api.update_connection("office", &conn).await.unwrap();
    api.delete_connection("office").await.unwrap();
}

#[tokio::test]
async fn test_list_access_points() {
    let (server, api) = setup().await;

    let body = json!([
        { "ssid": "Home", "hw_address": "AA:BB:CC:DD:EE:FF", "strength": 80,
          "flags": 0, "wpa_flags": 0, "rsn_flags": 1 },
        { "ssid": "Home", "hw_address": "11:22:33:44:55:66", "strength": 45,
          "flags": 1, "wpa_flags": 0, "rsn_flags": 0 }
    ]);

    Mock::given(method("GET"))
        .and(path("/network/wifi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let aps = api.access_points().await.unwrap();

    // Duplicate SSIDs are distinct entries; no dedupe at this layer.
    assert_eq!(aps.len(), 2);
    assert_eq!(aps[0].ssid, "Home");
    assert_eq!(aps[1].ssid, "Home");
    assert_eq!(aps[0].rsn_flags, 1);
    assert_eq!(aps[1].flags, 1);
}

#[tokio::test]
async fn test_settings() {
    let (server, api) = setup().await;

    let body = json!({
        "hostname": "installer",
        "networkingEnabled": true,
        "wirelessEnabled": false,
        "connectivity": true
    });

    Mock::given(method("GET"))
        .and(path("/network/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let settings = api.settings().await.unwrap();

    assert_eq!(settings.hostname.as_deref(), Some("installer"));
    assert!(settings.networking_enabled);
    assert!(!settings.wireless_enabled);
    assert!(settings.connectivity);
}

#[tokio::test]
async fn test_apply_sends_empty_array_body() {
    let (server, api) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/network/system/apply"))
        .and(body_json(json!([])))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    api.apply().await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_401_unauthorized() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = api.devices().await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_404_not_found() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/network/connections/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such connection"))
        .mount(&server)
        .await;

    let err = api.delete_connection("ghost").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::Backend { status, ref message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such connection");
        }
        other => panic!("expected Backend 404 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_malformed_body() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/network/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = api.devices().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => assert_eq!(body, "not json"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
