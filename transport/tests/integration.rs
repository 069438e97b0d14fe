//! `UreqTransport` against the live mock console.
//!
//! # Design
//! Starts the mock console on a random port, then sends requests over real
//! HTTP. The facade always builds `https://` URLs, so these tests drive the
//! transport directly with plain-HTTP requests shaped the way the facade
//! shapes them.

use std::net::SocketAddr;
use std::time::Duration;

use mock_console::{Echo, Versions, STATUS_HEADER};
use qradar_rest::{Headers, Proxies, Transport, TransportRequest, Verify};
use qradar_rest_ureq::{TransportError, UreqTransport};

fn start_console() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_console::run(listener).await
        })
        .unwrap();
    });
    addr
}

fn request(url: String) -> TransportRequest {
    TransportRequest {
        url,
        headers: Headers::new(),
        data: None,
        params: Vec::new(),
        json: None,
        verify: Verify::DISABLED,
        timeout: Some(Duration::from_secs(10)),
        proxies: Proxies::default(),
    }
}

#[test]
fn round_trips_against_mock_console() {
    let addr = start_console();
    let transport = UreqTransport::new();

    // Step 1: GET with console headers and query parameters.
    let mut req = request(format!("http://{addr}/api/config/deployment/hosts"));
    req.headers.insert("Version".to_string(), "15.0".to_string());
    req.headers.insert("QRadarCSRF".to_string(), "tok1".to_string());
    req.headers.insert("SEC".to_string(), "tok2".to_string());
    req.params.push(("fields".to_string(), "hostname".to_string()));
    let response = transport.get(req).unwrap();
    assert_eq!(response.status, 200);
    let echo: Echo = serde_json::from_str(&response.body).unwrap();
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.path, "/api/config/deployment/hosts");
    assert_eq!(echo.query["fields"], "hostname");
    assert_eq!(echo.headers["version"], "15.0");
    assert_eq!(echo.headers["qradarcsrf"], "tok1");
    assert_eq!(echo.headers["sec"], "tok2");

    // Step 2: GET carrying a structured body.
    let mut req = request(format!("http://{addr}/api/ariel/searches"));
    req.json = Some(serde_json::json!({"query_expression": "SELECT * FROM events LAST 5 MINUTES"}));
    let echo: Echo = serde_json::from_str(&transport.get(req).unwrap().body).unwrap();
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.headers["content-type"], "application/json");
    let sent: serde_json::Value = serde_json::from_str(&echo.body).unwrap();
    assert_eq!(sent["query_expression"], "SELECT * FROM events LAST 5 MINUTES");

    // Step 3: POST a structured body.
    let mut req = request(format!("http://{addr}/api/reference_data/sets"));
    req.json = Some(serde_json::json!({"name": "blocked_ips", "element_type": "IP"}));
    let echo: Echo = serde_json::from_str(&transport.post(req).unwrap().body).unwrap();
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.headers["content-type"], "application/json");
    let sent: serde_json::Value = serde_json::from_str(&echo.body).unwrap();
    assert_eq!(sent["name"], "blocked_ips");

    // Step 4: PUT a raw body.
    let mut req = request(format!("http://{addr}/api/x"));
    req.data = Some("plain payload".to_string());
    let echo: Echo = serde_json::from_str(&transport.put(req).unwrap().body).unwrap();
    assert_eq!(echo.method, "PUT");
    assert_eq!(echo.body, "plain payload");

    // Step 5: DELETE without a body.
    let req = request(format!("http://{addr}/api/reference_data/sets/blocked_ips"));
    let echo: Echo = serde_json::from_str(&transport.delete(req).unwrap().body).unwrap();
    assert_eq!(echo.method, "DELETE");
    assert!(echo.body.is_empty());
}

#[test]
fn error_status_is_returned_as_response() {
    let addr = start_console();
    let mut req = request(format!("http://{addr}/api/x"));
    req.headers.insert(STATUS_HEADER.to_string(), "422".to_string());

    let response = UreqTransport::new().get(req).unwrap();
    assert_eq!(response.status, 422);
    assert!(response
        .headers
        .iter()
        .any(|(name, value)| name == "content-type" && value == "application/json"));
}

#[test]
fn unreachable_console_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = UreqTransport::new()
        .get(request(format!("http://{addr}/api/x")))
        .unwrap_err();
    assert!(matches!(err, TransportError::Http(_)));
}

#[test]
fn reads_console_versions() {
    let addr = start_console();
    let mut req = request(format!("http://{addr}/api/help/versions"));
    req.headers.insert("Version".to_string(), "15.0".to_string());

    let response = UreqTransport::new().get(req).unwrap();
    assert_eq!(response.status, 200);
    let versions: Versions = serde_json::from_str(&response.body).unwrap();
    assert_eq!(versions.versions, vec!["14.0".to_string(), "15.0".to_string()]);
}
