//! Integration tests for the outbound relay endpoint.

use network_multitool::config::MultitoolConfig;

mod common;

#[tokio::test]
async fn round_trips_status_content_type_and_body() {
    let upstream =
        common::start_mock_upstream(200, "application/json", br#"{"ok":true}"#).await;
    let (addr, shutdown) = common::start_server(MultitoolConfig::default()).await;

    let response = common::client()
        .get(format!("http://{addr}/req?url=http://{upstream}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap(),
        "application/json"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), br#"{"ok":true}"#);

    shutdown.trigger();
}

#[tokio::test]
async fn propagates_upstream_error_statuses() {
    let upstream = common::start_mock_upstream(404, "text/html", b"gone").await;
    let (addr, shutdown) = common::start_server(MultitoolConfig::default()).await;

    let response = common::client()
        .get(format!("http://{addr}/req?url=http://{upstream}/missing"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"gone");

    shutdown.trigger();
}

#[tokio::test]
async fn defaults_missing_content_type_to_text_plain() {
    let upstream = common::start_mock_upstream(200, "", b"raw bytes").await;
    let (addr, shutdown) = common::start_server(MultitoolConfig::default()).await;

    let response = common::client()
        .get(format!("http://{addr}/req?url=http://{upstream}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap(),
        "text/plain"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn empty_url_parameter_falls_back_to_the_configured_default() {
    let upstream = common::start_mock_upstream(200, "text/plain", b"default target").await;

    let mut config = MultitoolConfig::default();
    config.relay.default_url = format!("http://{upstream}/");
    let (addr, shutdown) = common::start_server(config).await;

    let response = common::client()
        .get(format!("http://{addr}/req?url="))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "default target");

    shutdown.trigger();
}

#[tokio::test]
async fn rejects_unsupported_schemes_with_400() {
    let (addr, shutdown) = common::start_server(MultitoolConfig::default()).await;
    let client = common::client();

    for url in ["ftp://example.com/file", "file:///etc/passwd"] {
        let response = client
            .get(format!("http://{addr}/req?url={url}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "{url} should be rejected");
        let body = response.text().await.unwrap();
        assert!(body.contains("http and https"), "got {body:?}");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn rejects_malformed_urls_with_400() {
    let (addr, shutdown) = common::start_server(MultitoolConfig::default()).await;

    let response = common::client()
        .get(format!("http://{addr}/req?url=not-a-url"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert!(response.text().await.unwrap().contains("Invalid URL"));

    shutdown.trigger();
}

#[tokio::test]
async fn unreachable_upstream_is_a_bad_gateway() {
    // Bind and immediately drop to get a port with nothing listening.
    let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);

    let (addr, shutdown) = common::start_server(MultitoolConfig::default()).await;

    let response = common::client()
        .get(format!("http://{addr}/req?url=http://{dead_addr}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body = response.text().await.unwrap();
    assert!(body.contains("Failed to make request"), "got {body:?}");

    shutdown.trigger();
}
