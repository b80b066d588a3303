//! Server lifecycle integration tests
//!
//! These bind real loopback sockets and talk to the server over HTTP.

use std::time::Duration;

use assert_matches::assert_matches;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use localfetch::backend::{BackendError, ServerController, SharedTextStore};
use localfetch::shared::{event_relay, RelayEvent, ServerLifecycleState};

use crate::common::{log_lines, loopback_config, RunningServer};
use crate::{assert_contains, assert_err, assert_ok};

fn statuses(events: &[RelayEvent]) -> Vec<ServerLifecycleState> {
    events
        .iter()
        .filter_map(|event| match event {
            RelayEvent::ServerStatus { state, .. } => Some(state.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let mut server = RunningServer::start("Hello from the LocalFetch server GUI!").await;
    let client = reqwest::Client::new();

    let response = assert_ok!(client.get(server.url("/text")).send().await);
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    assert_eq!(
        assert_ok!(response.text().await),
        "Hello from the LocalFetch server GUI!"
    );

    let response = assert_ok!(client.post(server.url("/text")).body("ping").send().await);
    assert_eq!(response.status(), 200);
    assert_eq!(assert_ok!(response.text().await), "Text received successfully!");

    let response = assert_ok!(client.get(server.url("/text")).send().await);
    assert_eq!(assert_ok!(response.text().await), "ping");

    server.controller.stop().await;

    let logs = log_lines(&server.events.drain());
    assert!(logs.iter().any(|line| line.starts_with("GET /text from 127.0.0.1: Sent")));
}

#[tokio::test]
async fn test_start_and_stop_transitions() {
    let mut server = RunningServer::start("x").await;
    assert!(server.controller.is_running());
    assert_eq!(server.controller.local_addr(), Some(server.addr));

    server.controller.stop().await;
    assert!(!server.controller.is_running());
    assert_eq!(server.controller.state(), &ServerLifecycleState::Stopped);

    let events = server.events.drain();
    assert_eq!(
        statuses(&events),
        vec![
            ServerLifecycleState::Starting,
            ServerLifecycleState::Running,
            ServerLifecycleState::Stopped,
        ]
    );
    let logs = log_lines(&events);
    assert!(logs.iter().any(|line| line.starts_with("Server started. Listening on")));
    assert!(logs.iter().any(|line| line.starts_with("Access via: ")));
    assert!(logs.contains(&"Server stopped.".to_string()));
}

#[tokio::test]
async fn test_stop_when_stopped_is_noop() {
    let (relay, mut events) = event_relay();
    let config = loopback_config(0, "x");
    let store = SharedTextStore::new("x", relay.clone());
    let mut controller = ServerController::new(config, store, relay);

    controller.stop().await;
    controller.stop().await;

    let events = events.drain();
    assert_eq!(
        statuses(&events),
        vec![ServerLifecycleState::Stopped, ServerLifecycleState::Stopped]
    );
    assert_eq!(
        log_lines(&events),
        vec!["Server is not running.".to_string(), "Server is not running.".to_string()]
    );
}

#[tokio::test]
async fn test_port_in_use_fails_then_retry_succeeds() {
    let blocker = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = blocker.local_addr().unwrap().port();

    let (relay, mut events) = event_relay();
    let store = SharedTextStore::new("x", relay.clone());
    let mut controller = ServerController::new(loopback_config(port, "x"), store, relay);

    let result = controller.start().await;
    assert_matches!(result, Err(BackendError::Bind { .. }));
    assert!(controller.state().is_failed());

    let drained = events.drain();
    let logs = log_lines(&drained);
    assert_contains!(logs[0], &format!("Failed to start server on port {}", port));
    assert_matches!(
        statuses(&drained).as_slice(),
        [ServerLifecycleState::Starting, ServerLifecycleState::Failed(_)]
    );

    drop(blocker);
    let addr = assert_ok!(controller.start().await);
    assert_eq!(addr.port(), port);
    assert!(controller.is_running());
    controller.stop().await;
}

#[tokio::test]
async fn test_restart_on_same_port() {
    let mut server = RunningServer::start("x").await;
    let port = server.addr.port();
    server.controller.stop().await;

    let addr = assert_ok!(server.controller.start().await);
    assert_eq!(addr.port(), port);

    let response = assert_ok!(reqwest::get(format!("http://{}/text", addr)).await);
    assert_eq!(response.status(), 200);
    server.controller.stop().await;
}

#[tokio::test]
async fn test_connection_refused_after_stop() {
    let mut server = RunningServer::start("x").await;
    let url = server.url("/text");
    server.controller.stop().await;

    assert_err!(reqwest::get(url).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_in_flight_request_completes_during_stop() {
    let server = RunningServer::start("before").await;
    let addr = server.addr;
    let store = server.controller.store().clone();

    let mut stream = assert_ok!(TcpStream::connect(addr).await);
    stream
        .write_all(b"POST /text HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\n")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let RunningServer { mut controller, .. } = server;
    let stopping = tokio::spawn(async move {
        controller.stop().await;
        controller
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    stream.write_all(b"after").await.unwrap();
    let mut raw = Vec::new();
    let read = tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut raw)).await;
    assert_ok!(assert_ok!(read));

    let response = String::from_utf8_lossy(&raw);
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert_eq!(store.get(), "after");

    let controller = assert_ok!(stopping.await);
    assert!(!controller.is_running());
}
