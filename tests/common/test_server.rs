//! Server fixtures for integration tests
//!
//! `TestApp` drives the router in-process with `tower::ServiceExt::oneshot`;
//! `RunningServer` binds a real loopback socket through `ServerController`.

use std::net::{Ipv4Addr, SocketAddr};

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use localfetch::backend::{create_app, AppState, ServerController, SharedTextStore};
use localfetch::shared::{event_relay, AppConfig, RelayEvent, RelayReceiver};

/// Status, headers and collected body of one response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Router plus the store and relay consumer behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: SharedTextStore,
    pub events: RelayReceiver,
}

impl TestApp {
    /// Router that is attached and serving
    pub fn new(initial: &str) -> Self {
        let app = Self::not_ready(initial);
        app.state.set_ready(true);
        app
    }

    /// Router whose readiness flag is still down
    pub fn not_ready(initial: &str) -> Self {
        let (relay, events) = event_relay();
        let store = SharedTextStore::new(initial, relay.clone());
        let state = AppState::new(store.clone(), relay);
        let router = create_app(state.clone());
        Self {
            router,
            state,
            store,
            events,
        }
    }

    pub async fn request(&self, method: Method, path: &str, body: impl Into<Body>) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(body.into())
            .unwrap();
        send(&self.router, request).await
    }

    pub async fn get_text(&self) -> TestResponse {
        self.request(Method::GET, "/text", Body::empty()).await
    }

    pub async fn post_text(&self, body: impl Into<Body>) -> TestResponse {
        self.request(Method::POST, "/text", body).await
    }

    pub fn drain_events(&mut self) -> Vec<RelayEvent> {
        self.events.drain()
    }
}

/// Send one request through the router and collect the response
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Server listening on an ephemeral loopback port
pub struct RunningServer {
    pub controller: ServerController,
    pub events: RelayReceiver,
    pub addr: SocketAddr,
}

impl RunningServer {
    pub async fn start(initial: &str) -> Self {
        Self::start_on(0, initial).await
    }

    pub async fn start_on(port: u16, initial: &str) -> Self {
        let (relay, events) = event_relay();
        let config = loopback_config(port, initial);
        let store = SharedTextStore::new(config.initial_text.clone(), relay.clone());
        let mut controller = ServerController::new(config, store, relay);
        let addr = controller.start().await.unwrap();
        Self {
            controller,
            events,
            addr,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub fn loopback_config(port: u16, initial: &str) -> AppConfig {
    AppConfig::builder()
        .host(Ipv4Addr::LOCALHOST.into())
        .port(port)
        .initial_text(initial)
        .build()
        .unwrap()
}

/// Log lines among `events`, in order
pub fn log_lines(events: &[RelayEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            RelayEvent::LogMessage(line) => Some(line.clone()),
            _ => None,
        })
        .collect()
}
