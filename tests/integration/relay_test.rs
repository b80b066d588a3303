//! Relay delivery tests
//!
//! Requests on server worker threads must reach the consumer in order and
//! without loss.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};

use localfetch::backend::SharedTextStore;
use localfetch::shared::{event_relay_with_waker, RelayEvent, TextOrigin};

use crate::common::{send, TestApp};

#[tokio::test]
async fn test_events_follow_request_order() {
    let mut app = TestApp::new("");

    for text in ["one", "two", "three"] {
        assert_eq!(app.post_text(text).await.status, StatusCode::OK);
    }

    let changes: Vec<String> = app
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            RelayEvent::TextChanged { text, origin } => {
                assert_eq!(origin, TextOrigin::Network);
                Some(text)
            }
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec!["one", "two", "three"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_no_event_lost_under_concurrency() {
    let mut app = TestApp::new("");
    let mut handles = Vec::new();
    for i in 0..50 {
        let router = app.router.clone();
        handles.push(tokio::spawn(async move {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/text")
                .body(Body::from(format!("value {}", i)))
                .unwrap();
            send(&router, request).await.status
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let changes = app
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, RelayEvent::TextChanged { .. }))
        .count();
    assert_eq!(changes, 50);

    let last = app.get_text().await.text();
    assert!(last.starts_with("value "));
}

#[tokio::test]
async fn test_local_update_wakes_consumer() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&wakes);
    let (relay, mut events) = event_relay_with_waker(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let store = SharedTextStore::new("", relay);

    store.set("typed in the panel", TextOrigin::Local);

    assert_eq!(wakes.load(Ordering::SeqCst), 1);
    assert_eq!(
        events.try_next(),
        Some(RelayEvent::text_changed("typed in the panel", TextOrigin::Local))
    );
}
