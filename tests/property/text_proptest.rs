//! Property-based tests for the /text endpoint
//!
//! Each case builds a fresh router and drives it on a dedicated runtime.

use axum::http::StatusCode;
use proptest::prelude::*;

use localfetch::shared::{RelayEvent, TextOrigin};

use crate::common::TestApp;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_post_then_get_returns_same_text(text in "\\PC{0,512}") {
        let rt = runtime();
        let (status, body, content_length) = rt.block_on(async {
            let app = TestApp::new("seed");
            let posted = app.post_text(text.clone()).await;
            assert_eq!(posted.status, StatusCode::OK);
            let fetched = app.get_text().await;
            let length = fetched.header("content-length").map(str::to_string);
            (fetched.status, fetched.body, length)
        });

        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(String::from_utf8(body).unwrap(), text.clone());
        prop_assert_eq!(content_length, Some(text.len().to_string()));
    }

    #[test]
    fn test_invalid_utf8_never_stored(
        prefix in "[a-z]{0,16}",
        tail in prop::collection::vec(0x80u8..=0xbf, 1..4),
    ) {
        // A lone continuation byte run is never valid UTF-8
        let mut body = prefix.into_bytes();
        body.extend(tail);

        let rt = runtime();
        let (status, stored, changed) = rt.block_on(async {
            let mut app = TestApp::new("kept");
            let response = app.post_text(body).await;
            let changed = app
                .drain_events()
                .iter()
                .any(|event| matches!(event, RelayEvent::TextChanged { .. }));
            (response.status, app.store.get(), changed)
        });

        prop_assert_eq!(status, StatusCode::BAD_REQUEST);
        prop_assert_eq!(stored, "kept");
        prop_assert!(!changed);
    }

    #[test]
    fn test_local_updates_are_tagged_local(text in "\\PC{0,64}") {
        let mut app = TestApp::new("");
        app.store.set(text.clone(), TextOrigin::Local);
        prop_assert_eq!(
            app.drain_events(),
            vec![RelayEvent::text_changed(text, TextOrigin::Local)]
        );
    }
}
