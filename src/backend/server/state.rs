/**
 * Application State Management
 *
 * This module defines the application state handed to the Axum router and
 * implements the `FromRef` traits for state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the only way handlers reach the shared text and
 * the event relay. It is built by whoever starts the server and passed to
 * the router explicitly; there is no process-wide global.
 *
 * # Thread Safety
 *
 * - `SharedTextStore` wraps `Arc<Mutex<String>>`
 * - `RelaySender` wraps an unbounded mpsc sender
 * - `ready` is an `Arc<AtomicBool>` flipped by the lifecycle controller
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::text::state::SharedTextStore;
use crate::shared::RelaySender;

/// Application state shared by every request handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// The shared text value
    pub store: SharedTextStore,

    /// Queue towards the presentation layer
    pub relay: RelaySender,

    /// Whether the server is attached and serving.
    ///
    /// False while starting up or shutting down; requests then get 503.
    pub ready: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(store: SharedTextStore, relay: RelaySender) -> Self {
        Self {
            store,
            relay,
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Release);
    }
}

/// Implement FromRef for SharedTextStore
///
/// Allows handlers to take `State(store): State<SharedTextStore>`.
impl FromRef<AppState> for SharedTextStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for RelaySender
impl FromRef<AppState> for RelaySender {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.relay.clone()
    }
}
