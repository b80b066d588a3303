//! LocalFetch - Main Library
//!
//! LocalFetch shares one piece of text over a local-network HTTP endpoint so
//! other devices can read and overwrite it, with a desktop control panel for
//! manual edits, LAN address discovery, a QR code and theming.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by both the server and the desktop app
//!   - Relay events and the server lifecycle state
//!   - The event relay queue (server thread -> presentation thread)
//!   - Configuration and local address discovery
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server exposing `GET /text` and `POST /text`
//!   - Shared text store, CORS and readiness middleware
//!   - `ServerController` start/stop lifecycle
//!
//! - **`egui_app`** - Native desktop control panel (egui/eframe)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend and the desktop app
//!
//! # Usage
//!
//! ```rust,no_run
//! use localfetch::backend::{ServerController, SharedTextStore};
//! use localfetch::shared::{event_relay, AppConfig};
//!
//! # async fn example() {
//! let (relay, mut events) = event_relay();
//! let config = AppConfig::default();
//! let store = SharedTextStore::new(config.initial_text.clone(), relay.clone());
//! let mut server = ServerController::new(config, store, relay);
//! server.start().await.unwrap();
//! while let Some(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Server**: the shared text lives in `Arc<Mutex<String>>`; handlers
//!   report to the UI only through the unbounded relay queue
//! - **Native**: egui is single-threaded immediate mode GUI; it drains the
//!   relay queue on every frame

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
#[cfg(feature = "ssr")]
pub mod egui_app;
