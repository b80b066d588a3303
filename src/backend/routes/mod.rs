//! Route Configuration Module
//!
//! This module configures the HTTP routes of the shared text server.
//!
//! - **`router`** - route table and middleware assembly
//!
//! # Example
//!
//! ```rust
//! use localfetch::backend::routes::create_router;
//! use localfetch::backend::server::state::AppState;
//! use localfetch::backend::text::SharedTextStore;
//! use localfetch::shared::event_relay;
//!
//! let (relay, _events) = event_relay();
//! let store = SharedTextStore::new("hello", relay.clone());
//! let router = create_router(AppState::new(store, relay));
//! ```

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
