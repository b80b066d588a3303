//! Shared Text Module
//!
//! This module contains the server-side pieces of the shared text service:
//!
//! - **`state`** - `SharedTextStore`, the mutex-guarded text value
//! - **`handlers`** - GET/POST /text and the 404 fallback
//!
//! # Example
//!
//! ```rust
//! use localfetch::backend::text::SharedTextStore;
//! use localfetch::shared::{event_relay, TextOrigin};
//!
//! let (relay, mut events) = event_relay();
//! let store = SharedTextStore::new("hello", relay);
//! store.set("ping", TextOrigin::Local);
//! assert_eq!(store.get(), "ping");
//! assert_eq!(events.drain().len(), 1);
//! ```

/// Shared text value
pub mod state;

/// HTTP handlers for /text
pub mod handlers;

/// Re-export commonly used types
pub use state::SharedTextStore;
pub use handlers::{handle_get_text, handle_not_found, handle_post_text, POST_SUCCESS_BODY};
