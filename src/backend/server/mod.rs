//! Server Module
//!
//! This module contains the server-side code for building, starting and
//! stopping the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - configuration loading and server timing constants
//! - **`init`** - router creation and the serve loop
//! - **`lifecycle`** - `ServerController`, the start/stop state machine
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading, shutdown grace period
//! ├── init.rs         - create_app and serve
//! └── lifecycle.rs    - ServerController
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use localfetch::backend::server::ServerController;
//! use localfetch::backend::text::SharedTextStore;
//! use localfetch::shared::{event_relay, AppConfig};
//!
//! # async fn example() {
//! let (relay, mut events) = event_relay();
//! let config = AppConfig::default();
//! let store = SharedTextStore::new(config.initial_text.clone(), relay.clone());
//! let mut controller = ServerController::new(config, store, relay);
//! controller.start().await.expect("port 8000 is free");
//! // ...
//! controller.stop().await;
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Start/stop state machine
pub mod lifecycle;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
pub use lifecycle::ServerController;
pub use config::{load_config, SHUTDOWN_GRACE};
