//! Backend Module
//!
//! This module contains all server-side code for LocalFetch: the shared text
//! store, the HTTP endpoint layer and the server lifecycle.
//!
//! This module is only compiled when the `ssr` feature is enabled (it is
//! on by default).
//!
//! # Architecture
//!
//! - **`server`** - application state, router creation, `ServerController`
//! - **`routes`** - route table and middleware assembly
//! - **`text`** - `SharedTextStore` and the /text handlers
//! - **`middleware`** - CORS headers, OPTIONS preflight, readiness guard
//! - **`error`** - backend error types and response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Headless server binary
//! ├── server/         - State, init, lifecycle
//! ├── routes/         - Router
//! ├── text/           - Shared text store and handlers
//! ├── middleware/     - CORS and readiness
//! └── error/          - Error types
//! ```
//!
//! # HTTP Contract
//!
//! | Method  | Path  | Success                                 | Failure             |
//! |---------|-------|-----------------------------------------|---------------------|
//! | OPTIONS | any   | 200, empty body                         | -                   |
//! | GET     | /text | 200, `text/plain; charset=utf-8`        | 404 unknown path    |
//! | POST    | /text | 200, `Text received successfully!`      | 400 too large / bad |
//! | any     | any   | -                                       | 503 not initialized |
//!
//! Every response carries the three CORS headers and an explicit
//! `Content-Length`.
//!
//! # Thread Safety
//!
//! The shared text is the only mutable state touched by request handlers,
//! behind `Arc<Mutex<String>>`. Handlers talk to the presentation layer
//! only through the event relay.

/// Server setup and lifecycle
pub mod server;

/// Route configuration
pub mod routes;

/// Shared text store and handlers
pub mod text;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState, ServerController};
pub use text::SharedTextStore;
pub use error::BackendError;
