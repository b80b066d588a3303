//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and plain-text response builders
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers can return
//! `Result<Response, BackendError>`. Error responses are `text/plain` with a
//! fixed body per status code and an explicit `Content-Length`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
pub use conversion::{empty_response, text_response, TEXT_PLAIN_UTF8};
