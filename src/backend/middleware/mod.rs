//! Middleware Module
//!
//! This module contains the HTTP middleware wrapped around every route.
//!
//! # Architecture
//!
//! - **`cors`** - CORS headers on every response and the OPTIONS preflight
//! - **`readiness`** - 503 while the server is starting or stopping
//!
//! The router applies them innermost first: readiness, preflight, then the
//! CORS header stack, so OPTIONS is answered even when not ready and the
//! CORS headers land on every response including 503s.

pub mod cors;
pub mod readiness;

pub use cors::{cors_headers, preflight, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
pub use readiness::require_ready;
