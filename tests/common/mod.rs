//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-process router fixtures driven through `tower::ServiceExt`
//! - Real-socket server fixtures
//! - Custom assertion macros

pub mod assertions;
#[cfg(feature = "ssr")]
pub mod test_server;

// Re-export commonly used utilities
#[cfg(feature = "ssr")]
pub use test_server::*;
