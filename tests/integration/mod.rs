//! Integration tests
//!
//! HTTP contract, server lifecycle and relay delivery

#[cfg(feature = "ssr")]
mod lifecycle_test;
#[cfg(feature = "ssr")]
mod relay_test;
