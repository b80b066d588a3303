//! Property-based tests

#[cfg(feature = "ssr")]
mod text_proptest;
mod network_proptest;
