//! Shared Module
//!
//! This module contains types that are used by both the server side and the
//! desktop app. Nothing in here depends on axum or egui.
//!
//! # Overview
//!
//! - **`event`** - Relay events and the server lifecycle state
//! - **`relay`** - FIFO queue carrying relay events to the presentation thread
//! - **`config`** - Layered application configuration
//! - **`network`** - Local network address discovery

/// Relay event types
pub mod event;

/// Event relay queue
pub mod relay;

/// Application configuration
pub mod config;

/// Local address discovery
pub mod network;

/// Re-export commonly used types for convenience
pub use event::{RelayEvent, ServerLifecycleState, TextOrigin};
pub use relay::{event_relay, event_relay_with_waker, RelayReceiver, RelaySender};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, MAX_TEXT_BYTES};
pub use network::{discover_local_addresses, select_preferred, server_url, LocalAddresses};
