//! egui Native Desktop App Module
//!
//! This module provides the LocalFetch control panel using egui/eframe.
//! The panel owns the server: it starts and stops it, edits the shared text
//! locally and shows everything the server reports through the relay queue.
//!
//! # Architecture
//!
//! - **`state`** - `AppState`: server controller, relay consumer, UI fields
//! - **`views`** - controls, addresses, QR code, shared text, log, dialogs
//! - **`theme`** - Light / Dark / Brown palettes and egui styling
//! - **`config`** - persisted theme preference
//! - **`server_log`** - bounded `[HH:MM:SS] message` log
//! - **`qr`** - QR module grid for the server address
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Theme preference file
//! ├── server_log.rs   - Log pane model
//! ├── qr.rs           - QR encoding
//! ├── state/          - Application state
//! ├── theme/          - Palettes and styles
//! └── views/          - Rendering
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the control panel:
//! // cargo run --bin localfetch_gui
//! ```

pub mod config;
pub mod qr;
pub mod server_log;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::ThemePreference;
pub use qr::{QrError, QrMatrix};
pub use server_log::{LogEntry, LogLevel, ServerLog};
pub use state::AppState;
pub use theme::ThemeName;

/// Interval at which a frame is scheduled even without input, so relay
/// events are never left waiting longer than this
pub const RELAY_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);
