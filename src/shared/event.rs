/**
 * Relay Event Types
 *
 * This module defines the events that flow from the server side to the
 * presentation layer: log lines, shared text updates and server lifecycle
 * changes.
 */
use std::fmt;

/// Where a shared text update came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOrigin {
    /// Written by a client over HTTP
    Network,
    /// Written from the local control panel
    Local,
}

impl TextOrigin {
    /// Short label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            TextOrigin::Network => "network",
            TextOrigin::Local => "local",
        }
    }
}

impl fmt::Display for TextOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of the HTTP server
///
/// ```text
/// Stopped ──start──▶ Starting ──bind ok──▶ Running ──stop──▶ Stopped
///                       │
///                       └──bind error──▶ Failed(reason) ──start──▶ Starting
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerLifecycleState {
    #[default]
    Stopped,
    Starting,
    Running,
    Failed(String),
}

impl ServerLifecycleState {
    pub fn is_running(&self) -> bool {
        matches!(self, ServerLifecycleState::Running)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ServerLifecycleState::Failed(_))
    }

    /// Human readable label for status lines
    pub fn label(&self) -> &'static str {
        match self {
            ServerLifecycleState::Stopped => "Offline",
            ServerLifecycleState::Starting => "Starting",
            ServerLifecycleState::Running => "Running",
            ServerLifecycleState::Failed(_) => "Failed",
        }
    }
}

impl fmt::Display for ServerLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerLifecycleState::Failed(reason) => write!(f, "Failed: {}", reason),
            other => f.write_str(other.label()),
        }
    }
}

/// Event relayed from the backend to the presentation thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    /// Free-form log line
    LogMessage(String),
    /// The shared text was replaced
    TextChanged { text: String, origin: TextOrigin },
    /// The server moved to a new lifecycle state
    ServerStatus {
        state: ServerLifecycleState,
        detail: String,
    },
}

impl RelayEvent {
    pub fn log(message: impl Into<String>) -> Self {
        RelayEvent::LogMessage(message.into())
    }

    pub fn text_changed(text: impl Into<String>, origin: TextOrigin) -> Self {
        RelayEvent::TextChanged {
            text: text.into(),
            origin,
        }
    }

    pub fn status(state: ServerLifecycleState, detail: impl Into<String>) -> Self {
        RelayEvent::ServerStatus {
            state,
            detail: detail.into(),
        }
    }
}
