use tokio::runtime::Runtime;

use crate::backend::{ServerController, SharedTextStore};
use crate::egui_app::config::ThemePreference;
use crate::egui_app::qr::QrMatrix;
use crate::egui_app::server_log::ServerLog;
use crate::egui_app::theme::ThemeName;
use crate::shared::{
    discover_local_addresses, server_url, AppConfig, LocalAddresses, RelayEvent, RelayReceiver,
    RelaySender, ServerLifecycleState, TextOrigin,
};

/// Characters of the new text quoted in the "updated shared text" log line
const LOG_PREVIEW_CHARS: usize = 80;

/// Central application state shared across egui views.
///
/// Owns the tokio runtime the server runs on. The GUI thread blocks on it
/// only for start and stop; request handling happens on its worker threads
/// and reaches this struct exclusively through the relay queue.
pub struct AppState {
    controller: ServerController,
    store: SharedTextStore,
    events: RelayReceiver,
    theme_store: ThemePreference,

    pub log: ServerLog,
    pub addresses: LocalAddresses,
    pub qr: Option<QrMatrix>,
    pub shared_text_display: String,
    pub text_input: String,
    pub status: ServerLifecycleState,
    pub status_detail: String,
    pub theme: ThemeName,

    /// Message of the open "Server Error" dialog
    pub error_dialog: Option<String>,
    /// Quit confirmation is showing
    pub confirm_quit: bool,
    /// Next close request may proceed
    pub allow_close: bool,

    // Declared last so the controller is dropped before its runtime
    runtime: Runtime,
}

impl AppState {
    /// `relay` must be the sending half of `events`.
    pub fn new(
        runtime: Runtime,
        config: AppConfig,
        relay: RelaySender,
        events: RelayReceiver,
        theme_store: ThemePreference,
    ) -> Self {
        let store = SharedTextStore::new(config.initial_text.clone(), relay.clone());
        let shared_text_display = store.get();
        let controller = ServerController::new(config, store.clone(), relay);
        let theme = theme_store.load();

        let mut log = ServerLog::default();
        log.info("Application started.");

        Self {
            runtime,
            controller,
            store,
            events,
            theme_store,
            log,
            addresses: discover_local_addresses(),
            qr: None,
            shared_text_display,
            text_input: String::new(),
            status: ServerLifecycleState::Stopped,
            status_detail: "Initializing Server...".to_string(),
            theme,
            error_dialog: None,
            confirm_quit: false,
            allow_close: false,
        }
    }

    pub fn port(&self) -> u16 {
        self.controller.port()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// `ip:port` of the preferred address
    pub fn access_address(&self) -> String {
        server_url(self.addresses.preferred, self.port())
    }

    pub fn start_server(&mut self) {
        self.error_dialog = None;
        if self.runtime.block_on(self.controller.start()).is_err() {
            let reason = match self.controller.state() {
                ServerLifecycleState::Failed(reason) => reason.clone(),
                other => other.to_string(),
            };
            self.error_dialog = Some(format!(
                "Failed to start server on port {}: {}\n(Port might be in use or IP binding issue)",
                self.port(),
                reason
            ));
        }
        self.process_events();
    }

    pub fn stop_server(&mut self) {
        self.runtime.block_on(self.controller.stop());
        self.process_events();
    }

    /// Apply every queued relay event in FIFO order
    pub fn process_events(&mut self) {
        for event in self.events.drain() {
            match event {
                RelayEvent::LogMessage(message) => self.log.info(message),
                RelayEvent::TextChanged { text, origin } => {
                    let source = match origin {
                        TextOrigin::Network => "Client",
                        TextOrigin::Local => "GUI Admin",
                    };
                    self.log.info(format!(
                        "{} updated shared text: '{}'",
                        source,
                        preview(&text)
                    ));
                    self.shared_text_display = text;
                }
                RelayEvent::ServerStatus { state, detail } => {
                    if state.is_failed() {
                        self.log.error(detail.clone());
                    }
                    self.status = state;
                    self.status_detail = detail;
                    self.refresh_addresses();
                }
            }
        }
    }

    pub fn update_text_from_gui(&mut self) {
        let text = std::mem::take(&mut self.text_input);
        self.store.set(text, TextOrigin::Local);
        self.process_events();
    }

    /// Re-detect local addresses and regenerate the QR code
    pub fn refresh_addresses(&mut self) {
        self.addresses = discover_local_addresses();
        self.qr = None;
        if !self.is_running() {
            return;
        }
        let address = self.access_address();
        match QrMatrix::encode(&address) {
            Ok(qr) => self.qr = Some(qr),
            Err(e) => self.log.error(format!("Error generating QR code: {}", e)),
        }
    }

    /// Address to put on the clipboard, if the server is running
    pub fn copy_address(&mut self) -> Option<String> {
        if !self.is_running() {
            self.log.info("Cannot copy address: Server is not running.");
            return None;
        }
        let address = self.access_address();
        self.log.info(format!("Copied '{}' to clipboard.", address));
        Some(address)
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        if let Err(e) = self.theme_store.save(theme) {
            self.log.warn(format!("Could not save theme preference: {}", e));
        }
    }

    /// Handle a window close request. Returns `true` if the window may close.
    pub fn on_close_requested(&mut self) -> bool {
        if self.allow_close {
            return true;
        }
        if self.is_running() {
            self.confirm_quit = true;
            return false;
        }
        self.stop_server();
        true
    }

    /// User confirmed quitting while the server runs
    pub fn quit_confirmed(&mut self) {
        self.confirm_quit = false;
        self.stop_server();
        self.allow_close = true;
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LOG_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
