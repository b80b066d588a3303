/**
 * Server Lifecycle
 *
 * `ServerController` owns the running server, if any, and drives the
 * `ServerLifecycleState` machine. Every transition is reported on the event
 * relay as a `ServerStatus` event, together with log lines for the
 * presentation layer.
 *
 * # Failure Semantics
 *
 * A bind failure moves the controller to `Failed(reason)` and is returned
 * to the caller, but nothing else is torn down: the store and relay stay
 * usable and `start` can be called again.
 *
 * # Shutdown
 *
 * `stop` stops accepting, lets in-flight requests finish for up to
 * `SHUTDOWN_GRACE`, then aborts the serve task, which closes the listener.
 * Stopping a controller that is not running only reports the state.
 */

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::backend::error::BackendError;
use crate::backend::server::config::SHUTDOWN_GRACE;
use crate::backend::server::init::{create_app, serve};
use crate::backend::server::state::AppState;
use crate::backend::text::SharedTextStore;
use crate::shared::{
    discover_local_addresses, server_url, AppConfig, RelaySender, ServerLifecycleState,
};

struct RunningServer {
    local_addr: SocketAddr,
    app_state: AppState,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

/// Starts and stops the HTTP server
pub struct ServerController {
    config: AppConfig,
    store: SharedTextStore,
    relay: RelaySender,
    state: ServerLifecycleState,
    shutdown_grace: Duration,
    running: Option<RunningServer>,
}

impl ServerController {
    pub fn new(config: AppConfig, store: SharedTextStore, relay: RelaySender) -> Self {
        Self {
            config,
            store,
            relay,
            state: ServerLifecycleState::Stopped,
            shutdown_grace: SHUTDOWN_GRACE,
            running: None,
        }
    }

    /// Override how long `stop` waits before aborting the server
    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    pub fn state(&self) -> &ServerLifecycleState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Bound address while running
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|running| running.local_addr)
    }

    /// Bound port while running, configured port otherwise
    pub fn port(&self) -> u16 {
        self.local_addr()
            .map(|addr| addr.port())
            .unwrap_or(self.config.port)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &SharedTextStore {
        &self.store
    }

    fn transition(&mut self, state: ServerLifecycleState, detail: impl Into<String>) {
        let detail = detail.into();
        tracing::info!("[Server] {} -> {} ({})", self.state, state, detail);
        self.state = state.clone();
        self.relay.status(state, detail);
    }

    /// Bind the configured address and start serving
    ///
    /// Returns the bound address. Calling `start` while already running
    /// returns the current address without rebinding.
    pub async fn start(&mut self) -> Result<SocketAddr, BackendError> {
        if let Some(running) = &self.running {
            let local_addr = running.local_addr;
            self.relay
                .log(format!("Server already running on {}", local_addr));
            return Ok(local_addr);
        }

        let addr = self.config.socket_addr();
        self.transition(
            ServerLifecycleState::Starting,
            format!("Starting server on port {}", addr.port()),
        );

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(source) => {
                let reason = source.to_string();
                tracing::error!("[Server] Failed to bind {}: {}", addr, reason);
                self.relay.log(format!(
                    "Failed to start server on port {}: {}",
                    addr.port(),
                    reason
                ));
                self.transition(
                    ServerLifecycleState::Failed(reason),
                    format!("Server Failed on Port {}", addr.port()),
                );
                return Err(BackendError::Bind { addr, source });
            }
        };
        let local_addr = listener.local_addr().unwrap_or(addr);

        let app_state = AppState::new(self.store.clone(), self.relay.clone());
        let app = create_app(app_state.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(serve(listener, app, async move {
            let _ = shutdown_rx.await;
            tracing::info!("[Server] Shutdown signal received");
        }));
        app_state.set_ready(true);

        self.running = Some(RunningServer {
            local_addr,
            app_state,
            shutdown_tx,
            task,
        });

        let addresses = discover_local_addresses();
        let access = server_url(addresses.preferred, local_addr.port());
        self.relay
            .log(format!("Server started. Listening on {}", local_addr));
        self.relay.log(format!("Access via: {}", access));
        if !addresses.is_loopback_only() {
            let all: Vec<String> = addresses.all.iter().map(|ip| ip.to_string()).collect();
            self.relay.log(format!(
                "All detected non-loopback IPs: {}",
                all.join(", ")
            ));
        }

        self.transition(
            ServerLifecycleState::Running,
            format!("Server Running on {}", access),
        );
        Ok(local_addr)
    }

    /// Stop serving. Safe to call in any state.
    pub async fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            self.relay.log("Server is not running.");
            self.transition(ServerLifecycleState::Stopped, "Server Offline");
            return;
        };

        running.app_state.set_ready(false);
        self.relay.log("Attempting to shut down server...");
        let _ = running.shutdown_tx.send(());

        let mut task = running.task;
        match tokio::time::timeout(self.shutdown_grace, &mut task).await {
            Ok(Ok(Ok(()))) => {
                self.relay.log("Server socket closed.");
            }
            Ok(Ok(Err(e))) => {
                tracing::warn!("[Server] Server exited with error: {}", e);
                self.relay.log(format!("Server exited with error: {}", e));
            }
            Ok(Err(e)) => {
                tracing::error!("[Server] Server task failed: {}", e);
                self.relay.log(format!("Server task failed: {}", e));
            }
            Err(_) => {
                task.abort();
                tracing::warn!(
                    "[Server] Graceful shutdown exceeded {:?}, listener closed forcibly",
                    self.shutdown_grace
                );
                self.relay.log(format!(
                    "Warning: Server did not exit within {}s; listener closed forcibly.",
                    self.shutdown_grace.as_secs()
                ));
            }
        }

        self.relay.log("Server stopped.");
        self.transition(ServerLifecycleState::Stopped, "Server Offline");
    }
}

impl Drop for ServerController {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.app_state.set_ready(false);
            let _ = running.shutdown_tx.send(());
        }
    }
}

impl std::fmt::Debug for ServerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerController")
            .field("state", &self.state)
            .field("local_addr", &self.local_addr())
            .finish()
    }
}
