/**
 * Server Initialization
 *
 * This module builds the Axum application from its explicit dependencies
 * and runs it on a bound listener until told to stop.
 *
 * # Initialization Process
 *
 * 1. The caller owns the `SharedTextStore` and the relay sender
 * 2. `create_app` wraps them in `AppState` and builds the router
 * 3. `serve` runs the router with client address info and graceful shutdown
 */

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// The returned router does not answer requests with anything but 503
/// until `app_state.set_ready(true)` is called.
pub fn create_app(app_state: AppState) -> Router<()> {
    tracing::info!("Initializing LocalFetch router");
    create_router(app_state)
}

/// Serve `app` on `listener` until `shutdown` resolves
///
/// On shutdown the listener stops accepting and the future completes once
/// every accepted connection has finished its in-flight request.
pub async fn serve(
    listener: TcpListener,
    app: Router<()>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}
