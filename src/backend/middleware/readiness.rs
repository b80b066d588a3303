/**
 * Readiness Middleware
 *
 * Rejects requests that arrive while the server is not attached to its
 * state, i.e. between binding and going live, or after shutdown started.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Return 503 unless the lifecycle controller has marked the state ready
pub async fn require_ready(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !app_state.is_ready() {
        tracing::warn!(
            "[Server] {} {} arrived while not ready",
            request.method(),
            request.uri().path()
        );
        return BackendError::Uninitialized.into_response();
    }
    next.run(request).await
}
