/**
 * Shared Text Handlers
 *
 * HTTP handlers for the shared text endpoint:
 * - GET /text  - return the current value as `text/plain; charset=utf-8`
 * - POST /text - replace the value with the UTF-8 request body (max 1 MiB)
 * - fallback   - 404 for any other method or path
 *
 * Every handler reports what it did to the presentation layer through the
 * event relay.
 */

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::BytesMut;
use futures_util::StreamExt;

use crate::backend::error::{text_response, BackendError};
use crate::backend::server::state::AppState;
use crate::shared::{TextOrigin, MAX_TEXT_BYTES};

pub const POST_SUCCESS_BODY: &str = "Text received successfully!";

/// Client IP recorded by `into_make_service_with_connect_info`, if any
fn client_label(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Read the request body as UTF-8, refusing anything over `limit` bytes
///
/// A declared `Content-Length` over the limit is rejected before any body
/// bytes are read. Bodies without a declared length are read chunk by chunk
/// and rejected as soon as the running total crosses the limit.
pub async fn read_text_body(request: Request, limit: usize) -> Result<String, BackendError> {
    if let Some(declared) = declared_length(request.headers()) {
        if declared > limit {
            return Err(BackendError::PayloadTooLarge { limit });
        }
    }

    let mut stream = request.into_body().into_data_stream();
    let mut buffer = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| BackendError::body_read(e.to_string()))?;
        if buffer.len() + chunk.len() > limit {
            return Err(BackendError::PayloadTooLarge { limit });
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8(buffer.to_vec())?)
}

/// Handle GET /text
pub async fn handle_get_text(State(state): State<AppState>, request: Request) -> Response {
    let client = client_label(&request);
    let text = state.store.get();
    let length = text.len();

    let response = text_response(StatusCode::OK, text);

    tracing::debug!("[Text] GET /text from {} ({} bytes)", client, length);
    state
        .relay
        .log(format!("GET /text from {}: Sent {} bytes", client, length));
    response
}

/// Handle POST /text
pub async fn handle_post_text(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, BackendError> {
    let client = client_label(&request);

    let text = match read_text_body(request, MAX_TEXT_BYTES).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("[Text] Rejected POST /text from {}: {}", client, e);
            state
                .relay
                .log(format!("Error processing POST from {}: {}", client, e));
            return Err(e);
        }
    };

    tracing::debug!("[Text] POST /text from {} ({} bytes)", client, text.len());
    state.store.set(text, TextOrigin::Network);

    Ok(text_response(StatusCode::OK, POST_SUCCESS_BODY))
}

/// Fallback for unknown paths and unsupported methods
pub async fn handle_not_found(State(state): State<AppState>, request: Request) -> BackendError {
    let client = client_label(&request);
    let error = BackendError::unknown_route(request.method().clone(), request.uri().path());

    tracing::debug!("[Text] {} from {}", error, client);
    state.relay.log(format!(
        "{} {} from {}: Sent 404",
        request.method(),
        request.uri().path(),
        client
    ));
    error
}
