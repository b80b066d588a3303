/**
 * CORS Middleware
 *
 * Browser clients on other devices call the API cross-origin, so every
 * response carries the same three CORS headers and any OPTIONS request is
 * answered as a preflight.
 *
 * Preflight detection is deliberately loose: any OPTIONS request on any
 * path gets 200 with an empty body, whether or not the server is ready.
 */

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::Response,
};
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::backend::error::empty_response;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "X-Requested-With, Content-Type";

type SetHeader = SetResponseHeaderLayer<HeaderValue>;

/// Layer stack that stamps the CORS headers on every response
pub type CorsHeadersLayer = ServiceBuilder<Stack<SetHeader, Stack<SetHeader, Stack<SetHeader, Identity>>>>;

pub fn cors_headers() -> CorsHeadersLayer {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}

/// Answer OPTIONS requests before routing
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::debug!("[CORS] Preflight for {}", request.uri().path());
        return empty_response(StatusCode::OK);
    }
    next.run(request).await
}
