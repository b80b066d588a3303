/**
 * Backend Error Types
 *
 * This module defines the error kinds of the shared text service. Request
 * errors are converted to HTTP responses; `Bind` is surfaced to whoever
 * started the server.
 *
 * # Error Categories
 *
 * - `Bind` - the listening socket could not be opened (port in use,
 *   privilege denied). Fatal to the lifecycle transition, not the process.
 * - `PayloadTooLarge`, `Decode`, `BodyRead` - client errors, 400
 * - `UnknownRoute` - 404
 * - `Uninitialized` - the request arrived while the server was starting or
 *   shutting down, 503
 */

use std::net::SocketAddr;

use axum::http::{Method, StatusCode};
use thiserror::Error;

pub const BAD_REQUEST_BODY: &str = "Error processing request";
pub const NOT_FOUND_BODY: &str = "Not Found";
pub const UNINITIALIZED_BODY: &str = "Server app not initialized";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Listening socket could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Request body exceeds the size cap
    #[error("Content too large (limit is {limit} bytes)")]
    PayloadTooLarge {
        /// Maximum accepted body size in bytes
        limit: usize,
    },

    /// Request body is not UTF-8
    #[error("Body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Reading the request body failed
    #[error("Failed to read request body: {message}")]
    BodyRead { message: String },

    /// No handler for this method and path
    #[error("No route for {method} {path}")]
    UnknownRoute { method: Method, path: String },

    /// Server state is not attached to the endpoint layer
    #[error("Server app not initialized")]
    Uninitialized,
}

impl BackendError {
    pub fn body_read(message: impl Into<String>) -> Self {
        Self::BodyRead {
            message: message.into(),
        }
    }

    pub fn unknown_route(method: Method, path: impl Into<String>) -> Self {
        Self::UnknownRoute {
            method,
            path: path.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `PayloadTooLarge`, `Decode`, `BodyRead` - 400 Bad Request
    /// - `UnknownRoute` - 404 Not Found
    /// - `Uninitialized` - 503 Service Unavailable
    /// - `Bind` - 500 Internal Server Error (never sent to a client)
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PayloadTooLarge { .. } | Self::Decode(_) | Self::BodyRead { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownRoute { .. } => StatusCode::NOT_FOUND,
            Self::Uninitialized => StatusCode::SERVICE_UNAVAILABLE,
            Self::Bind { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed body sent to the client. Details stay in the server log.
    pub fn public_body(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => BAD_REQUEST_BODY,
            StatusCode::NOT_FOUND => NOT_FOUND_BODY,
            StatusCode::SERVICE_UNAVAILABLE => UNINITIALIZED_BODY,
            _ => INTERNAL_ERROR_BODY,
        }
    }
}
