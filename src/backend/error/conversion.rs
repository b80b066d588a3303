/**
 * Error Conversion
 *
 * Converts backend errors into plain-text HTTP responses. The body is the
 * fixed public message for the error's status, and `Content-Length` is set
 * explicitly.
 */

use axum::body::Body;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::backend::error::types::BackendError;

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Build a `text/plain` response whose `Content-Length` matches the body
pub fn text_response(status: StatusCode, body: impl Into<String>) -> Response {
    let body: String = body.into();
    let length = body.len();
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8));
    headers.insert(CONTENT_LENGTH, length.into());
    response
}

/// Build a response with no body and `Content-Length: 0`
pub fn empty_response(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_LENGTH, 0usize.into());
    response
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        text_response(self.status_code(), self.public_body())
    }
}
