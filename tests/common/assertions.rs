//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that a result is ok and return the value
///
/// This macro unwraps a Result, providing a better error message
/// if the result is an error.
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a result is an error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        assert!($result.is_err(), "Expected Err, got Ok");
    };
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a response carries the three CORS headers
#[macro_export]
macro_rules! assert_cors_headers {
    ($response:expr) => {
        assert_eq!(
            $response.header("access-control-allow-origin"),
            Some(localfetch::backend::middleware::ALLOW_ORIGIN),
            "missing Access-Control-Allow-Origin"
        );
        assert_eq!(
            $response.header("access-control-allow-methods"),
            Some(localfetch::backend::middleware::ALLOW_METHODS),
            "missing Access-Control-Allow-Methods"
        );
        assert_eq!(
            $response.header("access-control-allow-headers"),
            Some(localfetch::backend::middleware::ALLOW_HEADERS),
            "missing Access-Control-Allow-Headers"
        );
    };
}

/// Assert that `Content-Length` matches the body that was sent
#[macro_export]
macro_rules! assert_content_length {
    ($response:expr) => {
        assert_eq!(
            $response.header("content-length"),
            Some($response.body.len().to_string().as_str()),
            "Content-Length does not match body"
        );
    };
}
