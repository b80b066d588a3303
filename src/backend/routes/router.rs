/**
 * Router Configuration
 *
 * This module assembles the shared text routes and the middleware stack
 * into a single Axum router.
 *
 * # Route Table
 *
 * | Method  | Path    | Handler            |
 * |---------|---------|--------------------|
 * | GET     | /text   | `handle_get_text`  |
 * | POST    | /text   | `handle_post_text` |
 * | OPTIONS | any     | `preflight`        |
 * | other   | /text   | `handle_not_found` |
 * | any     | other   | `handle_not_found` |
 *
 * # Layer Order
 *
 * Layers added later wrap earlier ones. Readiness is innermost so that the
 * preflight answers OPTIONS regardless of state, and the CORS header stack
 * is outermost so that it decorates every response.
 */

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;

use crate::backend::middleware::{cors_headers, preflight, require_ready};
use crate::backend::server::state::AppState;
use crate::backend::text::{handle_get_text, handle_not_found, handle_post_text};

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route(
            "/text",
            get(handle_get_text)
                // `get` would otherwise answer HEAD too
                .head(handle_not_found)
                .post(handle_post_text)
                .fallback(handle_not_found),
        )
        .fallback(handle_not_found)
        .layer(from_fn_with_state(app_state.clone(), require_ready))
        .layer(from_fn(preflight))
        .layer(cors_headers())
        .with_state(app_state)
}
