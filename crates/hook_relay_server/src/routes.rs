//! HTTP routing configuration.
//!
//! One route is registered per compiled endpoint at `/hook/{digest}`, where
//! the digest is the endpoint's routing digest — an exact, case-sensitive
//! hex path segment. Possession of the digest is the authentication;
//! requests to any other path fall through to axum's 404 and reach no
//! handler. Methods are not constrained here because the accepted method
//! and body format belong to each source.

use std::time::Duration;

use axum::extract::Request;
use axum::routing::{any, get};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use hook_relay_core::CompiledEndpoint;

use crate::handlers;

/// How long a whole inbound exchange may take, comfortably above the
/// 10 second upstream notification bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the gateway router for a set of compiled endpoints.
///
/// Routes:
/// - `ANY /hook/{digest}` — webhook dispatch, one per endpoint
/// - `GET /health` — health check
pub fn create_router(endpoints: Vec<CompiledEndpoint>) -> Router {
    let mut router = Router::new().route("/health", get(handlers::health_check));

    for endpoint in endpoints {
        let path = format!("/hook/{}", endpoint.digest());
        let dispatcher = endpoint.dispatcher();
        info!(path = %path, "registered webhook endpoint");
        router = router.route(
            &path,
            any(move |request: Request| {
                let dispatcher = dispatcher.clone();
                async move { dispatcher.dispatch(request).await }
            }),
        );
    }

    router
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
