//! HTTP API route definitions.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::hello;

/// Cross-origin policy applied to every response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, any method, any header. Development only.
    #[default]
    Permissive,
    /// Only the listed origins are echoed back; methods and headers stay open.
    AllowList(Vec<HeaderValue>),
}

/// Build the CORS middleware for a policy.
pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let origin = match policy {
        CorsPolicy::Permissive => AllowOrigin::any(),
        CorsPolicy::AllowList(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the API router.
///
/// Layers wrap the fallback too, so 404 and 405 responses carry CORS headers.
pub fn create_router(policy: &CorsPolicy) -> Router {
    Router::new()
        .route("/api/hello", get(hello))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(policy))
}
