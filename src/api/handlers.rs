//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics;

/// Fixed greeting returned by `GET /api/hello`.
pub const GREETING: &str = "Hello from Python!";

/// Greeting response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    /// Greeting text.
    #[schema(example = "Hello from Python!")]
    pub message: &'static str,
}

/// Greeting handler - always returns 200 with the fixed payload.
///
/// Query string, headers and body are ignored.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "greeting",
    responses(
        (status = 200, description = "Static greeting", body = HelloResponse)
    )
)]
pub async fn hello() -> impl IntoResponse {
    metrics::inc_greetings_served();

    Json(HelloResponse { message: GREETING })
}
