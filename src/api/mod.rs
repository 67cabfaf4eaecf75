//! HTTP API module: the greeting route, its CORS policy, and its OpenAPI description.

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::{hello, HelloResponse, GREETING};
pub use openapi::ApiDoc;
pub use routes::{cors_layer, create_router, CorsPolicy};
