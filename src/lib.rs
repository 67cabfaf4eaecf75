//! Minimal greeting API.
//!
//! Serves a single route, `GET /api/hello`, which always answers
//! `{"message": "Hello from Python!"}`. Every response carries open CORS
//! headers so a local frontend on another port can call it during
//! development.
//!
//! # Modules
//!
//! - [`api`]: Handler, router, CORS policy and OpenAPI description
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Counters behind the `metrics` facade
//! - [`server`]: Bind and serve with graceful shutdown
//! - [`utils`]: Signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
