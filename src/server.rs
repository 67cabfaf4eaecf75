//! Server lifecycle: bind, serve, shut down.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::{create_router, CorsPolicy};
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::utils::shutdown_signal;

/// Bind the configured `host:port`.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_addr();
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the greeting API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, policy: &CorsPolicy, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(policy);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    info!("HTTP server stopped");
    Ok(())
}

/// Validate the configuration, bind, and serve until SIGINT/SIGTERM.
pub async fn run(config: &Config) -> Result<()> {
    config.validate().map_err(ServerError::InvalidConfig)?;
    let policy = config.cors_policy().map_err(ServerError::InvalidConfig)?;

    match &policy {
        CorsPolicy::Permissive => {
            info!("CORS: any origin, any method, any header (development policy)")
        }
        CorsPolicy::AllowList(origins) => info!("CORS: {} allowed origin(s)", origins.len()),
    }

    let listener = bind(config).await.map_err(|e| {
        error!("{}", e);
        e
    })?;
    info!("HTTP server listening on {}", listener.local_addr().map_err(ServerError::Serve)?);

    serve(listener, &policy, shutdown_signal()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_reports_address_in_use() {
        let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = first.local_addr().unwrap().port();

        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            ..Config::default()
        };

        match bind(&config).await {
            Err(ServerError::Bind { addr, .. }) => assert_eq!(addr, format!("127.0.0.1:{port}")),
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_rejects_invalid_cors_config() {
        let config = Config {
            cors_allowed_origins: "*,http://localhost:3000".to_string(),
            ..Config::default()
        };

        assert!(matches!(run(&config).await, Err(ServerError::InvalidConfig(_))));
    }
}
