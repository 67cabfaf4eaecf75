//! Greeting API entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_backend::api::{ApiDoc, CorsPolicy};
use hello_backend::config::{Config, LogFormat};
use hello_backend::{metrics, server};

/// Minimal greeting API.
#[derive(Parser, Debug)]
#[command(name = "hello-backend")]
#[command(about = "Serve a static JSON greeting with a development CORS policy")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Interface to bind (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the greeting API (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.verbose |= args.verbose;

    init_logging(&config);
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve) | None => cmd_serve(&config).await,
    }
}

fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("hello_backend=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let (text, json) = match config.log_format {
        LogFormat::Text => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HELLO BACKEND - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    let policy = match config.validate().and_then(|_| config.cors_policy()) {
        Ok(policy) => {
            println!("OK");
            policy
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_addr());
    match &policy {
        CorsPolicy::Permissive => println!("  CORS: any origin (development only)"),
        CorsPolicy::AllowList(origins) => {
            println!("  CORS: {} allowed origin(s)", origins.len());
            for origin in origins {
                println!("    - {}", origin.to_str().unwrap_or("<non-ascii>"));
            }
        }
    }
    println!("  Log Level: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", ApiDoc::to_json()?);
    Ok(())
}

/// Serve until a shutdown signal arrives.
async fn cmd_serve(config: &Config) -> anyhow::Result<()> {
    info!("Starting hello-backend v{}", env!("CARGO_PKG_VERSION"));

    server::run(config).await.map_err(|e| {
        error!("Server failed: {}", e);
        anyhow::Error::from(e)
    })
}
