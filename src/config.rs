//! Application configuration loaded from environment variables.

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::api::CorsPolicy;

/// Log output format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma-separated allowed origins, or `*` for any origin (dev only).
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: String,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: default_cors_origins(),
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("HOST must not be empty".to_string());
        }

        self.cors_policy().map(|_| ())
    }

    /// Address string used for binding and log lines.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse `CORS_ALLOWED_ORIGINS` into a policy.
    pub fn cors_policy(&self) -> Result<CorsPolicy, String> {
        let origins: Vec<&str> = self
            .cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if origins.is_empty() || origins == ["*"] {
            return Ok(CorsPolicy::Permissive);
        }

        if origins.contains(&"*") {
            return Err("CORS_ALLOWED_ORIGINS cannot mix * with explicit origins".to_string());
        }

        let mut allowed = Vec::with_capacity(origins.len());
        for origin in origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(format!(
                    "CORS origin {origin:?} must start with http:// or https://"
                ));
            }
            let value = HeaderValue::from_str(origin)
                .map_err(|_| format!("CORS origin {origin:?} is not a valid header value"))?;
            allowed.push(value);
        }

        Ok(CorsPolicy::AllowList(allowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_origins(origins: &str) -> Config {
        Config {
            cors_allowed_origins: origins.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn wildcard_and_empty_are_permissive() {
        assert_eq!(with_origins("*").cors_policy(), Ok(CorsPolicy::Permissive));
        assert_eq!(with_origins(" * ").cors_policy(), Ok(CorsPolicy::Permissive));
        assert_eq!(with_origins("").cors_policy(), Ok(CorsPolicy::Permissive));
    }

    #[test]
    fn explicit_origins_become_allow_list() {
        let policy = with_origins("http://localhost:5173, https://app.example.com")
            .cors_policy()
            .unwrap();

        assert_eq!(
            policy,
            CorsPolicy::AllowList(vec![
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("https://app.example.com"),
            ])
        );
    }

    #[test]
    fn validate_rejects_mixed_wildcard() {
        assert!(with_origins("*,http://localhost:3000").validate().is_err());
    }

    #[test]
    fn validate_rejects_origin_without_scheme() {
        assert!(with_origins("localhost:3000").validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_host() {
        let config = Config {
            host: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn log_format_parses_lowercase() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::Text.to_string(), "text");
    }
}
