//! Configuration loading from environment.

use std::env;
use std::time::Duration;

const DEFAULT_REPOSITORY_TIMEOUT_MS: u64 = 5000;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub repository_timeout: Duration,
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let server_address = match (var("SERVER_ADDRESS"), var("PORT")) {
            (Some(address), _) => address,
            (None, Some(port)) => {
                let port = port
                    .trim()
                    .parse::<u16>()
                    .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", port, e))?;
                format!("0.0.0.0:{}", port)
            }
            (None, None) => anyhow::bail!("SERVER_ADDRESS, PORT not defined in environment"),
        };

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let repository_timeout = match var("REPOSITORY_TIMEOUT_MS") {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("Invalid REPOSITORY_TIMEOUT_MS {:?}: {}", ms, e))?,
            ),
            None => Duration::from_millis(DEFAULT_REPOSITORY_TIMEOUT_MS),
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("Invalid LOG_FORMAT {:?}: expected text or json", other),
        };

        Ok(Self {
            server_address,
            database_url,
            repository_timeout,
            log_format,
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}
