//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables. TouchBistro credentials are required; everything
//! else has sensible defaults.

use tracing::info;

use super::error::{Error, Result};

/// Default TouchBistro cloud API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://cloud.touchbistro.com/api/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// TouchBistro API credentials and endpoint.
    pub pos: PosConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// TouchBistro API configuration.
///
/// Loaded once at startup and shared read-only by the gateway for the
/// process lifetime. Deliberately not serializable: the only way the API
/// key leaves this struct is through the gateway's Authorization header.
#[derive(Clone)]
pub struct PosConfig {
    /// Bearer token for the TouchBistro cloud API.
    pub api_key: String,

    /// Venue identifier scoping every request to one restaurant.
    pub venue_id: String,

    /// API base URL.
    pub base_url: String,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for PosConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosConfig")
            .field("api_key", &"[REDACTED]")
            .field("venue_id", &self.venue_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TOUCHBISTRO_API_KEY` and `TOUCHBISTRO_VENUE_ID` are required; a
    /// missing value is a fatal configuration error. `TOUCHBISTRO_BASE_URL`,
    /// `MCP_SERVER_NAME`, and `MCP_LOG_LEVEL` are optional overrides.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("TOUCHBISTRO_API_KEY")
            .map_err(|_| Error::config("TOUCHBISTRO_API_KEY environment variable required"))?;

        let venue_id = std::env::var("TOUCHBISTRO_VENUE_ID")
            .map_err(|_| Error::config("TOUCHBISTRO_VENUE_ID environment variable required"))?;

        let base_url = match std::env::var("TOUCHBISTRO_BASE_URL") {
            Ok(url) => {
                info!("Using base URL override: {}", url);
                url
            }
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        let name =
            std::env::var("MCP_SERVER_NAME").unwrap_or_else(|_| "touchbistro-mcp".to_string());
        let level = std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server: ServerConfig {
                name,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig { level },
            pos: PosConfig {
                api_key,
                venue_id,
                base_url,
            },
        })
    }
}
