use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `MOODPLAYLIST_` prefix. For example: `MOODPLAYLIST_SERVER__PORT=8097`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Sentiment engine tuning
    #[serde(default)]
    pub sentiment: SentimentConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentConfig {
    /// Multiplier applied to a sentiment word's polarity when it is negated
    #[serde(default = "default_negation_factor")]
    pub negation_factor: f64,

    /// Let exclamation marks strengthen the overall polarity
    #[serde(default = "default_true")]
    pub exclamation_boost: bool,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            negation_factor: default_negation_factor(),
            exclamation_boost: true,
        }
    }
}

fn default_negation_factor() -> f64 {
    -0.5
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Answer blank diary entries with an error instead of classifying them
    #[serde(default = "default_true")]
    pub reject_empty: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            reject_empty: true,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8097
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Nested values use double underscores:
    /// - `MOODPLAYLIST_SERVER__HOST` -> server.host
    /// - `MOODPLAYLIST_SERVER__REJECT_EMPTY` -> server.reject_empty
    /// - `MOODPLAYLIST_SENTIMENT__NEGATION_FACTOR` -> sentiment.negation_factor
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOODPLAYLIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
