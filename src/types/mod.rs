//! Shared types for the MoodPlaylist HTTP API.
//!
//! These types are used by the server for request/response handling.

pub mod mood;

use serde::{Deserialize, Serialize};

pub use mood::*;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Name of the sentiment engine in use
    pub engine: String,
    #[serde(default)]
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub server: ServerInfo,
    pub sentiment: SentimentInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
    pub reject_empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentInfo {
    pub engine: String,
    pub negation_factor: f64,
    pub exclamation_boost: bool,
}
