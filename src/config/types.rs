//! Configuration types for the wage engine service.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the YAML service file. Every section has defaults, so a
//! partial file is valid.

use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address the API listens on (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Engine identification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Display name reported by the health endpoint.
    pub name: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            name: "weekly-wage-engine".to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
    /// Engine identification.
    pub engine: EngineSettings,
}
