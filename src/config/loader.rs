//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: 127.0.0.1:3000
/// logging:
///   filter: info,tower_http=debug
/// engine:
///   name: weekly-wage-engine
/// ```
///
/// # Example
///
/// ```no_run
/// use weekly_wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Listening on {}", loader.bind_address());
/// # Ok::<(), weekly_wage_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or fields of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Loads configuration from `path`, or falls back to the built-in defaults
    /// if the file does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(path) {
            Err(EngineError::ConfigNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the address the API should listen on.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }

    /// Returns the default log filter.
    pub fn log_filter(&self) -> &str {
        &self.config.logging.filter
    }

    /// Returns the engine display name.
    pub fn engine_name(&self) -> &str {
        &self.config.engine.name
    }
}
