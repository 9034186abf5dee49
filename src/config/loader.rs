//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, LoggingConfig, ServerConfig};

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// logging:
///   filter: invoice_engine=debug,info
/// ```
///
/// # Example
///
/// ```no_run
/// use invoice_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/app.yaml")?;
/// println!("Listening on {}", loader.server().bind_address());
/// # Ok::<(), invoice_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::ConfigParseError`] if the file is not valid YAML for
    ///   [`AppConfig`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Loads configuration from `path`, falling back to defaults only when
    /// the file does not exist. Parse errors are still reported.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(path) {
            Err(EngineError::ConfigNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes to null, which serde_yaml rejects for structs
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the HTTP listener settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }
}
