//! Configuration loading for idunn.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.idunn/config.toml` (user)
//! 3. `/etc/idunn/config.toml` (system)
//!
//! When no file exists, built-in defaults apply and the client talks to the
//! local service address.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;
use crate::{IdunnError, Result};

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Prediction Service endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the Prediction Service (default: http://localhost:8000).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided)
    /// 2. `~/.idunn/config.toml`
    /// 3. `/etc/idunn/config.toml`
    ///
    /// Returns the built-in defaults when no file exists. An explicit path
    /// that does not exist is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit_path)? else {
            return Ok(Config::default());
        };
        let content = fs::read_to_string(&path).map_err(|e| {
            IdunnError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            IdunnError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, if any file is present.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(IdunnError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".idunn").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/idunn/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_points_at_local_service() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
    }

    #[test]
    fn parse_empty_config_keeps_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8000");
    }

    #[test]
    fn parse_service_config() {
        let toml = r#"
            [service]
            base_url = "http://groceries.internal:8000"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.service.base_url, "http://groceries.internal:8000");
    }

    #[test]
    fn load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nbase_url = \"http://10.0.0.5:8000\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.service.base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn explicit_path_not_found_returns_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }

    #[test]
    fn malformed_config_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "service = \"not a table\"").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }
}
