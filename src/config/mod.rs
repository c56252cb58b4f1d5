//! Configuration system
//!
//! AppConfig binds the model artifact path to the server settings and
//! the startup failure policy. Configuration is a fixed input: nothing
//! here is mutable through the API.

mod server;

pub use server::ServerConfig;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// What to do when the model artifact fails to load at startup
///
/// Either way the process exits without serving traffic; the variants
/// differ only in how the failure is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadFailurePolicy {
    /// Propagate the error out of the launcher and exit through the
    /// failure return path
    #[default]
    Propagate,
    /// Log the error and terminate with a non-zero exit code
    LogExit,
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the trained model artifact
    pub model_path: PathBuf,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Startup policy when the model cannot be loaded
    #[serde(default)]
    pub on_load_error: LoadFailurePolicy,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file, dispatching on the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(path),
            Some("json") => Self::from_json(path),
            other => Err(anyhow!(
                "unsupported config file format: .{}",
                other.unwrap_or("")
            )),
        }
    }

    /// Create a config for a model path with default server settings
    pub fn with_model(model_path: PathBuf) -> Self {
        Self {
            model_path,
            server: ServerConfig::default(),
            on_load_error: LoadFailurePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_yaml() {
        let yaml = r#"
model_path: ./models/charges.json

server:
  port: 8000
  host: 127.0.0.1
  allowed_origin: http://localhost:3000

on_load_error: log-exit
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.model_path, PathBuf::from("./models/charges.json"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.addr(), "127.0.0.1:8000");
        assert_eq!(config.on_load_error, LoadFailurePolicy::LogExit);
        // Unset fields fall back to defaults.
        assert!(config.server.request_logging);
    }

    #[test]
    fn test_app_config_minimal() {
        let config: AppConfig = serde_yaml::from_str("model_path: m.json").unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.allowed_origin, "http://localhost:3000");
        assert_eq!(config.on_load_error, LoadFailurePolicy::Propagate);
    }
}
