//! Configuration loading and management

use crate::catalog::Catalog;
use crate::core::DEFAULT_SESSION_KEY;
use crate::core::error::{ConfigError, SanctuaryError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_log_filter() -> String {
    "sanctuary=info".to_string()
}

/// Runtime configuration for an application embedding the guide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanctuaryConfig {
    /// Fixture file to load instead of the built-in catalog
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Storage key the session user is persisted under
    #[serde(default = "default_session_key")]
    pub session_key: String,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for SanctuaryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            session_key: default_session_key(),
            log_filter: default_log_filter(),
        }
    }
}

impl SanctuaryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would leave the application unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session_key".to_string(),
                value: self.session_key.clone(),
                message: "must not be empty".to_string(),
            });
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_filter".to_string(),
                value: self.log_filter.clone(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// The configured catalog, or the built-in fixtures when no path is set
    pub fn load_catalog(&self) -> Result<Catalog, SanctuaryError> {
        self.validate()?;

        let catalog = match &self.catalog_path {
            Some(path) => Catalog::from_yaml_file(path)?,
            None => Catalog::builtin()?,
        };
        Ok(catalog)
    }
}
