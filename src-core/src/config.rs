//! Dashboard configuration.
//!
//! The defaults live in `src-core/config/dashboard.toml` and are compiled into
//! the binary; the browser build has no filesystem or environment to read from.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DashboardError;

const DEFAULT_CONFIG: &str = include_str!("../config/dashboard.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub health: HealthConfig,
    pub preview: PreviewConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the classification service, e.g. `http://localhost:8000`
    pub base_url: String,
    pub health_path: String,
    pub predict_path: String,
    /// Multipart field name carrying the uploaded file
    pub upload_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub accepted_extensions: Vec<String>,
}

impl DashboardConfig {
    pub fn health_url(&self) -> Result<String, DashboardError> {
        self.endpoint(&self.api.health_path)
    }

    pub fn predict_url(&self) -> Result<String, DashboardError> {
        self.endpoint(&self.api.predict_path)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.health.poll_interval_ms)
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attr(&self) -> String {
        self.upload.accepted_extensions.join(",")
    }

    fn endpoint(&self, path: &str) -> Result<String, DashboardError> {
        let base = Url::parse(&self.api.base_url)
            .map_err(|e| DashboardError::Config(format!("Invalid base_url '{}': {}", self.api.base_url, e)))?;
        base.join(path)
            .map(|u| u.to_string())
            .map_err(|e| DashboardError::Config(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    fn validate(&self) -> Result<(), DashboardError> {
        self.health_url()?;
        self.predict_url()?;
        if self.preview.page_size == 0 {
            return Err(DashboardError::Config("preview.page_size must be at least 1".to_string()));
        }
        if self.health.poll_interval_ms == 0 {
            return Err(DashboardError::Config("health.poll_interval_ms must be non-zero".to_string()));
        }
        if self.api.upload_field.is_empty() {
            return Err(DashboardError::Config("api.upload_field must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Parse and validate a TOML configuration document.
pub fn parse_config(content: &str) -> Result<DashboardConfig, DashboardError> {
    let config: DashboardConfig =
        toml::from_str(content).map_err(|e| DashboardError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Get the configuration embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_config() -> DashboardConfig {
    parse_config(DEFAULT_CONFIG).expect("embedded dashboard.toml must be valid")
}
