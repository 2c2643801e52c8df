//! Console configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use broker_console_rest::ClientOptions;

use crate::error::{CoreError, CoreResult};

/// Shortest accepted polling period
const MIN_UPDATE_PERIOD_MS: u64 = 100;

/// Settings shared by every panel of a console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    /// REST client settings
    pub client: ClientOptions,
    /// Wait for the first fetch inside `open()` instead of loading in the background
    pub use_sync_get: bool,
    /// Polling period of the update scheduler
    pub update_period_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            client: ClientOptions::default(),
            use_sync_get: false,
            update_period_ms: 5_000,
        }
    }
}

impl ConsoleConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!("Cannot read {}: {e}", path.display()))
        })?;
        log::debug!("[config] Loaded {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let base_url = self.client.base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CoreError::ConfigError(format!(
                "baseUrl must be an http(s) URL, got '{base_url}'"
            )));
        }
        if self.update_period_ms < MIN_UPDATE_PERIOD_MS {
            return Err(CoreError::ConfigError(format!(
                "updatePeriodMs must be at least {MIN_UPDATE_PERIOD_MS}, got {}",
                self.update_period_ms
            )));
        }
        if self.client.request_timeout_secs == 0 {
            return Err(CoreError::ConfigError(
                "requestTimeoutSecs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn update_period(&self) -> Duration {
        Duration::from_millis(self.update_period_ms)
    }
}
