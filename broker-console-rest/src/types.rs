//! Wire types of the management REST API

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Attributes of one management object, as returned by the broker.
///
/// Values are primitive JSON (strings, numbers, booleans, null).
pub type ObjectAttributes = serde_json::Map<String, serde_json::Value>;

/// Options for [`HttpManagementClient`](crate::HttpManagementClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientOptions {
    /// Base URL of the management console, e.g. `http://localhost:8080/`.
    pub base_url: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Retries for transient failures (0 disables retry).
    pub max_retries: u32,
}

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: 2,
        }
    }
}

impl ClientOptions {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
