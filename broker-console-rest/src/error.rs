use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all management REST operations.
///
/// Each variant carries the request `path` it was produced for, so that log
/// lines and operator alerts can name the object involved.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — connection refused, DNS failure
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`Status`](Self::Status) with a gateway status (502/503/504)
///
/// The built-in HTTP client retries these with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[serde(tag = "code")]
pub enum RestError {
    /// A network-level error occurred.
    #[error("[{path}] Network error: {detail}")]
    NetworkError {
        /// Request path.
        path: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{path}] Request timeout: {detail}")]
    Timeout {
        /// Request path.
        path: String,
        /// Error details.
        detail: String,
    },

    /// The object does not exist on the broker (HTTP 404).
    #[error("[{path}] Object not found")]
    NotFound {
        /// Request path.
        path: String,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The management user may not perform the operation (HTTP 401/403).
    #[error("[{path}] Permission denied")]
    PermissionDenied {
        /// Request path.
        path: String,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// Any other non-2xx status.
    #[error("[{path}] HTTP {status}: {body}")]
    Status {
        /// Request path.
        path: String,
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("[{path}] Parse error: {detail}")]
    ParseError {
        /// Request path.
        path: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The HTTP client could not be built (bad TLS backend, bad base URL, ...).
    #[error("Client configuration error: {0}")]
    ClientConfig(String),
}

impl RestError {
    /// 是否为预期行为（对象不存在、无权限等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::PermissionDenied { .. }
        )
    }

    /// Whether the failure is transient and worth another attempt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::Timeout { .. }
                | Self::Status {
                    status: 502..=504,
                    ..
                }
        )
    }

    /// The message to show an operator.
    ///
    /// Error payloads returned by the broker are surfaced verbatim; transport
    /// failures fall back to the `Display` form.
    #[must_use]
    pub fn operator_message(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.is_empty() => body.clone(),
            Self::NotFound {
                raw_message: Some(msg),
                ..
            }
            | Self::PermissionDenied {
                raw_message: Some(msg),
                ..
            } if !msg.is_empty() => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, RestError>`.
pub type Result<T> = std::result::Result<T, RestError>;
