//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export transport error type
pub use broker_console_rest::RestError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Template could not be loaded or installed
    #[error("Template error: {0}")]
    TemplateError(String),

    /// Template lacks the display node for a field
    #[error("Template has no display node for field '{0}'")]
    MissingDisplayNode(String),

    /// The broker returned no object for the path
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The edit dialog failed
    #[error("Edit dialog error: {0}")]
    DialogError(String),

    /// Operation needs an open panel
    #[error("Panel is not open: {0}")]
    PanelClosed(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// REST transport error
    #[error("{0}")]
    Rest(#[from] RestError),
}

impl CoreError {
    /// Whether it is expected behavior (missing resource, closed panel, operator
    /// input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ResourceNotFound(_) | Self::PanelClosed(_) | Self::DialogError(_) => true,
            Self::Rest(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
