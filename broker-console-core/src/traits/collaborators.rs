//! Operator-facing collaborators

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{EditOutcome, ResourceSnapshot};

/// Source of panel templates
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Markup of the named template
    async fn load(&self, template: &str) -> CoreResult<String>;
}

/// Edit dialog for a trust store
#[async_trait]
pub trait EditDialog: Send + Sync {
    /// Show the dialog pre-filled with `current`; resolves when it closes
    async fn show_edit_dialog(&self, current: &ResourceSnapshot) -> CoreResult<EditOutcome>;
}

/// Blocking operator prompts
#[async_trait]
pub trait OperatorPrompt: Send + Sync {
    /// Ask a yes/no question
    async fn confirm(&self, message: &str) -> bool;

    /// Show a message the operator must acknowledge
    async fn alert(&self, message: &str);
}
