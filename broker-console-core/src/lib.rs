//! Broker Console Core Library
//!
//! Detail panel of one trust store in the broker management console:
//! - Panel lifecycle (open / close / delete / edit)
//! - Field updater that polls the broker and renders the read-only fields
//! - Shared update registry and the scheduler that drives it
//!
//! The display surface, dialogs and prompts are abstracted through traits,
//! so the same panel logic runs against any front end.

pub mod config;
pub mod error;
pub mod render;
pub mod services;
pub mod templates;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ConsoleConfig;
pub use error::{CoreError, CoreResult};
pub use services::{FieldUpdater, PanelContext, SchedulerHandle, TrustStorePanel, UpdateScheduler};
pub use templates::BuiltinTemplates;
pub use traits::{
    ContentPane, DisplayNode, EditDialog, HostContainer, InMemoryUpdateRegistry, OperatorPrompt,
    TemplateSource, Updatable, UpdateRegistry,
};
