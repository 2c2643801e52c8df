//! Collaborator abstraction trait definitions

mod collaborators;
mod host;
mod update_registry;

pub use collaborators::{EditDialog, OperatorPrompt, TemplateSource};
pub use host::{ContentPane, DisplayNode, HostContainer};
pub use update_registry::{InMemoryUpdateRegistry, Updatable, UpdateRegistry};
