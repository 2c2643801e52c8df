//! 面板生命周期相关类型

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ResourceSnapshot;

/// Identity of a registered updater handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdaterId(Uuid);

impl UpdaterId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UpdaterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UpdaterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Operator actions a panel exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelAction {
    Delete,
    Edit,
}

/// Result of the edit dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "snapshot")]
pub enum EditOutcome {
    /// The resource was changed; this is its new representation
    Updated(ResourceSnapshot),
    Unchanged,
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason")]
pub enum DeleteOutcome {
    /// Operator declined the confirmation; nothing was sent
    Declined,
    /// Deleted on the broker and the panel torn down
    Deleted,
    /// Broker refused; the panel is left as it was
    Failed(String),
    /// The panel was not open
    NotOpen,
}

/// What `handle_action` did
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Ignored,
    Delete(DeleteOutcome),
    Edit(EditOutcome),
    EditFailed(String),
}

/// Load state of a field updater
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum LoadState {
    /// No fetch has completed yet
    Pending,
    /// At least one fetch succeeded
    Loaded { at: DateTime<Utc> },
    /// Every fetch so far has failed; nodes are blank
    Failed { reason: String },
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}
