//! 类型定义模块

mod panel;
mod resource;
mod snapshot;

pub use panel::{ActionOutcome, DeleteOutcome, EditOutcome, LoadState, PanelAction, UpdaterId};
pub use resource::{ResourceIdentity, ResourceRef};
pub use snapshot::{is_truthy, FieldKey, ResourceSnapshot};

// Re-export REST 库的公共类型
pub use broker_console_rest::ObjectAttributes;
