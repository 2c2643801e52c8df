//! Host container and display seams

use std::sync::Arc;

use crate::error::CoreResult;
use crate::types::{FieldKey, PanelAction};

/// A node showing one field's rendered HTML
pub trait DisplayNode: Send + Sync {
    /// Replace the node's content
    fn set_html(&self, html: &str);
}

/// The content pane a panel is opened into (one tab of the host)
pub trait ContentPane: Send + Sync {
    /// Install template markup as the pane's content
    fn install_template(&self, markup: &str) -> CoreResult<()>;

    /// Display node for a field, once the template is installed
    fn display_node(&self, key: FieldKey) -> Option<Arc<dyn DisplayNode>>;

    /// Make the action controls live; clicks are routed back to
    /// [`TrustStorePanel::handle_action`](crate::services::TrustStorePanel::handle_action)
    fn bind_actions(&self, actions: &[PanelAction]);

    /// The pane is about to be removed from its host
    fn on_close(&self);

    /// Destroy the pane and everything inside it
    fn destroy_recursive(&self);
}

/// Container that owns content panes (the console's tab container)
pub trait HostContainer: Send + Sync {
    fn remove_child(&self, pane: &Arc<dyn ContentPane>);
}
