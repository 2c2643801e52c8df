//! Field schema and HTML rendering
//!
//! A panel binds each [`FieldKey`] to its display node once, at open time.
//! Rendering then walks the bindings in order; nothing is looked up by class
//! name after that.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ContentPane, DisplayNode};
use crate::types::{is_truthy, FieldKey, ResourceSnapshot};

/// Renders one attribute value (absent = `None`) to an HTML fragment
pub type RenderFn = fn(Option<&Value>) -> String;

/// One field of the schema: which attribute, where it goes, how it looks
pub struct FieldBinding {
    key: FieldKey,
    node: Arc<dyn DisplayNode>,
    render: RenderFn,
}

impl FieldBinding {
    pub fn new(key: FieldKey, node: Arc<dyn DisplayNode>) -> Self {
        Self {
            key,
            node,
            render: renderer_for(key),
        }
    }

    pub fn key(&self) -> FieldKey {
        self.key
    }

    /// Render this field of `snapshot` into the bound node
    pub fn render_into(&self, snapshot: &ResourceSnapshot) {
        self.node.set_html(&(self.render)(snapshot.get(self.key)));
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Build the trust store schema against an installed template.
///
/// Every field must have a display node; a missing one is a template bug.
pub fn bind_fields(pane: &dyn ContentPane) -> CoreResult<Vec<FieldBinding>> {
    FieldKey::ALL
        .iter()
        .map(|&key| {
            pane.display_node(key)
                .map(|node| FieldBinding::new(key, node))
                .ok_or_else(|| CoreError::MissingDisplayNode(key.attribute().to_string()))
        })
        .collect()
}

/// Render every binding from one snapshot
pub fn render_all(bindings: &[FieldBinding], snapshot: &ResourceSnapshot) {
    for binding in bindings {
        binding.render_into(snapshot);
    }
}

fn renderer_for(key: FieldKey) -> RenderFn {
    match key {
        FieldKey::PeersOnly => render_checkbox,
        _ => render_text,
    }
}

/// Escaped text; absent and null values render empty
pub fn render_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => escape_html(s),
        Some(other) => escape_html(&other.to_string()),
    }
}

/// Read-only checkbox reflecting the value's truthiness
pub fn render_checkbox(value: Option<&Value>) -> String {
    if value.is_some_and(is_truthy) {
        "<input type='checkbox' disabled='disabled' checked='checked' />".to_string()
    } else {
        "<input type='checkbox' disabled='disabled' />".to_string()
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
