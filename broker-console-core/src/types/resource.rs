//! 资源标识

use serde::{Deserialize, Serialize};

use broker_console_rest::{object_path, TRUSTSTORE_CATEGORY};

/// Reference to another management object (the parent of a trust store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
}

impl ResourceRef {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

/// Identity of the resource a panel shows.
///
/// Immutable once built; the REST path is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentity {
    #[serde(rename = "type")]
    resource_type: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<ResourceRef>,
}

impl ResourceIdentity {
    /// Identity of a trust store
    pub fn truststore(name: impl Into<String>, parent: Option<ResourceRef>) -> Self {
        Self {
            resource_type: TRUSTSTORE_CATEGORY.to_string(),
            name: name.into(),
            parent,
        }
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&ResourceRef> {
        self.parent.as_ref()
    }

    /// `rest/<type>/<percent-encoded name>`
    pub fn rest_path(&self) -> String {
        object_path(&self.resource_type, &self.name)
    }
}
