//! 资源快照与字段定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

use broker_console_rest::ObjectAttributes;

/// Fields the trust store panel displays, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    Name,
    Path,
    Type,
    TrustManagerFactoryAlgorithm,
    CertificateAlias,
    PeersOnly,
}

impl FieldKey {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Path,
        Self::Type,
        Self::TrustManagerFactoryAlgorithm,
        Self::CertificateAlias,
        Self::PeersOnly,
    ];

    /// Attribute name in the REST representation
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Path => "path",
            Self::Type => "type",
            Self::TrustManagerFactoryAlgorithm => "trustManagerFactoryAlgorithm",
            Self::CertificateAlias => "certificateAlias",
            Self::PeersOnly => "peersOnly",
        }
    }

    /// Class name of the display node in the panel template
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Name => "nameValue",
            Self::Path => "pathValue",
            Self::Type => "typeValue",
            Self::TrustManagerFactoryAlgorithm => "trustManagerFactoryAlgorithmValue",
            Self::CertificateAlias => "certificateAliasValue",
            Self::PeersOnly => "peersOnlyValue",
        }
    }
}

/// Latest fetched representation of a resource.
///
/// Always replaced as a whole; never merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSnapshot {
    attributes: ObjectAttributes,
}

impl ResourceSnapshot {
    pub fn new(attributes: ObjectAttributes) -> Self {
        Self { attributes }
    }

    pub fn get(&self, key: FieldKey) -> Option<&Value> {
        self.attributes.get(key.attribute())
    }

    pub fn name(&self) -> Option<&str> {
        self.get(FieldKey::Name).and_then(Value::as_str)
    }

    pub fn peers_only(&self) -> bool {
        self.get(FieldKey::PeersOnly).is_some_and(is_truthy)
    }

    pub fn attributes(&self) -> &ObjectAttributes {
        &self.attributes
    }
}

impl From<ObjectAttributes> for ResourceSnapshot {
    fn from(attributes: ObjectAttributes) -> Self {
        Self::new(attributes)
    }
}

/// Boolean reading of an attribute value.
///
/// Booleans as-is, non-zero numbers, and the string `"true"` (any case).
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}
