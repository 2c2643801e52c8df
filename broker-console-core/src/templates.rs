//! Built-in panel templates

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::TemplateSource;

/// Template of the trust store detail panel
pub const SHOW_TRUSTSTORE_TEMPLATE: &str = "showTrustStore.html";

/// Markup for [`SHOW_TRUSTSTORE_TEMPLATE`].
///
/// Display nodes carry the class names returned by
/// [`FieldKey::css_class`](crate::types::FieldKey::css_class).
pub const SHOW_TRUSTSTORE_MARKUP: &str = r#"<div class="trustStore">
  <table class="attributes">
    <tr><td class="label">Name:</td><td class="nameValue"></td></tr>
    <tr><td class="label">Path:</td><td class="pathValue"></td></tr>
    <tr><td class="label">Type:</td><td class="typeValue"></td></tr>
    <tr><td class="label">Trust Manager Factory Algorithm:</td><td class="trustManagerFactoryAlgorithmValue"></td></tr>
    <tr><td class="label">Certificate Alias:</td><td class="certificateAliasValue"></td></tr>
    <tr><td class="label">Peers Only:</td><td class="peersOnlyValue"></td></tr>
  </table>
  <div class="actions">
    <button class="editTrustStoreButton">Edit</button>
    <button class="deleteTrustStoreButton">Delete</button>
  </div>
</div>
"#;

/// Templates compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

#[async_trait]
impl TemplateSource for BuiltinTemplates {
    async fn load(&self, template: &str) -> CoreResult<String> {
        match template {
            SHOW_TRUSTSTORE_TEMPLATE => Ok(SHOW_TRUSTSTORE_MARKUP.to_string()),
            other => Err(CoreError::TemplateError(format!("Unknown template: {other}"))),
        }
    }
}
