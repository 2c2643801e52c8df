//! Management REST path building

use std::borrow::Cow;

/// Prefix shared by every management REST path.
pub const REST_PREFIX: &str = "rest";

/// Object category of trust stores.
pub const TRUSTSTORE_CATEGORY: &str = "truststore";

/// Build the REST path of a named object, e.g. `rest/truststore/my%20store`.
///
/// The name is percent-encoded as a single path segment.
pub fn object_path(category: &str, name: &str) -> String {
    format!("{REST_PREFIX}/{category}/{}", urlencoding::encode(name))
}

/// Recover the object name from a path produced by [`object_path`].
///
/// Returns `None` if the path belongs to another category or is not valid
/// percent-encoded UTF-8.
pub fn object_name<'a>(category: &str, path: &'a str) -> Option<Cow<'a, str>> {
    let encoded = path
        .strip_prefix(REST_PREFIX)?
        .strip_prefix('/')?
        .strip_prefix(category)?
        .strip_prefix('/')?;
    if encoded.contains('/') {
        return None;
    }
    urlencoding::decode(encoded).ok()
}
