//! Log sanitization utilities
//!
//! Management responses can carry certificate material (aliases, PEM blobs),
//! so bodies are never written to the log in full.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for logging.
///
/// Counts characters rather than bytes so that multi-byte text is never cut
/// in the middle of a code point.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &s[..cut],
            s.len()
        ),
    }
}
