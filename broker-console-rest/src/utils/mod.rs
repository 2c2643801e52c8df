//! Utility modules.

/// Log sanitization so large or sensitive response bodies stay out of logs.
pub mod log_sanitizer;
