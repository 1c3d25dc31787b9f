//! Utility modules.

/// Log sanitization utilities to keep payloads and tokens out of logs.
pub mod log_sanitizer;
