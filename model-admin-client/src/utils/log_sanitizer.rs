//! Log sanitization utilities
//!
//! Keeps record payloads and bearer tokens from being dumped verbatim
//! into debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters left visible by [`mask_token`].
const TOKEN_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response or request body for logging.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a bearer token, keeping a short prefix so operators can tell
/// configured tokens apart.
pub fn mask_token(token: &str) -> String {
    if token.len() <= TOKEN_VISIBLE_PREFIX * 2 {
        return "****".to_string();
    }
    format!(
        "{}****",
        &token[..floor_char_boundary(token, TOKEN_VISIBLE_PREFIX)]
    )
}
