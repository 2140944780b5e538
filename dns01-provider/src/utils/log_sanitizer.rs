//! Log sanitization utilities
//!
//! API responses can be large (every record of a zone) and request parameters contain the
//! validation token. Neither should be written to logs in full.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret kept visible.
const MASK_VISIBLE_CHARS: usize = 4;

/// Largest char boundary `<= index`.
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

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged, longer ones are cut at a char boundary
/// and suffixed with the total byte length.
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

/// Mask a secret, keeping only its first few characters.
///
/// `"abcdef123456"` becomes `"abcd********"`. Secrets no longer than the visible prefix are
/// masked completely.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= MASK_VISIBLE_CHARS {
        return "*".repeat(total);
    }
    let visible: String = secret.chars().take(MASK_VISIBLE_CHARS).collect();
    format!("{visible}{}", "*".repeat(total - MASK_VISIBLE_CHARS))
}
