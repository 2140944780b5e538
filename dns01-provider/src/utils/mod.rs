//! Utility modules.

/// Log sanitization so response bodies and secrets never reach logs verbatim.
pub mod log_sanitizer;
