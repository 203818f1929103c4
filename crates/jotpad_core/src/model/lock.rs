//! Lock-aware body encoding.
//!
//! A password-protected note stores its visible text behind an in-band
//! control-character prefix. The encoding is deliberately forgiving: raw text
//! that does not start with the exact marker is plain, unlocked text, so
//! foreign or pre-marker data always stays editable.
//!
//! # Invariants
//! - `parse_body(encode_body(locked, text)) == (locked, text)` for any text
//!   that does not itself start with the marker sequence.
//! - Parsing never fails.

/// Reserved prefix marking a locked body. Uses SOH control characters so the
/// sequence cannot be typed through a normal text widget.
pub const LOCK_MARKER: &str = "\u{1}locked\u{1}";

/// Splits raw persisted body text into its lock flag and visible text.
pub fn parse_body(raw: &str) -> (bool, &str) {
    match raw.strip_prefix(LOCK_MARKER) {
        Some(visible) => (true, visible),
        None => (false, raw),
    }
}

/// Re-applies the lock marker around visible text for persistence.
pub fn encode_body(locked: bool, visible: &str) -> String {
    if locked {
        format!("{LOCK_MARKER}{visible}")
    } else {
        visible.to_string()
    }
}
