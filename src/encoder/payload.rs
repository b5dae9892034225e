//! The byte-to-text transform shared by both encoders.
//!
//! Standard-alphabet base64, wrapped at 76 columns with a trailing newline —
//! the classic MIME shape, and byte-compatible with what older Python
//! tooling emitted via `base64.encodestring`. The alphabet
//! (`A–Z a–z 0–9 + / =`) contains neither `"` nor `\`, so a payload can sit
//! verbatim inside the generated module's triple-quoted string without any
//! escaping: the delimiter sequence `"""` is unproducible by construction.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// MIME line width. Tk's base64 reader accepts arbitrary line breaks, but
/// wrapping keeps the generated module diffable and editor-friendly.
const WRAP_COLUMNS: usize = 76;

/// Encode bytes as line-wrapped base64. Empty input yields an empty string.
pub fn encode_payload(bytes: &[u8]) -> String {
    let raw = STANDARD.encode(bytes);
    let mut out = String::with_capacity(raw.len() + raw.len() / WRAP_COLUMNS + 1);
    let mut rest = raw.as_str();
    while !rest.is_empty() {
        let take = rest.len().min(WRAP_COLUMNS);
        out.push_str(&rest[..take]);
        out.push('\n');
        rest = &rest[take..];
    }
    out
}

/// Decode a payload back to the original bytes, ignoring the line wrapping.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD.decode(compact)
}
