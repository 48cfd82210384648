//! Literal string-field extraction from JSON-like bytes.
//!
//! This is a single forward scan for `"<key>": "` followed by everything up to
//! the next `"`. No escapes, nesting or non-string values are understood.

/// Destination capacity for an extracted value, terminator included.
/// Values of this length or longer are rejected.
pub const MAX_VALUE_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The key itself contains a `"`.
    InvalidKey,
    KeyNotFound,
    /// The opening quote was found but no closing one follows.
    Unterminated,
    TooLong,
}

/// Returns the raw bytes of the string value for `key`.
///
/// Only the first literal occurrence of `"<key>": "` is considered.
///
/// ```
/// # use sentence_echo::http::json::extract_string_field;
/// let body = br#"{"sentence": "Hello world"}"#;
/// assert_eq!(extract_string_field(body, "sentence").unwrap(), b"Hello world");
/// ```
pub fn extract_string_field<'a>(buf: &'a [u8], key: &str) -> Result<&'a [u8], ExtractError> {
    if key.contains('"') {
        return Err(ExtractError::InvalidKey);
    }

    let pattern = format!("\"{}\": \"", key);
    let start = find(buf, pattern.as_bytes()).ok_or(ExtractError::KeyNotFound)? + pattern.len();

    let rest = &buf[start..];
    let len = rest
        .iter()
        .position(|&b| b == b'"')
        .ok_or(ExtractError::Unterminated)?;

    if len >= MAX_VALUE_LEN {
        return Err(ExtractError::TooLong);
    }

    Ok(&rest[..len])
}

pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
}
