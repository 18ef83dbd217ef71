//! Input normalization applied before annotation.
//!
//! - Leading BOM removal
//! - CRLF / CR line endings to LF
//! - Unicode NFC normalization, so a kana written with a combining voicing
//!   mark (`か` + U+3099) matches the furigana class as `が`

use unicode_normalization::UnicodeNormalization;

/// Normalize raw source text.
pub fn normalize_input(input: &str) -> String {
    let text = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut result = String::with_capacity(text.len());
    let mut chars = text.nfc().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
            continue;
        }
        result.push(c);
    }

    result
}
