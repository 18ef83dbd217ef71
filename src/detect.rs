//! Layout detection for study documents.

use crate::render::Layout;
use crate::section::{SectionKind, VOCABULARY_HEADER};

/// Returns true if the line opens a section in any document.
///
/// Vocabulary counts only through its `📖 単語` header. The bare `단어`
/// label is left out: single-block documents use it on ordinary
/// vocabulary lines.
pub fn is_strong_header(line: &str) -> bool {
    match SectionKind::from_header(line) {
        Some(SectionKind::Vocabulary) => line.contains(VOCABULARY_HEADER),
        Some(_) => true,
        None => false,
    }
}

/// Detect the layout from the document text.
///
/// A document with at least one strong section header is sectioned,
/// anything else is rendered as a single block.
pub fn detect_layout(text: &str) -> Layout {
    if text.lines().any(is_strong_header) {
        Layout::Sectioned
    } else {
        Layout::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_sectioned() {
        assert_eq!(detect_layout("タイトル\n줄거리\n本文"), Layout::Sectioned);
        assert_eq!(detect_layout("🎧 しゃどーいんぐ表現"), Layout::Sectioned);
        assert_eq!(detect_layout("x\n💬フリートーク"), Layout::Sectioned);
        assert_eq!(detect_layout("📖 単語\n言葉"), Layout::Sectioned);
    }

    #[test]
    fn test_strong_header_follows_section_markers() {
        assert!(is_strong_header("줄거리"));
        assert!(is_strong_header("🎧 しゃどーいんぐ表現"));
        assert!(is_strong_header("しゃどーいんぐ"));
        assert!(is_strong_header("💬フリートーク"));
        assert!(is_strong_header("📖 単語"));
        assert!(!is_strong_header("단어：気になる 궁금하다"));
        assert!(!is_strong_header("本文"));
    }

    #[test]
    fn test_detect_plain() {
        assert_eq!(detect_layout(""), Layout::Plain);
        assert_eq!(detect_layout("思（おも）いますか？"), Layout::Plain);
        assert_eq!(detect_layout("단어：気になる 궁금하다"), Layout::Plain);
        assert_eq!(detect_layout("줄거리가 재미있다"), Layout::Plain);
    }
}
