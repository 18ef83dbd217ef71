//! # Annotation Pipeline
//!
//! A 4-stage pipeline that turns furigana study text into HTML-ready markup.
//!
//! ## Pipeline Stages
//!
//! 1. **Stage 1: Line Join** - Fuse a kanji line with a furigana-only next line
//! 2. **Stage 2: Ruby Wrapping** - `漢字(かんじ)` becomes `<ruby>漢字<rt>かんじ</rt></ruby>`
//! 3. **Stage 3: Korean Emphasis** - Contextual Hangul spans get `<strong class="korean-bold">`
//! 4. **Stage 4: Escape Guard** - HTML-escape literal text, keep inserted markup intact

mod escape;
mod korean;
mod line_join;
mod ruby;

pub use escape::{guard, html_escape, segments, Segment};
pub use korean::{embolden_korean, KoreanRule};
pub use line_join::join_split_furigana;
pub use ruby::{wrap_ruby, wrap_ruby_with_cap, DEFAULT_MAX_RUBY_PASSES};

/// Kanji class body: CJK Unified Ideographs (U+4E00..U+9FAF) plus the iteration mark.
pub(crate) const KANJI_CLASS: &str = "一-龯々";

/// Furigana class body: hiragana, katakana and whitespace.
pub(crate) const KANA_CLASS: &str = r"ぁ-んァ-ン\s";

/// Hangul syllables class body.
pub(crate) const HANGUL_CLASS: &str = "가-힣";

pub(crate) const RUBY_OPEN: &str = "<ruby>";
pub(crate) const RUBY_CLOSE: &str = "</rt></ruby>";
pub(crate) const BOLD_OPEN: &str = r#"<strong class="korean-bold">"#;
pub(crate) const BOLD_CLOSE: &str = "</strong>";

/// Annotation configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Enable Stage 1: fuse furigana split onto the next line
    pub join_split_furigana: bool,
    /// Upper bound on ruby wrapping passes (at least 1)
    pub max_ruby_passes: usize,
    /// Korean emphasis rules, applied in order
    pub korean_rules: Vec<KoreanRule>,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self::plain()
    }
}

impl AnnotateOptions {
    /// Options for a single-block document.
    pub fn plain() -> Self {
        Self {
            join_split_furigana: true,
            max_ruby_passes: DEFAULT_MAX_RUBY_PASSES,
            korean_rules: KoreanRule::PLAIN.to_vec(),
        }
    }

    /// Options for a document split into typed sections.
    ///
    /// Adds the standalone-line rule and moves the pointer rule ahead of the
    /// em-dash rule.
    pub fn sectioned() -> Self {
        Self {
            join_split_furigana: true,
            max_ruby_passes: DEFAULT_MAX_RUBY_PASSES,
            korean_rules: KoreanRule::SECTIONED.to_vec(),
        }
    }

    /// Sets the ruby pass cap (clamped to at least 1).
    pub fn with_max_ruby_passes(mut self, passes: usize) -> Self {
        self.max_ruby_passes = passes.max(1);
        self
    }

    /// Replaces the Korean emphasis rules.
    pub fn with_korean_rules(mut self, rules: impl Into<Vec<KoreanRule>>) -> Self {
        self.korean_rules = rules.into();
        self
    }

    /// Disables the line-join stage.
    pub fn without_line_join(mut self) -> Self {
        self.join_split_furigana = false;
        self
    }
}

/// Run the full annotation pipeline on one block of text.
///
/// # Example
///
/// ```
/// use rubify::annotate::{annotate, AnnotateOptions};
///
/// let html = annotate("思\n（おも）いますか？", &AnnotateOptions::plain());
/// assert_eq!(html, "<ruby>思<rt>おも</rt></ruby>いますか？");
/// ```
pub fn annotate(input: &str, options: &AnnotateOptions) -> String {
    let mut result = input.to_string();

    // Stage 1: Line join
    if options.join_split_furigana {
        result = join_split_furigana(&result);
    }

    // Stage 2: Ruby wrapping
    result = wrap_ruby_with_cap(&result, options.max_ruby_passes);

    // Stage 3: Korean emphasis
    result = embolden_korean(&result, &options.korean_rules);

    // Stage 4: Escape guard
    guard(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_split_furigana() {
        let result = annotate("思\n（おも）いますか？", &AnnotateOptions::plain());
        assert_eq!(result, "<ruby>思<rt>おも</rt></ruby>いますか？");
    }

    #[test]
    fn test_annotate_without_line_join() {
        let options = AnnotateOptions::plain().without_line_join();
        let result = annotate("思\n（おも）いますか？", &options);
        assert_eq!(result, "思\n（おも）いますか？");
    }

    #[test]
    fn test_annotate_vocabulary_line() {
        let result = annotate("단어：気になる 궁금하다", &AnnotateOptions::plain());
        assert!(result.contains(r#"<strong class="korean-bold">궁금하다</strong>"#));
        assert!(result.starts_with("단어：気になる "));
        assert!(!result.contains("<ruby>"));
    }

    #[test]
    fn test_annotate_pointer_line() {
        let result = annotate("👉 이 케이크 달아 보여요.", &AnnotateOptions::plain());
        assert_eq!(
            result,
            r#"👉 <strong class="korean-bold">이 케이크 달아 보여요.</strong>"#
        );
    }

    #[test]
    fn test_annotate_escapes_literal_text() {
        let result = annotate("Tom & \"Jerry\" <b>漢字(かんじ)</b>", &AnnotateOptions::plain());
        assert_eq!(
            result,
            "Tom &amp; &quot;Jerry&quot; &lt;b&gt;<ruby>漢字<rt>かんじ</rt></ruby>&lt;/b&gt;"
        );
    }

    #[test]
    fn test_annotate_mixed_study_text() {
        let input = "主人公(しゅじんこう) — 주인공\n👉 그는 착해요.";
        let result = annotate(input, &AnnotateOptions::plain());
        assert_eq!(
            result,
            concat!(
                "<ruby>主人公<rt>しゅじんこう</rt></ruby> — ",
                r#"<strong class="korean-bold">주인공</strong>"#,
                "\n👉 ",
                r#"<strong class="korean-bold">그는 착해요.</strong>"#,
            )
        );
    }

    #[test]
    fn test_annotate_escapes_stray_ruby_tag() {
        let result = annotate(
            "<ruby><script>alert(1)</script>\n漢字(かんじ)",
            &AnnotateOptions::plain(),
        );
        assert_eq!(
            result,
            "&lt;ruby&gt;&lt;script&gt;alert(1)&lt;/script&gt;\n<ruby>漢字<rt>かんじ</rt></ruby>"
        );
    }

    #[test]
    fn test_sectioned_options_add_standalone_rule() {
        let plain = AnnotateOptions::plain();
        let sectioned = AnnotateOptions::sectioned();
        assert!(!plain.korean_rules.contains(&KoreanRule::StandaloneLine));
        assert!(sectioned.korean_rules.contains(&KoreanRule::StandaloneLine));

        let result = annotate("안녕하세요!\nこんにちは", &sectioned);
        assert_eq!(
            result,
            r#"<strong class="korean-bold">안녕하세요!</strong>"#.to_string() + "\nこんにちは"
        );
    }

    #[test]
    fn test_max_ruby_passes_clamped() {
        let options = AnnotateOptions::plain().with_max_ruby_passes(0);
        assert_eq!(options.max_ruby_passes, 1);
        assert_eq!(
            annotate("漢字(かんじ)", &options),
            "<ruby>漢字<rt>かんじ</rt></ruby>"
        );
    }

    #[test]
    fn test_empty_rules_skip_emphasis() {
        let options = AnnotateOptions::plain().with_korean_rules(Vec::new());
        assert_eq!(annotate("👉 안녕", &options), "👉 안녕");
    }
}
