//! Stage 3: Korean emphasis.
//!
//! Hangul spans are found purely by position: what precedes them on the line
//! decides whether they are a gloss worth highlighting. There is no language
//! detection and no dictionary.

use super::escape::{markup_spans, SpanKind};
use super::{BOLD_CLOSE, BOLD_OPEN, HANGUL_CLASS};
use log::{debug, trace};
use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use std::sync::LazyLock;

/// Contextual cue that marks a Hangul span as a gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KoreanRule {
    /// `단어：気になる 궁금하다` bolds the Hangul word after the vocabulary entry.
    Vocabulary,
    /// `主人公 — 주인공` bolds the Hangul words after the dash, up to the line end.
    EmDash,
    /// `👉 이 케이크 달아 보여요.` bolds the rest of the line.
    Pointer,
    /// A line made only of Hangul, spaces and `. , ! ?` is bolded whole.
    StandaloneLine,
}

impl KoreanRule {
    /// Rule order for a single-block document.
    pub const PLAIN: &'static [KoreanRule] = &[
        KoreanRule::Vocabulary,
        KoreanRule::EmDash,
        KoreanRule::Pointer,
    ];

    /// Rule order for a sectioned document.
    pub const SECTIONED: &'static [KoreanRule] = &[
        KoreanRule::Vocabulary,
        KoreanRule::Pointer,
        KoreanRule::StandaloneLine,
        KoreanRule::EmDash,
    ];

    /// The compiled pattern. The span to bold is the `word` group.
    fn regex(self) -> &'static Regex {
        match self {
            KoreanRule::Vocabulary => &RE_VOCABULARY,
            KoreanRule::EmDash => &RE_EM_DASH,
            KoreanRule::Pointer => &RE_POINTER,
            KoreanRule::StandaloneLine => &RE_STANDALONE_LINE,
        }
    }
}

static RE_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:단어|単語)[：:・]\S+\s+(?P<word>[{HANGUL_CLASS}]+)"
    ))
    .unwrap()
});

static RE_EM_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"—\s*(?P<word>[{h}]+(?:[^\S\n]+[{h}]+)*)",
        h = HANGUL_CLASS
    ))
    .unwrap()
});

static RE_POINTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"👉[^\S\n]*(?P<word>[{HANGUL_CLASS}][^\n]*)")).unwrap()
});

static RE_STANDALONE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^(?P<word>[{h}][{h}.,!?[^\S\n]]*)$",
        h = HANGUL_CLASS
    ))
    .unwrap()
});

/// Applies the rules in order, wrapping each matched span in
/// `<strong class="korean-bold">`.
///
/// Later rules see the output of earlier ones. A match is skipped when its
/// span overlaps a span that is already bold, when it would cut through a
/// `<ruby>` span, or when it contains a literal `</strong>`.
pub fn embolden_korean(input: &str, rules: &[KoreanRule]) -> String {
    let mut result = input.to_string();
    for &rule in rules {
        result = apply_rule(&result, rule);
    }
    result
}

fn apply_rule(input: &str, rule: KoreanRule) -> String {
    let protected = markup_spans(input);
    let mut output = String::with_capacity(input.len() + 64);
    let mut last = 0;
    let mut wrapped = 0;

    for caps in rule.regex().captures_iter(input) {
        let Some(word) = caps.name("word") else {
            continue;
        };

        if is_blocked(word.range(), word.as_str(), &protected) {
            trace!("{:?}: skipped span at {:?}", rule, word.range());
            continue;
        }

        output.push_str(&input[last..word.start()]);
        output.push_str(BOLD_OPEN);
        output.push_str(word.as_str());
        output.push_str(BOLD_CLOSE);
        last = word.end();
        wrapped += 1;
    }

    if wrapped == 0 {
        return input.to_string();
    }

    output.push_str(&input[last..]);
    debug!("korean: {:?} bolded {} spans", rule, wrapped);
    output
}

/// Checks a candidate span against the markup already in the text.
fn is_blocked(span: Range<usize>, text: &str, protected: &[(SpanKind, Range<usize>)]) -> bool {
    if text.contains(BOLD_CLOSE) {
        return true;
    }

    protected.iter().any(|(kind, existing)| {
        let overlaps = span.start < existing.end && existing.start < span.end;
        match kind {
            SpanKind::Bold => overlaps,
            SpanKind::Ruby => {
                let contains = span.start <= existing.start && existing.end <= span.end;
                overlaps && !contains
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(text: &str) -> String {
        format!("{}{}{}", BOLD_OPEN, text, BOLD_CLOSE)
    }

    #[test]
    fn test_vocabulary_rule() {
        let result = embolden_korean("단어：気になる 궁금하다", &[KoreanRule::Vocabulary]);
        assert_eq!(result, format!("단어：気になる {}", bold("궁금하다")));
    }

    #[test]
    fn test_vocabulary_rule_alternate_markers() {
        let result = embolden_korean("単語・頑張る 힘내다", &[KoreanRule::Vocabulary]);
        assert_eq!(result, format!("単語・頑張る {}", bold("힘내다")));

        let result = embolden_korean("단어:約束 약속", &[KoreanRule::Vocabulary]);
        assert_eq!(result, format!("단어:約束 {}", bold("약속")));
    }

    #[test]
    fn test_vocabulary_rule_needs_separator() {
        let input = "단어 気になる 궁금하다";
        assert_eq!(embolden_korean(input, &[KoreanRule::Vocabulary]), input);
    }

    #[test]
    fn test_em_dash_rule() {
        let result = embolden_korean("主人公 — 주인공", &[KoreanRule::EmDash]);
        assert_eq!(result, format!("主人公 — {}", bold("주인공")));
    }

    #[test]
    fn test_em_dash_rule_keeps_inner_spaces_and_stops_at_line_end() {
        let input = "気になる — 궁금하다 신경 쓰이다\n次の行 다음";
        let result = embolden_korean(input, &[KoreanRule::EmDash]);
        assert_eq!(
            result,
            format!("気になる — {}\n次の行 다음", bold("궁금하다 신경 쓰이다"))
        );
    }

    #[test]
    fn test_em_dash_rule_stops_at_non_korean() {
        let result = embolden_korean("—반가워 (nice)", &[KoreanRule::EmDash]);
        assert_eq!(result, format!("—{} (nice)", bold("반가워")));
    }

    #[test]
    fn test_pointer_rule() {
        let result = embolden_korean("👉 이 케이크 달아 보여요.", &[KoreanRule::Pointer]);
        assert_eq!(result, format!("👉 {}", bold("이 케이크 달아 보여요.")));
    }

    #[test]
    fn test_pointer_rule_requires_hangul_start() {
        let input = "👉 This cake looks sweet.";
        assert_eq!(embolden_korean(input, &[KoreanRule::Pointer]), input);
    }

    #[test]
    fn test_pointer_rule_stays_on_its_line() {
        let input = "👉\n다음 줄";
        assert_eq!(embolden_korean(input, &[KoreanRule::Pointer]), input);
    }

    #[test]
    fn test_pointer_rule_wraps_whole_ruby_span() {
        let input = "👉 오늘 <ruby>天気<rt>てんき</rt></ruby> 좋네요";
        let result = embolden_korean(input, &[KoreanRule::Pointer]);
        assert_eq!(
            result,
            format!("👉 {}", bold("오늘 <ruby>天気<rt>てんき</rt></ruby> 좋네요"))
        );
    }

    #[test]
    fn test_standalone_line_rule() {
        let input = "これは日本語です。\n정말 좋아요, 감사합니다!\n混ざった 줄";
        let result = embolden_korean(input, &[KoreanRule::StandaloneLine]);
        assert_eq!(
            result,
            format!(
                "これは日本語です。\n{}\n混ざった 줄",
                bold("정말 좋아요, 감사합니다!")
            )
        );
    }

    #[test]
    fn test_standalone_lines_bold_separately() {
        let result = embolden_korean("첫째 줄\n둘째 줄", &[KoreanRule::StandaloneLine]);
        assert_eq!(result, format!("{}\n{}", bold("첫째 줄"), bold("둘째 줄")));
    }

    #[test]
    fn test_pointer_then_standalone_no_double_wrap() {
        let input = "👉 네\n안녕";
        let result = embolden_korean(input, KoreanRule::SECTIONED);
        assert_eq!(result, format!("👉 {}\n{}", bold("네"), bold("안녕")));
        assert_eq!(result.matches(BOLD_OPEN).count(), 2);
    }

    #[test]
    fn test_em_dash_inside_bold_span_skipped() {
        let input = "👉 안녕 — 친구";
        let result = embolden_korean(input, &[KoreanRule::Pointer, KoreanRule::EmDash]);
        assert_eq!(result, format!("👉 {}", bold("안녕 — 친구")));
        assert_eq!(result.matches(BOLD_OPEN).count(), 1);
    }

    #[test]
    fn test_rule_order_decides_overlap() {
        let input = "👉 안녕 — 친구";
        let dash_first = embolden_korean(input, &[KoreanRule::EmDash, KoreanRule::Pointer]);
        assert_eq!(dash_first, format!("👉 안녕 — {}", bold("친구")));
        assert_eq!(dash_first.matches(BOLD_OPEN).count(), 1);
    }

    #[test]
    fn test_stray_ruby_tag_does_not_protect_following_lines() {
        let ruby = "<ruby>漢字<rt>かんじ</rt></ruby>";
        let input = format!("<ruby>\n👉 안녕\n고마워\n{}", ruby);
        let result = embolden_korean(&input, KoreanRule::SECTIONED);
        assert_eq!(
            result,
            format!("<ruby>\n👉 {}\n{}\n{}", bold("안녕"), bold("고마워"), ruby)
        );
    }

    #[test]
    fn test_literal_close_tag_not_bolded() {
        let input = "👉 안녕 </strong> 하세요";
        assert_eq!(embolden_korean(input, &[KoreanRule::Pointer]), input);
    }

    #[test]
    fn test_no_rules_no_change() {
        let input = "👉 안녕";
        assert_eq!(embolden_korean(input, &[]), input);
    }
}
