//! Stage 4: escape guard.
//!
//! The working text is tokenized into typed segments by byte position.
//! Literal segments are HTML-escaped, markup segments are emitted as they
//! are. Two identical spans at different positions are two different
//! segments, so nothing can be restored into the wrong place.

use super::{BOLD_CLOSE, BOLD_OPEN, KANA_CLASS, KANJI_CLASS, RUBY_CLOSE, RUBY_OPEN};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Ruby and korean-bold spans, whichever starts first. A bold span swallows
/// any ruby span inside it.
///
/// A ruby span must have exactly the shape the ruby stage emits, so a stray
/// `<ruby>` tag in the source stays literal text.
static RE_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}(?s:.*?){}|{}[{KANJI_CLASS}]+<rt>[{KANA_CLASS}]+{}",
        regex::escape(BOLD_OPEN),
        regex::escape(BOLD_CLOSE),
        regex::escape(RUBY_OPEN),
        regex::escape(RUBY_CLOSE),
    ))
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpanKind {
    Ruby,
    Bold,
}

/// One piece of annotated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, escaped on output.
    Literal(&'a str),
    /// A complete `<ruby>…</rt></ruby>` span, emitted verbatim.
    Ruby(&'a str),
    /// The interior of a `<strong class="korean-bold">` span.
    Bold(&'a str),
}

/// Top-level markup spans in document order.
pub(crate) fn markup_spans(text: &str) -> Vec<(SpanKind, Range<usize>)> {
    RE_MARKUP
        .find_iter(text)
        .map(|m| {
            let kind = if m.as_str().starts_with(BOLD_OPEN) {
                SpanKind::Bold
            } else {
                SpanKind::Ruby
            };
            (kind, m.range())
        })
        .collect()
}

/// Splits annotated text into literal and markup segments.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut last = 0;

    for (kind, range) in markup_spans(text) {
        if range.start > last {
            result.push(Segment::Literal(&text[last..range.start]));
        }

        let span = &text[range.clone()];
        result.push(match kind {
            SpanKind::Ruby => Segment::Ruby(span),
            SpanKind::Bold => Segment::Bold(&span[BOLD_OPEN.len()..span.len() - BOLD_CLOSE.len()]),
        });
        last = range.end;
    }

    if last < text.len() {
        result.push(Segment::Literal(&text[last..]));
    }

    result
}

/// HTML-escapes literal text while keeping ruby and korean-bold markup intact.
///
/// Text inside a bold span is guarded recursively: nested ruby stays verbatim,
/// everything else is escaped.
pub fn guard(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / 8);
    push_guarded(text, &mut output);
    output
}

fn push_guarded(text: &str, output: &mut String) {
    for segment in segments(text) {
        match segment {
            Segment::Literal(s) => push_escaped(s, output),
            Segment::Ruby(s) => output.push_str(s),
            Segment::Bold(inner) => {
                output.push_str(BOLD_OPEN);
                push_guarded(inner, output);
                output.push_str(BOLD_CLOSE);
            }
        }
    }
}

/// Escapes `& < > " '` for HTML text and attribute values.
pub fn html_escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    push_escaped(text, &mut output);
    output
}

fn push_escaped(text: &str, output: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
}
