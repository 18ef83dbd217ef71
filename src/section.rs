//! Sectionizer for study documents.
//!
//! A line-level state machine: header lines open a new typed section, every
//! other line goes into the section currently open. The title and subtitle
//! lines at the very top are dropped because the HTML template renders them.

use log::debug;
use serde::Serialize;

/// Story header; the whole trimmed line must match.
const STORY_MARKER: &str = "줄거리";
const SHADOWING_MARKERS: &[&str] = &["🎧", "しゃどーいんぐ"];
const FREETALK_MARKERS: &[&str] = &["💬フリートーク"];
/// Vocabulary header line.
pub(crate) const VOCABULARY_HEADER: &str = "📖 単語";
/// Vocabulary entry label; each entry line opens its own section.
const VOCABULARY_LABEL: &str = "단어";
const VOCABULARY_MARKERS: &[&str] = &[VOCABULARY_HEADER, VOCABULARY_LABEL];

/// Kind of a document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Lines before any header.
    #[default]
    Untyped,
    /// Plot summary.
    Story,
    /// Shadowing expressions.
    Shadowing,
    /// Free-talk prompts.
    FreeTalk,
    /// Vocabulary list.
    Vocabulary,
}

impl SectionKind {
    /// Returns the kind a header line opens, or `None` for a content line.
    pub fn from_header(line: &str) -> Option<SectionKind> {
        if line.trim() == STORY_MARKER {
            Some(SectionKind::Story)
        } else if SHADOWING_MARKERS.iter().any(|m| line.contains(m)) {
            Some(SectionKind::Shadowing)
        } else if FREETALK_MARKERS.iter().any(|m| line.contains(m)) {
            Some(SectionKind::FreeTalk)
        } else if VOCABULARY_MARKERS.iter().any(|m| line.contains(m)) {
            Some(SectionKind::Vocabulary)
        } else {
            None
        }
    }

    /// CSS class added next to `section-box`.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SectionKind::Untyped => None,
            SectionKind::Story => Some("story-section"),
            SectionKind::Shadowing => Some("shadowing-section"),
            SectionKind::FreeTalk => Some("freetalk-section"),
            SectionKind::Vocabulary => Some("vocabulary-section"),
        }
    }

    /// Heading shown above the section content.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            SectionKind::Untyped => None,
            SectionKind::Story => Some("📖 줄거리"),
            SectionKind::Shadowing => Some("🎧 しゃどーいんぐ表現"),
            SectionKind::FreeTalk => Some("💬 フリートーク"),
            SectionKind::Vocabulary => Some("📖 単語"),
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Untyped => write!(f, "untyped"),
            SectionKind::Story => write!(f, "story"),
            SectionKind::Shadowing => write!(f, "shadowing"),
            SectionKind::FreeTalk => write!(f, "freetalk"),
            SectionKind::Vocabulary => write!(f, "vocabulary"),
        }
    }
}

/// A contiguous typed block of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section kind
    pub kind: SectionKind,
    /// Source lines, header line first
    pub lines: Vec<String>,
}

impl Section {
    /// Creates a section from its lines.
    pub fn new(kind: SectionKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    /// Section text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// What a single line did to the sectionizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Title or subtitle line dropped from the preamble.
    Dropped,
    /// Line appended to the open section.
    Appended,
    /// Previous buffer flushed (if any) and a new section opened.
    Opened(SectionKind),
}

/// Line-by-line section builder.
#[derive(Debug)]
pub struct Sectionizer<'a> {
    preamble: &'a [&'a str],
    state: SectionKind,
    buffer: Vec<String>,
    sections: Vec<Section>,
}

impl<'a> Sectionizer<'a> {
    /// Creates a sectionizer that drops leading lines equal to one of `preamble`.
    pub fn new(preamble: &'a [&'a str]) -> Self {
        Self {
            preamble,
            state: SectionKind::Untyped,
            buffer: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Kind of the section currently being filled.
    pub fn state(&self) -> SectionKind {
        self.state
    }

    /// Sections emitted so far.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Feeds one line (without its line terminator).
    pub fn push_line(&mut self, line: &str) -> Transition {
        if self.in_preamble() && self.preamble.iter().any(|p| *p == line.trim()) {
            return Transition::Dropped;
        }

        match SectionKind::from_header(line) {
            Some(kind) => {
                self.open(kind);
                self.buffer.push(line.to_string());
                Transition::Opened(kind)
            }
            None => {
                self.buffer.push(line.to_string());
                Transition::Appended
            }
        }
    }

    /// Flushes the last buffer and returns all sections.
    pub fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }

    fn in_preamble(&self) -> bool {
        self.sections.is_empty() && self.buffer.is_empty()
    }

    fn open(&mut self, kind: SectionKind) {
        self.flush();
        self.state = kind;
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.buffer);
        self.sections.push(Section::new(self.state, lines));
    }
}

/// Splits a document into typed sections.
///
/// `preamble` holds the title and subtitle lines to drop from the top.
pub fn sectionize(text: &str, preamble: &[&str]) -> Vec<Section> {
    let mut sectionizer = Sectionizer::new(preamble);
    for line in text.lines() {
        sectionizer.push_line(line);
    }
    let sections = sectionizer.finish();
    debug!("sectionizer: {} sections", sections.len());
    sections
}
