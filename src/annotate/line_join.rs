//! Stage 1: fuse furigana that was pushed onto the line after its kanji.

use super::{KANA_CLASS, KANJI_CLASS};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// A kanji at the end of a line, then a parenthesized kana run opening the next line.
static RE_SPLIT_FURIGANA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"([{KANJI_CLASS}])\n[（(]([{KANA_CLASS}]+)[）)]"
    ))
    .unwrap()
});

/// Rejoins `思\n（おも）` into `思（おも）`.
///
/// The line break is dropped and the reading is re-emitted in full-width
/// parentheses whatever bracket style the input used. Text after the closing
/// parenthesis stays where it is.
pub fn join_split_furigana(input: &str) -> String {
    let joined = RE_SPLIT_FURIGANA.find_iter(input).count();
    if joined == 0 {
        return input.to_string();
    }

    debug!("line join: fused {} split furigana", joined);
    RE_SPLIT_FURIGANA
        .replace_all(input, "${1}（${2}）")
        .into_owned()
}
