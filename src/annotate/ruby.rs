//! Stage 2: ruby wrapping.

use super::{KANA_CLASS, KANJI_CLASS};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Pass cap used by [`wrap_ruby`].
pub const DEFAULT_MAX_RUBY_PASSES: usize = 3;

/// A kanji run followed by a parenthesized kana run, either bracket style.
static RE_RUBY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"([{KANJI_CLASS}]+)[（(]([{KANA_CLASS}]+)[）)]"
    ))
    .unwrap()
});

const RUBY_REPLACEMENT: &str = "<ruby>${1}<rt>${2}</rt></ruby>";

/// Wraps every `漢字(かんじ)` pair in `<ruby>` markup.
pub fn wrap_ruby(input: &str) -> String {
    wrap_ruby_with_cap(input, DEFAULT_MAX_RUBY_PASSES)
}

/// Wraps ruby pairs, rescanning until a pass changes nothing or `max_passes`
/// passes have run.
///
/// Inserted markup contains no ideograph, so the interior of a `<ruby>` span
/// is never matched again and the result is idempotent. Pairs still unwrapped
/// when the cap is reached are left as literal text.
pub fn wrap_ruby_with_cap(input: &str, max_passes: usize) -> String {
    let mut current = input.to_string();
    let mut total = 0;

    for _ in 0..max_passes.max(1) {
        let found = RE_RUBY.find_iter(&current).count();
        if found == 0 {
            break;
        }
        total += found;
        current = RE_RUBY
            .replace_all(&current, RUBY_REPLACEMENT)
            .into_owned();
    }

    if total > 0 {
        debug!("ruby: wrapped {} kanji runs", total);
    }

    current
}
