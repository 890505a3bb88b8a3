//! Structural text patterns used as classifier signals.

use std::sync::LazyLock;

use regex::Regex;

use crate::fingerprint::SEPARATOR_RUN;

/// Consecutive repeats of one word that suggest generated text.
const REPEATED_WORD_RUN: usize = 3;

/// `!!`, `??`, or five ASCII uppercase letters in a row.
static EMOTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!{2,}|\?{2,}|[A-Z]{5,}").expect("emotional pattern is valid")
});

/// ASCII-only case folding, matching a plain lower-cased comparison.
static SOURCE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)https?://").expect("source pattern is valid"));

/// ASCII `[A-Za-z0-9_]` word runs.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\w+)").expect("word pattern is valid"));

/// `http://` or `https://` anywhere in the content, in any letter case.
pub(super) fn has_proper_sources(content: &str) -> bool {
    SOURCE_LINK.is_match(content)
}

pub(super) fn has_emotional_language(content: &str) -> bool {
    EMOTIONAL.is_match(content)
}

/// The same word token three or more times in a row, separated only by
/// whitespace, compared case-insensitively.
///
/// Tokens are compared whole, so `the the theory` is not a run.
pub(super) fn has_repeated_word_run(content: &str) -> bool {
    let mut previous: Option<&str> = None;
    let mut last_end = 0usize;
    let mut run = 0usize;

    // No backreferences in `regex`, so the run itself is tracked here
    for word in WORD.find_iter(content) {
        let gap = &content[last_end..word.start()];
        let continues = previous
            .is_some_and(|prev| is_separator_run(gap) && prev.eq_ignore_ascii_case(word.as_str()));
        run = if continues { run + 1 } else { 1 };
        if run >= REPEATED_WORD_RUN {
            return true;
        }
        previous = Some(word.as_str());
        last_end = word.end();
    }

    false
}

fn is_separator_run(gap: &str) -> bool {
    SEPARATOR_RUN
        .find(gap)
        .is_some_and(|m| m.start() == 0 && m.end() == gap.len())
}
