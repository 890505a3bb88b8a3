use serde::Serialize;

use super::patterns::{has_emotional_language, has_proper_sources, has_repeated_word_run};
use super::{
    AUTHENTIC_PHRASES, EMOTIONAL_LANGUAGE_WEIGHT, FAKE_PHRASES, NEUTRAL_RATIO,
    PROPER_SOURCES_WEIGHT, SHORT_CONTENT_CHARS, SHORT_CONTENT_WEIGHT,
};

/// Every intermediate value the classifier derives from a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signals {
    /// Fake-leaning vocabulary phrases present in the content.
    pub fake_phrases: Vec<&'static str>,
    /// Authentic-leaning vocabulary phrases present in the content.
    pub authentic_phrases: Vec<&'static str>,
    pub has_proper_sources: bool,
    pub has_emotional_language: bool,
    pub is_short_and_vague: bool,
    /// A word repeated three or more times in a row.
    pub has_repetitive_pattern: bool,
}

impl Signals {
    pub fn fake_score(&self) -> u32 {
        let mut score = self.fake_phrases.len() as u32;
        if self.has_emotional_language {
            score += EMOTIONAL_LANGUAGE_WEIGHT;
        }
        if self.is_short_and_vague {
            score += SHORT_CONTENT_WEIGHT;
        }
        score
    }

    pub fn authentic_score(&self) -> u32 {
        let mut score = self.authentic_phrases.len() as u32;
        if self.has_proper_sources {
            score += PROPER_SOURCES_WEIGHT;
        }
        score
    }

    pub fn fake_ratio(&self) -> f64 {
        let fake = self.fake_score();
        let total = fake + self.authentic_score();
        if total == 0 {
            NEUTRAL_RATIO
        } else {
            f64::from(fake) / f64::from(total)
        }
    }
}

/// Compute the classifier signals for raw, non-normalized content.
pub fn analyze(content: &str) -> Signals {
    let lowered = content.to_lowercase();

    Signals {
        fake_phrases: phrases_present(&lowered, FAKE_PHRASES),
        authentic_phrases: phrases_present(&lowered, AUTHENTIC_PHRASES),
        has_proper_sources: has_proper_sources(content),
        has_emotional_language: has_emotional_language(content),
        is_short_and_vague: content.chars().count() < SHORT_CONTENT_CHARS,
        has_repetitive_pattern: has_repeated_word_run(content),
    }
}

fn phrases_present(lowered: &str, vocabulary: &[&'static str]) -> Vec<&'static str> {
    vocabulary
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect()
}
