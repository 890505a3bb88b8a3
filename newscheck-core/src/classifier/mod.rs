//! Fallback heuristic classifier.
//!
//! Scores content that has no verified-article match using fixed lexical
//! and structural signals. The scoring table is constant; there is no
//! training and no language-specific handling.
//!
//! # Decision rule
//!
//! With `total = fake_score + authentic_score` the pivot statistic is
//! `fake_ratio = fake_score / total` (or `0.5` when `total == 0`):
//!
//! | fake_ratio        | result      | confidence                         |
//! |-------------------|-------------|------------------------------------|
//! | `> 0.6`           | fake        | `0.65 + (ratio - 0.6) * 0.5`       |
//! | `< 0.4`           | authentic   | `0.65 + (0.4 - ratio) * 0.5`       |
//! | otherwise         | uncertain   | `0.5`                              |
//!
//! Confidence is capped at `0.95`. The empty string is pinned to fake,
//! man-made, at exactly [`EMPTY_CONTENT_CONFIDENCE`].

mod patterns;
mod signals;

pub use signals::{analyze, Signals};

use crate::verdict::{FakeOrigin, Verdict};

/// Fake-leaning phrases, matched against the lower-cased content.
pub const FAKE_PHRASES: &[&str] = &[
    "breaking",
    "shocking",
    "unbelievable",
    "urgent",
    "viral",
    "must see",
    "you won't believe",
];

/// Authentic-leaning phrases, matched against the lower-cased content.
pub const AUTHENTIC_PHRASES: &[&str] = &[
    "according to",
    "reported by",
    "official statement",
    "confirmed by",
    "study shows",
];

/// Added to the fake score when emotional language is present.
pub const EMOTIONAL_LANGUAGE_WEIGHT: u32 = 2;
/// Added to the fake score for short content.
pub const SHORT_CONTENT_WEIGHT: u32 = 1;
/// Added to the authentic score when a URL is present.
pub const PROPER_SOURCES_WEIGHT: u32 = 2;

/// Content with fewer characters than this counts as short and vague.
pub const SHORT_CONTENT_CHARS: usize = 100;

pub const FAKE_RATIO_THRESHOLD: f64 = 0.6;
pub const AUTHENTIC_RATIO_THRESHOLD: f64 = 0.4;
/// Ratio used when no signal fired at all.
pub const NEUTRAL_RATIO: f64 = 0.5;

pub const BASE_CONFIDENCE: f64 = 0.65;
pub const CONFIDENCE_SLOPE: f64 = 0.5;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const UNCERTAIN_CONFIDENCE: f64 = 0.5;
/// Confidence reported for an empty submission.
pub const EMPTY_CONTENT_CONFIDENCE: f64 = MAX_CONFIDENCE;

/// Classify raw content. Total over all strings, including the empty one.
pub fn classify(content: &str) -> Verdict {
    let signals = analyze(content);
    if content.is_empty() {
        return Verdict::FakeHeuristic {
            origin: FakeOrigin::ManMade,
            confidence: EMPTY_CONTENT_CONFIDENCE,
            signals,
        };
    }
    decide(signals)
}

/// Apply the decision rule to already computed signals.
pub fn decide(signals: Signals) -> Verdict {
    let ratio = signals.fake_ratio();

    if ratio > FAKE_RATIO_THRESHOLD {
        let origin = if signals.has_repetitive_pattern {
            FakeOrigin::AiGenerated
        } else {
            FakeOrigin::ManMade
        };
        let confidence = capped(BASE_CONFIDENCE + (ratio - FAKE_RATIO_THRESHOLD) * CONFIDENCE_SLOPE);
        Verdict::FakeHeuristic {
            origin,
            confidence,
            signals,
        }
    } else if ratio < AUTHENTIC_RATIO_THRESHOLD {
        let confidence =
            capped(BASE_CONFIDENCE + (AUTHENTIC_RATIO_THRESHOLD - ratio) * CONFIDENCE_SLOPE);
        Verdict::AuthenticHeuristic {
            confidence,
            signals,
        }
    } else {
        Verdict::UncertainHeuristic { signals }
    }
}

fn capped(confidence: f64) -> f64 {
    confidence.min(MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{Classification, VerificationResult};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_string_boundary() {
        let verdict = classify("");
        let signals = verdict.signals().unwrap();
        assert!(signals.is_short_and_vague);
        assert!(!signals.has_proper_sources);
        assert!(!signals.has_emotional_language);
        assert_eq!(signals.fake_score(), 1);
        assert_eq!(signals.authentic_score(), 0);
        assert!(approx(signals.fake_ratio(), 1.0));

        assert_eq!(verdict.result(), VerificationResult::Fake);
        assert_eq!(verdict.classification(), Classification::ManMade);
        assert_eq!(verdict.confidence(), 0.95);

        // The ratio rule alone would give 0.85 for the same signals
        let by_rule = decide(signals.clone());
        assert!(approx(by_rule.confidence(), 0.85));
        assert_eq!(by_rule.result(), VerificationResult::Fake);
    }

    #[test]
    fn test_whitespace_only_follows_ratio_rule() {
        let verdict = classify("   ");
        assert_eq!(verdict.result(), VerificationResult::Fake);
        assert!(approx(verdict.confidence(), 0.85));
    }

    #[test]
    fn test_sourced_statement_is_authentic() {
        let verdict = classify(
            "According to official statement, the event was confirmed by witnesses. https://example.com/report",
        );
        assert!(verdict.signals().unwrap().has_proper_sources);
        assert_eq!(verdict.result(), VerificationResult::Authentic);
        assert_eq!(verdict.result().as_str(), "true");
        assert_eq!(verdict.classification(), Classification::Authentic);
        assert!(verdict.confidence() > 0.65);
    }

    #[test]
    fn test_sensational_text_is_fake_man_made() {
        let verdict = classify("BREAKING!! You won't believe this SHOCKING viral story!!!");
        assert!(verdict.signals().unwrap().has_emotional_language);
        assert_eq!(verdict.result(), VerificationResult::Fake);
        assert_eq!(verdict.classification(), Classification::ManMade);
        assert!(verdict.confidence() >= 0.65);
    }

    #[test]
    fn test_repeated_words_are_ai_generated() {
        let verdict = classify("Urgent urgent URGENT: share now now now!!");
        assert_eq!(verdict.result(), VerificationResult::Fake);
        assert_eq!(verdict.classification(), Classification::AiGenerated);
    }

    #[test]
    fn test_repetition_does_not_matter_outside_fake_branch() {
        let text = format!(
            "Confirmed by the ministry, the the the report https://gov.example/report {}",
            "details ".repeat(10)
        );
        let verdict = classify(&text);
        assert!(verdict.signals().unwrap().has_repetitive_pattern);
        assert_eq!(verdict.classification(), Classification::Authentic);
    }

    #[test]
    fn test_no_signals_is_uncertain() {
        let text = "The committee met on Tuesday to review the annual maintenance schedule for the \
                    municipal water treatment facility and its pumping stations.";
        assert!(text.chars().count() >= SHORT_CONTENT_CHARS);

        let verdict = classify(text);
        let signals = verdict.signals().unwrap();
        assert_eq!(signals.fake_score() + signals.authentic_score(), 0);
        assert!(approx(signals.fake_ratio(), NEUTRAL_RATIO));
        assert_eq!(verdict.result(), VerificationResult::Uncertain);
        assert_eq!(verdict.classification(), Classification::Uncertain);
        assert_eq!(verdict.confidence(), 0.5);
    }

    #[test]
    fn test_ratio_boundaries_are_uncertain() {
        // fake 3 (vocab), authentic 2 (link): ratio exactly 0.6
        let text = format!(
            "breaking shocking urgent https://example.com {}",
            "x".repeat(SHORT_CONTENT_CHARS)
        );
        let verdict = classify(&text);
        assert!(approx(verdict.signals().unwrap().fake_ratio(), 0.6));
        assert_eq!(verdict.result(), VerificationResult::Uncertain);

        // fake 2, authentic 3: ratio exactly 0.4
        let text = format!(
            "breaking shocking, according to reports https://example.com {}",
            "x".repeat(SHORT_CONTENT_CHARS)
        );
        let verdict = classify(&text);
        assert!(approx(verdict.signals().unwrap().fake_ratio(), 0.4));
        assert_eq!(verdict.result(), VerificationResult::Uncertain);
    }

    #[test]
    fn test_confidence_formula() {
        // fake 4, authentic 2: ratio 2/3
        let text = format!(
            "breaking shocking unbelievable urgent https://example.com {}",
            "x".repeat(SHORT_CONTENT_CHARS)
        );
        let verdict = classify(&text);
        let expected = 0.65 + (2.0 / 3.0 - 0.6) * 0.5;
        assert!(approx(verdict.confidence(), expected));

        // authentic only: ratio 0
        let text = format!(
            "according to the agency https://example.com {}",
            "x".repeat(SHORT_CONTENT_CHARS)
        );
        let verdict = classify(&text);
        assert_eq!(verdict.result(), VerificationResult::Authentic);
        assert!(approx(verdict.confidence(), 0.85));
    }

    #[test]
    fn test_totality_over_odd_inputs() {
        let inputs = [
            String::new(),
            " ".to_string(),
            "!!!!".to_string(),
            "??".to_string(),
            "\u{0}\u{feff}".to_string(),
            "தமிழ் செய்தி".to_string(),
            "😀".repeat(200),
            "data:image/png;base64,".to_string() + &"A".repeat(4096),
            "word ".repeat(1000),
        ];
        for input in &inputs {
            let verdict = classify(input);
            let c = verdict.confidence();
            assert!((0.0..=MAX_CONFIDENCE).contains(&c), "confidence {c} out of range");
        }
    }

    #[test]
    fn test_monotonic_in_fake_vocabulary() {
        let base = format!(
            "The report was published today. https://example.com {}",
            "y".repeat(SHORT_CONTENT_CHARS)
        );
        let mut text = base.clone();
        let mut previous = classify(&text);

        for phrase in FAKE_PHRASES {
            text.push(' ');
            text.push_str(phrase);
            let next = classify(&text);

            let prev_signals = previous.signals().unwrap();
            let next_signals = next.signals().unwrap();
            assert!(next_signals.fake_score() >= prev_signals.fake_score());
            assert!(next_signals.fake_ratio() >= prev_signals.fake_ratio());
            if previous.result() == VerificationResult::Fake {
                assert_eq!(next.result(), VerificationResult::Fake);
            }
            previous = next;
        }
        assert_eq!(previous.result(), VerificationResult::Fake);
    }

    #[test]
    fn test_deterministic() {
        let text = "Shocking claims spread online, reported by several outlets.";
        assert_eq!(classify(text), classify(text));
    }
}
