#![no_main]

//! Fuzz target for the heuristic classifier
//!
//! The classifier is total: every string yields a verdict with confidence
//! in [0, 0.95] and explanation text in both locales.
//!
//! Run with: cargo +nightly fuzz run fuzz_classify

use libfuzzer_sys::fuzz_target;
use newscheck_core::{classify, Locale};

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    let verdict = classify(&content);

    let confidence = verdict.confidence();
    assert!((0.0..=0.95).contains(&confidence));
    for locale in Locale::ALL {
        assert!(!verdict.analysis(locale).is_empty());
    }
});
