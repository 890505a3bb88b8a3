#![no_main]

//! Fuzz target for fingerprint normalization
//!
//! Normalizing twice must not change the fingerprint, and the digest is
//! always 64 lowercase hex characters.
//!
//! Run with: cargo +nightly fuzz run fuzz_fingerprint

use libfuzzer_sys::fuzz_target;
use newscheck_core::fingerprint::{fingerprint, normalize};

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    let fp = fingerprint(&content);

    assert_eq!(fp.as_str().len(), 64);
    assert_eq!(fingerprint(&normalize(&content)), fp);
});
