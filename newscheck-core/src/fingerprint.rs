//! Canonical content fingerprints.
//!
//! A fingerprint is the lowercase hex SHA-256 digest of the normalized
//! content. Normalization folds case and collapses whitespace runs, so a
//! re-submission that only differs in formatting maps to the same key in
//! the verified-article store.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::FingerprintError;

/// Length of a hex-encoded fingerprint (256-bit digest).
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// Stable identifier of a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of raw content.
    pub fn of(content: &str) -> Self {
        let digest = Sha256::digest(normalize(content).as_bytes());
        Self(hex::encode(digest))
    }

    /// Parse a hex fingerprint produced elsewhere (curation tooling, the CLI).
    ///
    /// Accepts upper or lower case and stores the lowercase form.
    pub fn parse(text: &str) -> Result<Self, FingerprintError> {
        let text = text.trim();
        if text.len() != FINGERPRINT_HEX_LEN {
            return Err(FingerprintError::InvalidLength {
                expected: FINGERPRINT_HEX_LEN,
                actual: text.len(),
            });
        }
        if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FingerprintError::NotHex);
        }
        Ok(Self(text.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters, for log lines.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

/// Compute the fingerprint of raw content.
pub fn fingerprint(content: &str) -> Fingerprint {
    Fingerprint::of(content)
}

/// Whitespace as the browser client's regex engine sees it: Unicode
/// `White_Space` without NEL, plus the byte-order mark.
pub(crate) static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\x{FEFF}&&[^\x{85}]]+").expect("separator pattern is valid")
});

/// Lower-case the content, collapse whitespace runs to one space and trim.
pub fn normalize(content: &str) -> String {
    let lowered = content.to_lowercase();
    let collapsed = SEPARATOR_RUN.replace_all(&lowered, " ");
    // Every separator is now a plain space, so trimming spaces is exact
    collapsed.trim_matches(' ').to_string()
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = FingerprintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}
