//! Verification verdicts.
//!
//! Internally a verdict is a closed union over the paths that can produce
//! it. Each variant carries only what that path knows. The uniform wire
//! shape ([`VerdictResponse`]) is derived at the boundary.

mod templates;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::Signals;
use crate::fingerprint::Fingerprint;
use crate::store::VerifiedArticleRecord;

/// Confidence attached to every cache hit.
pub const CACHED_CONFIDENCE: f64 = 0.95;

/// Top-level outcome. The positive case is tagged `"true"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum VerificationResult {
    #[serde(rename = "true")]
    Authentic,
    #[serde(rename = "fake")]
    Fake,
    #[serde(rename = "uncertain")]
    Uncertain,
}

impl VerificationResult {
    /// Wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentic => "true",
            Self::Fake => "fake",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    ManMade,
    AiGenerated,
    Authentic,
    Uncertain,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManMade => "man_made",
            Self::AiGenerated => "ai_generated",
            Self::Authentic => "authentic",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suspected origin of content classified as fake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeOrigin {
    ManMade,
    AiGenerated,
}

impl From<FakeOrigin> for Classification {
    fn from(origin: FakeOrigin) -> Self {
        match origin {
            FakeOrigin::ManMade => Self::ManMade,
            FakeOrigin::AiGenerated => Self::AiGenerated,
        }
    }
}

/// Display locale for explanation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ta,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ta];
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ta" => Ok(Self::Ta),
            other => Err(format!("unsupported locale '{other}' (expected en or ta)")),
        }
    }
}

/// The engine's decision for one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Exact fingerprint match against a curated article.
    AuthenticFromCache { record: VerifiedArticleRecord },
    FakeHeuristic {
        origin: FakeOrigin,
        confidence: f64,
        signals: Signals,
    },
    AuthenticHeuristic { confidence: f64, signals: Signals },
    UncertainHeuristic { signals: Signals },
}

impl Verdict {
    pub fn from_cache(record: VerifiedArticleRecord) -> Self {
        Self::AuthenticFromCache { record }
    }

    pub fn result(&self) -> VerificationResult {
        match self {
            Self::AuthenticFromCache { .. } | Self::AuthenticHeuristic { .. } => {
                VerificationResult::Authentic
            }
            Self::FakeHeuristic { .. } => VerificationResult::Fake,
            Self::UncertainHeuristic { .. } => VerificationResult::Uncertain,
        }
    }

    pub fn classification(&self) -> Classification {
        match self {
            Self::AuthenticFromCache { .. } | Self::AuthenticHeuristic { .. } => {
                Classification::Authentic
            }
            Self::FakeHeuristic { origin, .. } => (*origin).into(),
            Self::UncertainHeuristic { .. } => Classification::Uncertain,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::AuthenticFromCache { .. } => CACHED_CONFIDENCE,
            Self::FakeHeuristic { confidence, .. } | Self::AuthenticHeuristic { confidence, .. } => {
                *confidence
            }
            Self::UncertainHeuristic { .. } => crate::classifier::UNCERTAIN_CONFIDENCE,
        }
    }

    /// Heuristic signals, absent for cache hits.
    pub fn signals(&self) -> Option<&Signals> {
        match self {
            Self::AuthenticFromCache { .. } => None,
            Self::FakeHeuristic { signals, .. }
            | Self::AuthenticHeuristic { signals, .. }
            | Self::UncertainHeuristic { signals } => Some(signals),
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, Self::AuthenticFromCache { .. })
    }

    /// Explanation text in one locale.
    pub fn analysis(&self, locale: Locale) -> String {
        templates::analysis(self, locale)
    }

    /// Per-locale detail fields, both locales populated.
    pub fn details(&self) -> VerdictDetails {
        let mut details = VerdictDetails {
            analysis_en: Some(self.analysis(Locale::En)),
            analysis_ta: Some(self.analysis(Locale::Ta)),
            ..VerdictDetails::default()
        };

        if let Self::AuthenticFromCache { record } = self {
            details.title_en = Some(record.title_en.clone());
            details.title_ta = Some(record.title_ta.clone());
            details.source_name_en = Some(record.source_name_en.clone());
            details.source_name_ta = Some(record.source_name_ta.clone());
            details.published_date = record
                .published_date
                .map(|d| d.format("%Y-%m-%d").to_string());
            details.original_url = record.original_url.clone();
        }

        details
    }
}

/// Detail fields of the wire verdict. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerdictDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name_ta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_ta: Option<String>,
}

impl VerdictDetails {
    pub fn title(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.title_en.as_deref(),
            Locale::Ta => self.title_ta.as_deref(),
        }
    }

    pub fn source_name(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.source_name_en.as_deref(),
            Locale::Ta => self.source_name_ta.as_deref(),
        }
    }

    pub fn analysis(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.analysis_en.as_deref(),
            Locale::Ta => self.analysis_ta.as_deref(),
        }
    }
}

/// A verdict after the request has been logged.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedVerdict {
    /// Log entry identifier; `None` when the log append failed.
    pub id: Option<Uuid>,
    pub fingerprint: Fingerprint,
    pub verdict: Verdict,
}

/// Uniform response shape consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerdictResponse {
    /// Request log identifier, null when the request could not be logged
    #[cfg_attr(feature = "openapi", schema(example = "550e8400-e29b-41d4-a716-446655440000"))]
    pub id: Option<String>,
    pub result: VerificationResult,
    pub classification: Classification,
    /// Confidence between 0.0 and 0.95
    #[cfg_attr(feature = "openapi", schema(example = 0.85))]
    pub confidence: f64,
    pub details: VerdictDetails,
}

impl From<&VerifiedVerdict> for VerdictResponse {
    fn from(v: &VerifiedVerdict) -> Self {
        Self {
            id: v.id.map(|id| id.to_string()),
            result: v.verdict.result(),
            classification: v.verdict.classification(),
            confidence: v.verdict.confidence(),
            details: v.verdict.details(),
        }
    }
}

impl From<VerifiedVerdict> for VerdictResponse {
    fn from(v: VerifiedVerdict) -> Self {
        Self::from(&v)
    }
}
