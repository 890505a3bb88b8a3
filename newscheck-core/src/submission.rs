//! Content submitted for verification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::fingerprint::Fingerprint;

/// Kind of content being verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Video,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    pub fn is_media(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(EngineError::MalformedSubmission(format!(
                "unknown content type '{other}'"
            ))),
        }
    }
}

/// A `(contentType, content)` pair. For media the content is an opaque
/// data-URL string that the engine never decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSubmission {
    pub content_type: ContentType,
    pub content: String,
}

impl ContentSubmission {
    pub fn new(content_type: ContentType, content: impl Into<String>) -> Self {
        Self {
            content_type,
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ContentType::Text, content)
    }

    /// Build a submission from loosely typed request fields.
    ///
    /// Both fields are required. Empty content is valid.
    pub fn from_parts(
        content_type: Option<&str>,
        content: Option<String>,
    ) -> Result<Self, EngineError> {
        let content_type = content_type
            .ok_or_else(|| EngineError::MalformedSubmission("missing contentType".into()))?
            .parse()?;
        let content =
            content.ok_or_else(|| EngineError::MalformedSubmission("missing content".into()))?;
        Ok(Self::new(content_type, content))
    }

    /// MIME type declared in a `data:` URL header, if any.
    pub fn declared_mime(&self) -> Option<&str> {
        let rest = self.content.strip_prefix("data:")?;
        let header_end = rest.find(',')?;
        let mime = rest[..header_end].split(';').next()?.trim();
        if mime.is_empty() || !mime.contains('/') {
            None
        } else {
            Some(mime)
        }
    }

    /// Compact reference stored in the request log instead of a media blob.
    pub fn media_reference(&self, fingerprint: &Fingerprint) -> String {
        match self.declared_mime() {
            Some(mime) => format!("{mime};sha256={fingerprint}"),
            None => format!("sha256={fingerprint}"),
        }
    }
}
