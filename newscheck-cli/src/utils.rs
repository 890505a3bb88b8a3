//! Common utility functions shared across CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use newscheck_core::VerifiedArticleRecord;
use tracing::debug;

/// Read the content to check from a file, or from stdin when `path` is
/// `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            debug!(path = %path.display(), bytes = content.len(), "Read input file");
            Ok(content)
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            debug!(bytes = content.len(), "Read stdin");
            Ok(content)
        }
    }
}

/// Load a JSON array of verified-article records.
pub fn load_articles(path: &Path) -> Result<Vec<VerifiedArticleRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles file: {}", path.display()))?;
    let records: Vec<VerifiedArticleRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse articles file: {}", path.display()))?;
    debug!(path = %path.display(), count = records.len(), "Loaded verified articles");
    Ok(records)
}

/// Render a confidence in [0, 1] as a whole percentage.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}
