//! Fingerprint command implementation.

use std::path::PathBuf;

use anyhow::Result;
use newscheck_core::Fingerprint;
use tracing::info;

use crate::exit_codes::ExitCode;
use crate::utils::read_input;

/// Print the canonical fingerprint of the input, as stored in
/// `verified_articles.content_hash`.
pub fn execute(file: Option<PathBuf>) -> Result<ExitCode> {
    let content = read_input(file.as_deref())?;
    let fingerprint = Fingerprint::of(&content);

    info!(fingerprint = fingerprint.short(), chars = content.chars().count(), "Fingerprinted input");
    println!("{fingerprint}");

    Ok(ExitCode::success())
}
