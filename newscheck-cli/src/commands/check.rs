//! Check command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use newscheck_core::{
    ContentSubmission, ContentType, Locale, MemoryStore, VerdictResponse, VerificationEngine,
    VerificationResult,
};
use tracing::{debug, info};

use crate::exit_codes::ExitCode;
use crate::utils::{format_confidence, load_articles, read_input};

/// Options for the check command.
pub struct CheckArgs {
    pub file: Option<PathBuf>,
    pub content_type: ContentType,
    pub articles: Option<PathBuf>,
    pub locale: Locale,
    pub json: bool,
}

/// Execute the check command.
pub async fn execute(args: CheckArgs) -> Result<ExitCode> {
    let content = read_input(args.file.as_deref())?;

    let store = match &args.articles {
        Some(path) => MemoryStore::with_articles(load_articles(path)?),
        None => MemoryStore::new(),
    };
    debug!(articles = store.article_count(), "Prepared in-memory store");

    let engine = VerificationEngine::new(Arc::new(store));
    let submission = ContentSubmission::new(args.content_type, content);
    let verified = engine
        .verify(&submission)
        .await
        .context("Verification failed")?;

    let fingerprint = verified.fingerprint.clone();
    let response = VerdictResponse::from(verified);
    info!(
        result = %response.result,
        classification = %response.classification,
        "Checked content"
    );

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&response).context("Failed to serialize verdict")?;
        println!("{rendered}");
    } else {
        print_report(&response, fingerprint.short(), args.locale);
    }

    Ok(ExitCode::from_result(response.result))
}

fn banner(result: VerificationResult) -> (ColoredString, ColoredString, ColoredString) {
    let top = "╔════════════════════════════════════════╗";
    let bottom = "╚════════════════════════════════════════╝";
    match result {
        VerificationResult::Authentic => (
            top.green(),
            "║              AUTHENTIC                 ║".green().bold(),
            bottom.green(),
        ),
        VerificationResult::Fake => (
            top.red(),
            "║                FAKE                    ║".red().bold(),
            bottom.red(),
        ),
        VerificationResult::Uncertain => (
            top.yellow(),
            "║              UNCERTAIN                 ║".yellow().bold(),
            bottom.yellow(),
        ),
    }
}

fn print_report(response: &VerdictResponse, fingerprint: &str, locale: Locale) {
    let (top, middle, bottom) = banner(response.result);
    println!();
    println!("{top}");
    println!("{middle}");
    println!("{bottom}");
    println!();
    println!(
        "   {} {}",
        "Classification:".dimmed(),
        response.classification
    );
    println!(
        "   {} {}",
        "Confidence:".dimmed(),
        format_confidence(response.confidence)
    );
    println!("   {} {}", "Fingerprint:".dimmed(), fingerprint);

    let details = &response.details;
    if let Some(title) = details.title(locale) {
        println!("   {} {}", "Article:".dimmed(), title.bold());
    }
    if let Some(source) = details.source_name(locale) {
        println!("   {} {}", "Source:".dimmed(), source);
    }
    if let Some(date) = &details.published_date {
        println!("   {} {}", "Published:".dimmed(), date);
    }
    if let Some(url) = &details.original_url {
        println!("   {} {}", "URL:".dimmed(), url.underline());
    }
    if let Some(analysis) = details.analysis(locale) {
        println!();
        println!("   {analysis}");
    }
}
