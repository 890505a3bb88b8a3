//! Example showing the engine's tracing output for a cache hit and a miss.
//!
//! Run with: cargo run -p newscheck-core --example engine_tracing

use std::sync::Arc;

use newscheck_core::{
    fingerprint, ContentSubmission, Locale, MemoryStore, VerificationEngine, VerifiedArticleRecord,
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::new("newscheck_core=debug,info"))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    println!("=== NewsCheck Engine Tracing Demo ===\n");

    let curated = "Chennai Metro phase two opens its first stretch to passengers on Friday.";
    let store = Arc::new(MemoryStore::with_articles([VerifiedArticleRecord {
        fingerprint: fingerprint(curated),
        title_en: "Metro phase two opens".into(),
        title_ta: "மெட்ரோ இரண்டாம் கட்டம் திறப்பு".into(),
        source_name_en: "The Hindu".into(),
        source_name_ta: "தி இந்து".into(),
        published_date: None,
        original_url: Some("https://example.com/metro".into()),
    }]));
    let engine = VerificationEngine::new(store);

    let inputs = [
        curated.to_uppercase(),
        "BREAKING!! You won't believe this SHOCKING viral story!!!".to_string(),
        "According to official statement, the event was confirmed by witnesses. https://example.com/report".to_string(),
    ];

    for input in inputs {
        match engine.verify(&ContentSubmission::text(input)).await {
            Ok(verified) => {
                println!(
                    "\n-> {} / {} ({:.2})",
                    verified.verdict.result(),
                    verified.verdict.classification(),
                    verified.verdict.confidence()
                );
                println!("   {}", verified.verdict.analysis(Locale::En));
            }
            Err(e) => eprintln!("Verification failed: {}", e),
        }
    }
}
