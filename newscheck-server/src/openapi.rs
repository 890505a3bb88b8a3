//! OpenAPI documentation configuration
//!
//! Generates the OpenAPI 3.0 document served at `/api-docs/openapi.json`.

use newscheck_core::{Classification, ContentType, VerdictDetails, VerdictResponse, VerificationResult};
use utoipa::OpenApi;

use crate::handlers::{HealthResponse, ReadyResponse, VerifyRequest};

/// NewsCheck Verification API - OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NewsCheck - Verification API",
        version = "0.1.0",
        description = r#"
## News Content Verification API

Submit a piece of text, or an image/video as a `data:` URL, and receive a
verdict on whether it looks like genuine news.

### How It Works

1. The content is **fingerprinted** (SHA-256 of the lowercased,
   whitespace-collapsed text), so trivially reformatted copies match.
2. The fingerprint is looked up among **curated verified articles**. A match
   is reported as authentic with the article's bilingual title and source.
3. Otherwise a fixed-weight **lexical heuristic** scores the content for
   sensationalist vocabulary, emotional punctuation, missing sources and
   repetition.
4. Every request is **logged**; the response `id` identifies the log entry.

The positive result tag on the wire is the literal string `"true"`.
Analysis texts are provided in English and Tamil.
"#,
        license(name = "MIT OR Apache-2.0")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    tags(
        (name = "Verification", description = "Verify news content"),
        (name = "Health", description = "Service health and readiness endpoints")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::health::ready,
        crate::handlers::verify::verify_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ReadyResponse,
            VerifyRequest,
            VerdictResponse,
            VerdictDetails,
            VerificationResult,
            Classification,
            ContentType,
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_verify_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/verify-news"));
        assert!(doc.paths.paths.contains_key("/health"));

        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("VerdictResponse"));
        assert!(schemas.contains_key("VerifyRequest"));
    }
}
