//! PostgreSQL implementation of the verification store.

use async_trait::async_trait;
use chrono::NaiveDate;
use newscheck_core::{
    Fingerprint, NewLogEntry, StoreError, VerificationStore, VerifiedArticleRecord,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::PgStoreError;

/// PostgreSQL-backed verification store.
///
/// Reads `verified_articles` (joined with `trusted_sources`) and appends to
/// `verification_requests`.
#[derive(Clone)]
pub struct PostgresVerificationStore {
    pool: PgPool,
}

/// Row type for verified-article lookups.
#[derive(FromRow)]
struct ArticleRow {
    content_hash: String,
    title_en: String,
    title_ta: String,
    source_name_en: String,
    source_name_ta: String,
    published_date: Option<NaiveDate>,
    original_url: Option<String>,
}

impl TryFrom<ArticleRow> for VerifiedArticleRecord {
    type Error = PgStoreError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let fingerprint = Fingerprint::parse(&row.content_hash).map_err(|e| {
            PgStoreError::Serialization(format!(
                "verified_articles.content_hash '{}': {}",
                row.content_hash, e
            ))
        })?;

        Ok(Self {
            fingerprint,
            title_en: row.title_en,
            title_ta: row.title_ta,
            source_name_en: row.source_name_en,
            source_name_ta: row.source_name_ta,
            published_date: row.published_date,
            original_url: row.original_url,
        })
    }
}

impl PostgresVerificationStore {
    /// Connect to the database and run migrations.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PgStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect(database_url)
            .await
            .map_err(|e| PgStoreError::Connection(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| PgStoreError::Migration(e.to_string()))?;

        tracing::info!("Verification store connected and migrations applied");

        Ok(Self { pool })
    }

    async fn fetch_article(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<VerifiedArticleRecord>, PgStoreError> {
        // LIMIT 2 so a uniqueness violation can be detected without scanning
        let rows: Vec<ArticleRow> = sqlx::query_as(
            r#"
            SELECT a.content_hash,
                   a.title_en,
                   a.title_ta,
                   s.name_en AS source_name_en,
                   s.name_ta AS source_name_ta,
                   a.published_date,
                   a.original_url
            FROM verified_articles a
            JOIN trusted_sources s ON s.id = a.source_id
            WHERE a.content_hash = $1
            LIMIT 2
            "#,
        )
        .bind(fingerprint.as_str())
        .fetch_all(&self.pool)
        .await?;

        first_article(rows, fingerprint)
    }

    async fn insert_log_entry(&self, entry: &NewLogEntry) -> Result<Uuid, PgStoreError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO verification_requests (
                content_type, content_text, content_ref, content_fingerprint,
                verification_result, classification, confidence_score, details
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(entry.content_type.as_str())
        .bind(&entry.content_text)
        .bind(&entry.content_ref)
        .bind(entry.content_fingerprint.as_str())
        .bind(entry.result.as_str())
        .bind(entry.classification.as_str())
        .bind(entry.confidence)
        .bind(Json(&entry.details))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(%id, fingerprint = entry.content_fingerprint.short(), "Logged verification request");

        Ok(id)
    }
}

/// Pick the article for a lookup. More than one row means the unique index
/// on `content_hash` is missing; the first row wins and the fault is logged.
fn first_article(
    rows: Vec<ArticleRow>,
    fingerprint: &Fingerprint,
) -> Result<Option<VerifiedArticleRecord>, PgStoreError> {
    if rows.len() > 1 {
        tracing::warn!(
            fingerprint = fingerprint.short(),
            matches = rows.len(),
            "Multiple verified articles share one fingerprint; using the first"
        );
    }

    rows.into_iter()
        .next()
        .map(VerifiedArticleRecord::try_from)
        .transpose()
}

#[async_trait]
impl VerificationStore for PostgresVerificationStore {
    async fn lookup_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<VerifiedArticleRecord>, StoreError> {
        Ok(self.fetch_article(fingerprint).await?)
    }

    async fn append_log_entry(&self, entry: &NewLogEntry) -> Result<Uuid, StoreError> {
        Ok(self.insert_log_entry(entry).await?)
    }

    async fn check_health(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(PgStoreError::from)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(hash: &str) -> ArticleRow {
        ArticleRow {
            content_hash: hash.to_string(),
            title_en: "Title".into(),
            title_ta: "தலைப்பு".into(),
            source_name_en: "Source".into(),
            source_name_ta: "ஆதாரம்".into(),
            published_date: NaiveDate::from_ymd_opt(2025, 1, 2),
            original_url: None,
        }
    }

    #[test]
    fn test_row_conversion() {
        let fp = Fingerprint::of("article");
        let record = VerifiedArticleRecord::try_from(row(fp.as_str())).unwrap();
        assert_eq!(record.fingerprint, fp);
        assert_eq!(record.published_date, NaiveDate::from_ymd_opt(2025, 1, 2));
    }

    #[test]
    fn test_row_with_corrupt_hash_is_rejected() {
        let err = VerifiedArticleRecord::try_from(row("not-a-hash")).unwrap_err();
        assert!(matches!(err, PgStoreError::Serialization(_)));
    }

    #[test]
    fn test_duplicate_rows_take_the_first() {
        let fp = Fingerprint::of("article");
        let mut second = row(fp.as_str());
        second.title_en = "Second title".into();

        let record = first_article(vec![row(fp.as_str()), second], &fp)
            .unwrap()
            .unwrap();
        assert_eq!(record.title_en, "Title");
    }

    #[test]
    fn test_no_rows_is_a_miss() {
        let fp = Fingerprint::of("article");
        assert!(first_article(Vec::new(), &fp).unwrap().is_none());
    }
}
