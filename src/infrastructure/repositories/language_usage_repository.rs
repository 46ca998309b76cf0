use crate::domain::translation::LanguagePairUsage;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::Utc;
use std::sync::Arc;

pub struct LanguageUsageRepository {
    pool: Arc<DbPool>,
}

impl LanguageUsageRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Count one more translation for the pair
    pub async fn increment(&self, source_language: &str, target_language: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO language_usage (source_language, target_language, usage_count, last_used_at)
            VALUES ($1, $2, 1, $3)
            ON CONFLICT (source_language, target_language)
            DO UPDATE SET
                usage_count = language_usage.usage_count + 1,
                last_used_at = $3
            "#,
        )
        .bind(source_language)
        .bind(target_language)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Most used pairs first
    pub async fn top_pairs(&self, limit: i64) -> AppResult<Vec<LanguagePairUsage>> {
        let pool = self.pool.as_ref();
        let pairs = sqlx::query_as::<_, LanguagePairUsage>(
            r#"
            SELECT source_language, target_language, usage_count, last_used_at
            FROM language_usage
            ORDER BY usage_count DESC, last_used_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(pairs)
    }
}
