use crate::domain::translation::TranslationRecord;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct TranslationRepository {
    pool: Arc<DbPool>,
}

impl TranslationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &TranslationRecord) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO translations (id, user_id, source_language, target_language, source_text, translated_text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(&record.source_language)
        .bind(&record.target_language)
        .bind(&record.source_text)
        .bind(&record.translated_text)
        .bind(record.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TranslationRecord>> {
        let pool = self.pool.as_ref();
        let record = sqlx::query_as::<_, TranslationRecord>(
            r#"
            SELECT id, user_id, source_language, target_language, source_text, translated_text, created_at
            FROM translations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Newest first; `user_id = None` lists every caller's history
    pub async fn list_recent(
        &self,
        user_id: Option<Uuid>,
        limit: i64,
    ) -> AppResult<Vec<TranslationRecord>> {
        let pool = self.pool.as_ref();
        let records = sqlx::query_as::<_, TranslationRecord>(
            r#"
            SELECT id, user_id, source_language, target_language, source_text, translated_text, created_at
            FROM translations
            WHERE $1::uuid IS NULL OR user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM translations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
