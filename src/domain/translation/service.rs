use super::error::TranslationServiceError;
use super::events::TranslationEvents;
use super::model::{LanguagePairUsage, TranslationRecord};
use super::{HistoryQuery, TranslateRequest, TranslateResponse};
use crate::domain::language;
use crate::infrastructure::repositories::{
    LanguageUsageRepository, TranslateRepository, TranslationRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
pub const MAX_HISTORY_LIMIT: i64 = 200;

pub struct TranslationService {
    translate_repo: Option<Arc<dyn TranslateRepository>>,
    translation_repo: Arc<TranslationRepository>,
    usage_repo: Arc<LanguageUsageRepository>,
    events: TranslationEvents,
    max_chars: usize,
}

impl TranslationService {
    pub fn new(
        translate_repo: Option<Arc<dyn TranslateRepository>>,
        translation_repo: Arc<TranslationRepository>,
        usage_repo: Arc<LanguageUsageRepository>,
        events: TranslationEvents,
        max_chars: usize,
    ) -> Self {
        Self {
            translate_repo,
            translation_repo,
            usage_repo,
            events,
            max_chars,
        }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text and record it in the history.
    ///
    /// History and usage writes are best effort: a failing store is logged
    /// and the translation is still returned.
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, TranslationServiceError>;

    async fn history(
        &self,
        query: HistoryQuery,
    ) -> Result<Vec<TranslationRecord>, TranslationServiceError>;

    async fn get(&self, id: Uuid) -> Result<TranslationRecord, TranslationServiceError>;

    async fn delete(&self, id: Uuid) -> Result<(), TranslationServiceError>;

    async fn top_language_pairs(
        &self,
        limit: i64,
    ) -> Result<Vec<LanguagePairUsage>, TranslationServiceError>;

    fn events(&self) -> &TranslationEvents;

    fn is_configured(&self) -> bool;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, TranslationServiceError> {
        let source_text = request.source_text;
        let target_lang = request.target_lang.trim().to_string();

        if source_text.trim().is_empty() || target_lang.is_empty() {
            return Err(TranslationServiceError::Invalid(
                "Missing required fields".to_string(),
            ));
        }

        let char_count = source_text.chars().count();
        if char_count > self.max_chars {
            return Err(TranslationServiceError::TooLarge(format!(
                "Text must be {} characters or less",
                self.max_chars
            )));
        }

        let translate_repo = self
            .translate_repo
            .as_ref()
            .ok_or(TranslationServiceError::NotConfigured)?;

        let source_lang = request
            .source_lang
            .map(|s| s.trim().to_string())
            .filter(|s| !language::is_auto(s));

        tracing::info!(
            source = ?source_lang,
            target = %target_lang,
            user_id = ?request.user_id,
            text_length = char_count,
            "Translation request"
        );

        let result = translate_repo
            .translate(&source_text, source_lang.as_deref(), &target_lang)
            .await?;

        let detected_source_language = result
            .detected_source_language
            .or(source_lang)
            .unwrap_or_else(|| language::AUTO_DETECT.to_string());

        let record = TranslationRecord {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            source_language: detected_source_language.clone(),
            target_language: target_lang,
            source_text,
            translated_text: result.translated_text.clone(),
            created_at: Utc::now(),
        };

        self.record(record).await;

        Ok(TranslateResponse {
            translated_text: result.translated_text,
            detected_source_language,
        })
    }

    async fn history(
        &self,
        query: HistoryQuery,
    ) -> Result<Vec<TranslationRecord>, TranslationServiceError> {
        let limit = clamp_limit(query.limit, DEFAULT_HISTORY_LIMIT)?;
        let records = self
            .translation_repo
            .list_recent(query.user_id, limit)
            .await?;
        Ok(records)
    }

    async fn get(&self, id: Uuid) -> Result<TranslationRecord, TranslationServiceError> {
        self.translation_repo
            .find_by_id(id)
            .await?
            .ok_or(TranslationServiceError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TranslationServiceError> {
        if !self.translation_repo.delete(id).await? {
            return Err(TranslationServiceError::NotFound);
        }
        tracing::info!(translation_id = %id, "Translation deleted");
        Ok(())
    }

    async fn top_language_pairs(
        &self,
        limit: i64,
    ) -> Result<Vec<LanguagePairUsage>, TranslationServiceError> {
        let limit = clamp_limit(Some(limit), 10)?;
        Ok(self.usage_repo.top_pairs(limit).await?)
    }

    fn events(&self) -> &TranslationEvents {
        &self.events
    }

    fn is_configured(&self) -> bool {
        self.translate_repo.is_some()
    }
}

impl TranslationService {
    /// Persist, count and broadcast a finished translation
    async fn record(&self, record: TranslationRecord) {
        match self.translation_repo.insert(&record).await {
            Ok(()) => {
                let delivered = self.events.publish(record.clone());
                tracing::debug!(
                    translation_id = %record.id,
                    subscribers = delivered,
                    "Translation stored"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to store translation history");
            }
        }

        if let Err(e) = self
            .usage_repo
            .increment(&record.source_language, &record.target_language)
            .await
        {
            tracing::warn!(
                error = %e,
                source = %record.source_language,
                target = %record.target_language,
                "Failed to increment language usage"
            );
        }
    }
}

fn clamp_limit(limit: Option<i64>, default: i64) -> Result<i64, TranslationServiceError> {
    match limit {
        None => Ok(default),
        Some(limit) if limit < 1 => Err(TranslationServiceError::Invalid(
            "limit must be at least 1".to_string(),
        )),
        Some(limit) => Ok(limit.min(MAX_HISTORY_LIMIT)),
    }
}
