use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of translation history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub translated_text: String,
    pub created_at: DateTime<Utc>,
}

/// Usage counter for a source/target language pair
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePairUsage {
    pub source_language: String,
    pub target_language: String,
    pub usage_count: i64,
    pub last_used_at: DateTime<Utc>,
}

/// What the translation vendor hands back
#[derive(Debug, Clone, PartialEq)]
pub struct VendorTranslation {
    pub translated_text: String,
    pub detected_source_language: Option<String>,
}
