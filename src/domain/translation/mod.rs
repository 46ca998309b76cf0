pub mod error;
pub mod events;
pub mod model;
pub mod service;

pub use error::TranslationServiceError;
pub use events::TranslationEvents;
pub use model::{LanguagePairUsage, TranslationRecord, VendorTranslation};
pub use service::{TranslationService, TranslationServiceApi};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Response for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    pub detected_source_language: String,
}

/// Query for GET /api/translations
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub user_id: Option<Uuid>,
    pub limit: Option<i64>,
}
