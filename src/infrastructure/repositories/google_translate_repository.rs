use super::translate_repository::TranslateRepository;
use crate::domain::translation::VendorTranslation;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const VENDOR: &str = "Google Translate";

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateEnvelope {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
    detected_source_language: Option<String>,
}

/// Google Cloud Translation (v2, API key auth)
pub struct GoogleTranslateRepository {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleTranslateRepository {
    pub fn new(http_client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TranslateRepository for GoogleTranslateRepository {
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> AppResult<VendorTranslation> {
        let start_time = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/language/translate/v2", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&TranslateBody {
                q: text,
                target,
                source,
                format: "text",
            })
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                target = target,
                "Google Translate request failed"
            );
            return Err(AppError::vendor(VENDOR, status.as_u16(), &body));
        }

        let envelope: TranslateEnvelope = response.json().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse Google Translate response: {}", e))
        })?;

        let translation = envelope
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::Internal("Google Translate returned no translations".to_string())
            })?;

        tracing::info!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.chars().count(),
            detected = ?translation.detected_source_language,
            "Translation completed"
        );

        Ok(VendorTranslation {
            translated_text: translation.translated_text,
            detected_source_language: translation.detected_source_language,
        })
    }
}
