use super::tts_repository::TtsRepository;
use crate::domain::tts::SynthesizedAudio;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

const VENDOR: &str = "Speechify";

const DEFAULT_VOICE_ID: &str = "george";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    input: &'a str,
    voice_id: &'a str,
    audio_format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    audio_data: String,
    #[serde(default)]
    audio_format: Option<String>,
    #[serde(default)]
    billable_characters_count: Option<u64>,
}

/// Speechify text-to-speech; audio comes back base64 encoded inside JSON
pub struct SpeechifyTtsRepository {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SpeechifyTtsRepository {
    pub fn new(http_client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Speechify takes BCP-47 tags for its multilingual voices
    fn locale_for_language(language: &str) -> Option<&'static str> {
        match language {
            "en" => Some("en-US"),
            "es" => Some("es-ES"),
            "fr" => Some("fr-FR"),
            "de" => Some("de-DE"),
            "it" => Some("it-IT"),
            "pt" => Some("pt-BR"),
            "nl" => Some("nl-NL"),
            "pl" => Some("pl-PL"),
            "ru" => Some("ru-RU"),
            "ja" => Some("ja-JP"),
            "ko" => Some("ko-KR"),
            "zh" => Some("zh-CN"),
            "hi" => Some("hi-IN"),
            "ar" => Some("ar-AE"),
            "sv" => Some("sv-SE"),
            "da" => Some("da-DK"),
            "fi" => Some("fi-FI"),
            "el" => Some("el-GR"),
            "he" => Some("he-IL"),
            "tr" => Some("tr-TR"),
            "uk" => Some("uk-UA"),
            "vi" => Some("vi-VN"),
            "no" => Some("nb-NO"),
            _ => None,
        }
    }
}

#[async_trait]
impl TtsRepository for SpeechifyTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        voice_id: Option<&str>,
    ) -> AppResult<SynthesizedAudio> {
        let start_time = std::time::Instant::now();
        let voice_id = voice_id.unwrap_or(DEFAULT_VOICE_ID);

        let response = self
            .http_client
            .post(format!("{}/v1/audio/speech", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&SpeechRequest {
                input: text,
                voice_id,
                audio_format: "mp3",
                language: Self::locale_for_language(language),
            })
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::vendor(VENDOR, status.as_u16(), &body));
        }

        let speech: SpeechResponse = response.json().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse Speechify response: {}", e))
        })?;

        let bytes = STANDARD.decode(speech.audio_data.trim()).map_err(|e| AppError::Vendor {
            vendor: VENDOR,
            status: status.as_u16(),
            message: format!("invalid base64 audio: {}", e),
        })?;

        tracing::info!(
            provider = "speechify",
            voice_id = voice_id,
            language = language,
            latency_ms = start_time.elapsed().as_millis(),
            billable_characters = ?speech.billable_characters_count,
            audio_size_bytes = bytes.len(),
            "TTS synthesis completed"
        );

        let content_type = match speech.audio_format.as_deref() {
            Some("wav") => "audio/wav",
            Some("ogg") => "audio/ogg",
            Some("aac") => "audio/aac",
            _ => "audio/mpeg",
        };

        Ok(SynthesizedAudio {
            bytes,
            content_type: content_type.to_string(),
            voice_id: voice_id.to_string(),
        })
    }

    fn provider(&self) -> &'static str {
        "speechify"
    }
}
