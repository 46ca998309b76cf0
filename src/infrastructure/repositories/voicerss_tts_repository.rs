use super::tts_repository::TtsRepository;
use crate::domain::tts::text::split_into_batches;
use crate::domain::tts::SynthesizedAudio;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;

const VENDOR: &str = "VoiceRSS";

/// VoiceRSS rejects GET requests with very long `src` values
const MAX_BATCH_SIZE: usize = 1000;

const DEFAULT_VOICE: &str = "Alice";

/// VoiceRSS answers failures with HTTP 200 and a plain text body starting with this
const ERROR_PREFIX: &str = "ERROR";

/// VoiceRSS text-to-speech (GET with query parameters, MP3 body)
pub struct VoiceRssTtsRepository {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl VoiceRssTtsRepository {
    pub fn new(http_client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// VoiceRSS wants locale codes (`en-us`) rather than bare languages
    fn locale_for_language(language: &str) -> String {
        let locale = match language {
            "ar" => "ar-sa",
            "bg" => "bg-bg",
            "ca" => "ca-es",
            "cs" => "cs-cz",
            "da" => "da-dk",
            "de" => "de-de",
            "el" => "el-gr",
            "en" => "en-us",
            "es" => "es-es",
            "fi" => "fi-fi",
            "fr" => "fr-fr",
            "he" => "he-il",
            "hi" => "hi-in",
            "hr" => "hr-hr",
            "hu" => "hu-hu",
            "id" => "id-id",
            "it" => "it-it",
            "ja" => "ja-jp",
            "ko" => "ko-kr",
            "ms" => "ms-my",
            "nl" => "nl-nl",
            "no" => "nb-no",
            "pl" => "pl-pl",
            "pt" => "pt-br",
            "ro" => "ro-ro",
            "ru" => "ru-ru",
            "sk" => "sk-sk",
            "sl" => "sl-si",
            "sv" => "sv-se",
            "ta" => "ta-in",
            "th" => "th-th",
            "tr" => "tr-tr",
            "vi" => "vi-vn",
            "zh" => "zh-cn",
            other => return other.to_string(),
        };
        locale.to_string()
    }

    async fn call_voicerss(&self, text: &str, locale: &str, voice: &str) -> AppResult<Vec<u8>> {
        let response = self
            .http_client
            .get(format!("{}/", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("src", text),
                ("hl", locale),
                ("v", voice),
                ("f", "48khz_16bit_stereo"),
                ("c", "mp3"),
            ])
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        if !status.is_success() {
            return Err(AppError::vendor(
                VENDOR,
                status.as_u16(),
                &String::from_utf8_lossy(&body),
            ));
        }

        if body.starts_with(ERROR_PREFIX.as_bytes()) {
            let message = String::from_utf8_lossy(&body).to_string();
            tracing::error!(error = %message, locale = locale, "VoiceRSS rejected the request");
            return Err(AppError::vendor(VENDOR, status.as_u16(), &message));
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl TtsRepository for VoiceRssTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        voice_id: Option<&str>,
    ) -> AppResult<SynthesizedAudio> {
        let start_time = std::time::Instant::now();
        let locale = Self::locale_for_language(language);
        let voice = voice_id.unwrap_or(DEFAULT_VOICE);

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let audio = self.call_voicerss(batch, &locale, voice).await?;
            merged_audio.extend(audio);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        tracing::info!(
            provider = "voicerss",
            locale = %locale,
            voice = voice,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesizedAudio {
            bytes: merged_audio,
            content_type: "audio/mpeg".to_string(),
            voice_id: voice.to_string(),
        })
    }

    fn provider(&self) -> &'static str {
        "voicerss"
    }
}
