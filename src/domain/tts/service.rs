use super::error::TtsServiceError;
use super::text::clean_text;
use super::TtsResponse;
use crate::domain::language::{self, LanguageDetection};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Language used when the request names none
const DEFAULT_LANGUAGE: &str = "en";

/// Anything shorter is a vendor error message rather than playable audio
const MIN_AUDIO_BYTES: usize = 100;

pub struct TtsService {
    tts_repo: Option<Arc<dyn TtsRepository>>,
    language_detection: LanguageDetection,
    max_chars: usize,
    cache: Option<Cache<String, TtsResponse>>,
}

impl TtsService {
    pub fn new(
        tts_repo: Option<Arc<dyn TtsRepository>>,
        max_chars: usize,
        cache_enabled: bool,
    ) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(100)
                    .time_to_idle(Duration::from_secs(30 * 60)) // 30 minutes, refreshes on access
                    .build(),
            )
        } else {
            None
        };

        Self {
            tts_repo,
            language_detection: LanguageDetection::new(DEFAULT_LANGUAGE),
            max_chars,
            cache,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize speech with the configured vendor
    ///
    /// This operation:
    /// - Cleans the text and enforces the length limit
    /// - Resolves the language (`auto` is detected locally)
    /// - Calls the vendor and base64 encodes the returned audio
    async fn synthesize(
        &self,
        text: String,
        language: Option<String>,
        voice_id: Option<String>,
    ) -> Result<TtsResponse, TtsServiceError>;

    fn is_configured(&self) -> bool;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: String,
        language: Option<String>,
        voice_id: Option<String>,
    ) -> Result<TtsResponse, TtsServiceError> {
        let cleaned_text = clean_text(&text);
        if cleaned_text.is_empty() {
            return Err(TtsServiceError::Invalid("No text provided".to_string()));
        }

        let char_count = cleaned_text.chars().count();
        if char_count > self.max_chars {
            return Err(TtsServiceError::TooLarge(format!(
                "Text must be {} characters or less",
                self.max_chars
            )));
        }

        let language = self.resolve_language(language.as_deref(), &cleaned_text)?;

        let tts_repo = self
            .tts_repo
            .as_ref()
            .ok_or(TtsServiceError::NotConfigured)?;

        let voice_id = voice_id.filter(|v| !v.trim().is_empty());
        let cache_key = format!(
            "{}:{}:{}:{}",
            tts_repo.provider(),
            voice_id.as_deref().unwrap_or("default"),
            language,
            cleaned_text
        );

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&cache_key).await {
                tracing::info!(
                    provider = tts_repo.provider(),
                    language = %language,
                    "TTS cache hit - returning cached audio"
                );
                return Ok(cached);
            }
        }

        tracing::info!(
            provider = tts_repo.provider(),
            language = %language,
            voice_id = ?voice_id,
            text_length = char_count,
            "TTS synthesis request"
        );

        let audio = tts_repo
            .synthesize(&cleaned_text, &language, voice_id.as_deref())
            .await?;

        if audio.bytes.len() < MIN_AUDIO_BYTES {
            tracing::error!(
                provider = tts_repo.provider(),
                audio_size_bytes = audio.bytes.len(),
                "Vendor returned too little audio"
            );
            return Err(TtsServiceError::InvalidAudio(
                "Audio data too small - likely a vendor error response".to_string(),
            ));
        }

        let response = TtsResponse {
            audio_data: STANDARD.encode(&audio.bytes),
            content_type: audio.content_type,
            provider: tts_repo.provider().to_string(),
            voice_id: audio.voice_id,
            language,
        };

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, response.clone()).await;
        }

        Ok(response)
    }

    fn is_configured(&self) -> bool {
        self.tts_repo.is_some()
    }
}

impl TtsService {
    fn resolve_language(
        &self,
        requested: Option<&str>,
        text: &str,
    ) -> Result<String, TtsServiceError> {
        let code = match requested {
            None => DEFAULT_LANGUAGE.to_string(),
            Some(code) if language::is_auto(code) => {
                let detected = self.language_detection.detect_code(text);
                tracing::info!(language_detected = detected, "Language detected for TTS");
                detected.to_string()
            }
            Some(code) => language::normalize_code(code),
        };

        match language::find(&code) {
            Some(entry) if !entry.has_tts => Err(TtsServiceError::Invalid(format!(
                "Voice output is not supported for {}",
                entry.name
            ))),
            _ => Ok(code),
        }
    }
}
