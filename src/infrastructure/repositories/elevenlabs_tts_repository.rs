use super::tts_repository::TtsRepository;
use crate::domain::tts::text::split_into_batches;
use crate::domain::tts::SynthesizedAudio;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::Serialize;

const VENDOR: &str = "ElevenLabs";

/// eleven_multilingual_v2 accepts up to 10,000 characters; stay well below
const MAX_BATCH_SIZE: usize = 5000;

/// "Rachel", available on every account
const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// ElevenLabs text-to-speech (JSON in, MP3 bytes out)
pub struct ElevenLabsTtsRepository {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_id: String,
}

impl ElevenLabsTtsRepository {
    pub fn new(
        http_client: reqwest::Client,
        api_key: String,
        base_url: String,
        model_id: String,
    ) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id,
        }
    }

    async fn call_elevenlabs(&self, text: &str, voice_id: &str) -> AppResult<Vec<u8>> {
        let response = self
            .http_client
            .post(format!(
                "{}/v1/text-to-speech/{}",
                self.base_url,
                urlencoding::encode(voice_id)
            ))
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&SpeechRequest {
                text,
                model_id: &self.model_id,
                voice_settings: VoiceSettings::default(),
            })
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                voice_id = voice_id,
                text_length = text.len(),
                "ElevenLabs TTS API call failed"
            );
            return Err(AppError::vendor(VENDOR, status.as_u16(), &body));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        voice_id: Option<&str>,
    ) -> AppResult<SynthesizedAudio> {
        let start_time = std::time::Instant::now();
        // multilingual model picks the language from the text itself
        let voice_id = voice_id.unwrap_or(DEFAULT_VOICE_ID);

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut merged_audio = Vec::new();
        for batch in &batches {
            merged_audio.extend(self.call_elevenlabs(batch, voice_id).await?);
        }

        tracing::info!(
            provider = "elevenlabs",
            model = %self.model_id,
            voice_id = voice_id,
            language = language,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesizedAudio {
            bytes: merged_audio,
            content_type: "audio/mpeg".to_string(),
            voice_id: voice_id.to_string(),
        })
    }

    fn provider(&self) -> &'static str {
        "elevenlabs"
    }
}
