use crate::domain::tts::SynthesizedAudio;
use crate::error::AppResult;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS vendor (VoiceRSS, PlayAI, Speechify, ElevenLabs).
///
/// Implementations are responsible for:
/// - Handling vendor-specific text length limitations
/// - Mapping language codes and picking a default voice
/// - Waiting on asynchronous vendor jobs
/// - Returning raw audio bytes (the service does the base64 encoding)
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize cleaned `text` spoken in `language` (ISO 639-1).
    ///
    /// `voice_id` overrides the vendor's default voice for the language.
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        voice_id: Option<&str>,
    ) -> AppResult<SynthesizedAudio>;

    /// Short vendor name used in logs and responses
    fn provider(&self) -> &'static str;
}
