use super::error::SttServiceError;
use super::TranscriptionResponse;
use crate::domain::language;
use crate::infrastructure::repositories::SttRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// AssemblyAI needs a concrete language; `auto` falls back to English
const FALLBACK_LANGUAGE: &str = "en";

pub struct SttService {
    stt_repo: Option<Arc<dyn SttRepository>>,
}

impl SttService {
    pub fn new(stt_repo: Option<Arc<dyn SttRepository>>) -> Self {
        Self { stt_repo }
    }
}

#[async_trait]
pub trait SttServiceApi: Send + Sync {
    /// Transcribe recorded audio.
    ///
    /// `language` may be absent or `auto`; both resolve to English.
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        language: Option<String>,
    ) -> Result<TranscriptionResponse, SttServiceError>;

    fn is_configured(&self) -> bool;
}

#[async_trait]
impl SttServiceApi for SttService {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        language: Option<String>,
    ) -> Result<TranscriptionResponse, SttServiceError> {
        if audio.is_empty() {
            return Err(SttServiceError::Invalid(
                "No audio file provided".to_string(),
            ));
        }

        let stt_repo = self
            .stt_repo
            .as_ref()
            .ok_or(SttServiceError::NotConfigured)?;

        let language = resolve_language(language.as_deref());

        tracing::info!(
            audio_size_bytes = audio.len(),
            language = %language,
            "Speech-to-text request"
        );

        let text = stt_repo.transcribe(audio, &language).await?;

        Ok(TranscriptionResponse { text, language })
    }

    fn is_configured(&self) -> bool {
        self.stt_repo.is_some()
    }
}

fn resolve_language(language: Option<&str>) -> String {
    match language {
        Some(code) if !language::is_auto(code) => language::normalize_code(code),
        _ => FALLBACK_LANGUAGE.to_string(),
    }
}
