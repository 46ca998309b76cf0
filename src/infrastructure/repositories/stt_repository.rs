use crate::error::AppResult;
use async_trait::async_trait;

/// Repository for speech recognition.
/// Implementations own any vendor-side job lifecycle (upload, submit, poll).
#[async_trait]
pub trait SttRepository: Send + Sync {
    /// Transcribe raw audio bytes recorded in `language` (ISO 639-1)
    async fn transcribe(&self, audio: Vec<u8>, language: &str) -> AppResult<String>;
}
