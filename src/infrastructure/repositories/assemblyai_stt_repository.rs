use super::stt_repository::SttRepository;
use crate::domain::shared::{poll_until, PollPolicy, PollStatus};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const VENDOR: &str = "AssemblyAI";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
    language_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct Transcript {
    id: String,
    status: TranscriptStatus,
    text: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

/// AssemblyAI: upload the audio, create a transcript job, poll it to completion
pub struct AssemblyAiSttRepository {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_policy: PollPolicy,
}

impl AssemblyAiSttRepository {
    pub fn new(
        http_client: reqwest::Client,
        api_key: String,
        base_url: String,
        poll_policy: PollPolicy,
    ) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_policy,
        }
    }

    async fn upload(&self, audio: Vec<u8>) -> AppResult<String> {
        let response = self
            .http_client
            .post(format!("{}/v2/upload", self.base_url))
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(audio)
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        let upload: UploadResponse = Self::parse(response).await?;
        Ok(upload.upload_url)
    }

    async fn create_transcript(&self, audio_url: &str, language: &str) -> AppResult<String> {
        let response = self
            .http_client
            .post(format!("{}/v2/transcript", self.base_url))
            .header("Authorization", &self.api_key)
            .json(&TranscriptRequest {
                audio_url,
                language_code: language,
            })
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        let transcript: Transcript = Self::parse(response).await?;
        Ok(transcript.id)
    }

    async fn fetch_transcript(&self, transcript_id: &str) -> AppResult<Transcript> {
        let response = self
            .http_client
            .get(format!(
                "{}/v2/transcript/{}",
                self.base_url,
                urlencoding::encode(transcript_id)
            ))
            .header("Authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        Self::parse(response).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::vendor(VENDOR, status.as_u16(), &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse AssemblyAI response: {}", e)))
    }
}

#[async_trait]
impl SttRepository for AssemblyAiSttRepository {
    async fn transcribe(&self, audio: Vec<u8>, language: &str) -> AppResult<String> {
        let start_time = std::time::Instant::now();
        let audio_size = audio.len();

        let upload_url = self.upload(audio).await?;
        tracing::debug!(audio_size_bytes = audio_size, "Audio uploaded to AssemblyAI");

        let transcript_id = self.create_transcript(&upload_url, language).await?;
        tracing::info!(
            transcript_id = %transcript_id,
            language = language,
            "AssemblyAI transcription job created"
        );

        let text = poll_until(self.poll_policy, "Transcription timeout", |_| {
            let transcript_id = transcript_id.clone();
            async move {
                let transcript = self.fetch_transcript(&transcript_id).await?;
                match transcript.status {
                    TranscriptStatus::Completed => {
                        Ok(PollStatus::Ready(transcript.text.unwrap_or_default()))
                    }
                    TranscriptStatus::Error => Err(AppError::Vendor {
                        vendor: VENDOR,
                        status: 200,
                        message: transcript
                            .error
                            .unwrap_or_else(|| "Transcription failed".to_string()),
                    }),
                    TranscriptStatus::Queued | TranscriptStatus::Processing => {
                        Ok(PollStatus::Pending)
                    }
                }
            }
        })
        .await?;

        tracing::info!(
            provider = "assemblyai",
            transcript_id = %transcript_id,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_size,
            text_length = text.len(),
            "Transcription completed"
        );

        Ok(text)
    }
}
