use super::tts_repository::TtsRepository;
use crate::domain::shared::{poll_until, PollPolicy, PollStatus};
use crate::domain::tts::SynthesizedAudio;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const VENDOR: &str = "PlayAI";

const DEFAULT_VOICE_ID: &str =
    "s3://voice-cloning-zero-shot/d9ff78ba-d016-47f6-b0ef-dd630f59414e/female-cs/manifest.json";

const VOICE_ENGINE: &str = "PlayHT2.0";

#[derive(Debug, Serialize)]
struct JobRequest<'a> {
    text: &'a str,
    voice: &'a str,
    output_format: &'static str,
    voice_engine: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct Job {
    id: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    output: Option<JobOutput>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct JobOutput {
    url: Option<String>,
}

impl Job {
    fn audio_url(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.url.as_deref())
    }

    fn failure(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(match error {
                serde_json::Value::String(message) => message.clone(),
                other => other.to_string(),
            });
        }
        match self.status.as_deref() {
            Some("failed") | Some("error") => Some(format!("job {} failed", self.id)),
            _ => None,
        }
    }
}

/// PlayAI (Play.ht v2): submit a job, poll until the audio URL appears, download it
pub struct PlayAiTtsRepository {
    http_client: reqwest::Client,
    api_key: String,
    user_id: String,
    base_url: String,
    poll_policy: PollPolicy,
}

impl PlayAiTtsRepository {
    pub fn new(
        http_client: reqwest::Client,
        api_key: String,
        user_id: String,
        base_url: String,
        poll_policy: PollPolicy,
    ) -> Self {
        Self {
            http_client,
            api_key,
            user_id,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_policy,
        }
    }

    /// PlayHT2.0 names languages in English
    fn language_name(language: &str) -> Option<&'static str> {
        match language {
            "en" => Some("english"),
            "es" => Some("spanish"),
            "fr" => Some("french"),
            "de" => Some("german"),
            "it" => Some("italian"),
            "pt" => Some("portuguese"),
            "nl" => Some("dutch"),
            "pl" => Some("polish"),
            "ru" => Some("russian"),
            "ja" => Some("japanese"),
            "ko" => Some("korean"),
            "zh" => Some("mandarin"),
            "ar" => Some("arabic"),
            "hi" => Some("hindi"),
            "tr" => Some("turkish"),
            "sv" => Some("swedish"),
            "da" => Some("danish"),
            "el" => Some("greek"),
            "he" => Some("hebrew"),
            _ => None,
        }
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("AUTHORIZATION", &self.api_key)
            .header("X-USER-ID", &self.user_id)
            .header("Accept", "application/json")
    }

    async fn submit_job(&self, text: &str, voice: &str, language: &str) -> AppResult<Job> {
        let response = self
            .authorized(self.http_client.post(format!("{}/api/v2/tts", self.base_url)))
            .json(&JobRequest {
                text,
                voice,
                output_format: "mp3",
                voice_engine: VOICE_ENGINE,
                language: Self::language_name(language),
            })
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        Self::parse(response).await
    }

    async fn fetch_job(&self, job_id: &str) -> AppResult<Job> {
        let response = self
            .authorized(self.http_client.get(format!(
                "{}/api/v2/tts/{}",
                self.base_url,
                urlencoding::encode(job_id)
            )))
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        Self::parse(response).await
    }

    async fn download(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::vendor(VENDOR, status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::vendor_transport(VENDOR, e))?;
        Ok(bytes.to_vec())
    }

    async fn parse(response: reqwest::Response) -> AppResult<Job> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::vendor(VENDOR, status.as_u16(), &body));
        }

        response
            .json::<Job>()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse PlayAI response: {}", e)))
    }
}

#[async_trait]
impl TtsRepository for PlayAiTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        voice_id: Option<&str>,
    ) -> AppResult<SynthesizedAudio> {
        let start_time = std::time::Instant::now();
        let voice = voice_id.unwrap_or(DEFAULT_VOICE_ID);

        let job = self.submit_job(text, voice, language).await?;
        tracing::info!(job_id = %job.id, voice = voice, "PlayAI synthesis job submitted");

        // Short texts can be finished by the time the job is acknowledged
        let audio_url = match job.audio_url() {
            Some(url) => url.to_string(),
            None => {
                poll_until(self.poll_policy, "Speech synthesis timeout", |_| {
                    let job_id = job.id.clone();
                    async move {
                        let job = self.fetch_job(&job_id).await?;
                        if let Some(message) = job.failure() {
                            return Err(AppError::Vendor {
                                vendor: VENDOR,
                                status: 200,
                                message,
                            });
                        }
                        Ok(match job.audio_url() {
                            Some(url) => PollStatus::Ready(url.to_string()),
                            None => PollStatus::Pending,
                        })
                    }
                })
                .await?
            }
        };

        let bytes = self.download(&audio_url).await?;

        tracing::info!(
            provider = "playai",
            job_id = %job.id,
            language = language,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = bytes.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesizedAudio {
            bytes,
            content_type: "audio/mpeg".to_string(),
            voice_id: voice.to_string(),
        })
    }

    fn provider(&self) -> &'static str {
        "playai"
    }
}
