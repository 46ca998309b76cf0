pub mod error;
pub mod service;
pub mod text;

pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi};

use serde::{Deserialize, Serialize};

/// Request for POST /api/text-to-speech
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    /// Older clients send `voice`; `voiceId` wins when both are present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

impl TtsRequest {
    pub fn requested_voice(&self) -> Option<String> {
        self.voice_id.clone().or_else(|| self.voice.clone())
    }
}

/// Response for POST /api/text-to-speech
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsResponse {
    /// Base64 encoded audio
    pub audio_data: String,
    pub content_type: String,
    pub provider: String,
    pub voice_id: String,
    pub language: String,
}

/// Raw audio returned by a TTS vendor
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub voice_id: String,
}
