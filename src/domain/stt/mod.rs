pub mod error;
pub mod service;

pub use error::SttServiceError;
pub use service::{SttService, SttServiceApi};

use serde::{Deserialize, Serialize};

/// Response for POST /api/speech-to-text
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionResponse {
    pub text: String,
    pub language: String,
}
