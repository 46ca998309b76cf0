use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::stt::{SttService, SttServiceApi, TranscriptionResponse},
    error::{AppError, AppResult},
};

const AUDIO_FIELD: &str = "audio";
const LANGUAGE_FIELD: &str = "language";

pub struct SpeechToTextController {
    stt_service: Arc<SttService>,
}

impl SpeechToTextController {
    pub fn new(stt_service: Arc<SttService>) -> Self {
        Self { stt_service }
    }

    /// POST /api/speech-to-text - Transcribe an uploaded recording
    ///
    /// Expects `multipart/form-data` with an `audio` file and an optional
    /// `language` field.
    pub async fn transcribe(
        State(controller): State<Arc<SpeechToTextController>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<Json<TranscriptionResponse>> {
        let mut multipart = multipart.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected speech-to-text body");
            AppError::BadRequest("No audio file provided".to_string())
        })?;

        let mut audio: Option<Vec<u8>> = None;
        let mut language: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(AUDIO_FIELD) => {
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    audio = Some(bytes.to_vec());
                }
                Some(LANGUAGE_FIELD) => {
                    let value = field.text().await.map_err(multipart_error)?;
                    language = Some(value).filter(|v| !v.trim().is_empty());
                }
                _ => {}
            }
        }

        let audio = audio.unwrap_or_default();
        let response = controller.stt_service.transcribe(audio, language).await?;
        Ok(Json(response))
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Audio file is too large".to_string())
    } else {
        AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
    }
}
