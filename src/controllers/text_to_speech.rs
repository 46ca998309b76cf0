use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{TtsRequest, TtsResponse, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TextToSpeechController {
    tts_service: Arc<TtsService>,
}

impl TextToSpeechController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/text-to-speech - Synthesize speech, returned as base64 audio
    pub async fn synthesize(
        State(controller): State<Arc<TextToSpeechController>>,
        payload: Result<Json<TtsRequest>, JsonRejection>,
    ) -> AppResult<Json<TtsResponse>> {
        let Json(request) = payload.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected text-to-speech body");
            AppError::BadRequest("No text provided".to_string())
        })?;

        let voice = request.requested_voice();
        let response = controller
            .tts_service
            .synthesize(request.text, request.language, voice)
            .await?;

        Ok(Json(response))
    }
}
