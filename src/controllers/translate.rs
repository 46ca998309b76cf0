use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::translation::{
        TranslateRequest, TranslateResponse, TranslationService, TranslationServiceApi,
    },
    error::{AppError, AppResult},
};

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate text and record it in the history
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        payload: Result<Json<TranslateRequest>, JsonRejection>,
    ) -> AppResult<Json<TranslateResponse>> {
        let Json(request) = payload.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected translate body");
            AppError::BadRequest("Missing required fields".to_string())
        })?;

        let response = controller.translation_service.translate(request).await?;
        Ok(Json(response))
    }
}
