use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::{
    stt::{SttService, SttServiceApi},
    translation::{TranslationService, TranslationServiceApi},
    tts::{TtsService, TtsServiceApi},
};
use crate::infrastructure::db::{check_connection, DbPool};

pub struct HealthController {
    pool: Arc<DbPool>,
    translation_service: Arc<TranslationService>,
    stt_service: Arc<SttService>,
    tts_service: Arc<TtsService>,
}

impl HealthController {
    pub fn new(
        pool: Arc<DbPool>,
        translation_service: Arc<TranslationService>,
        stt_service: Arc<SttService>,
        tts_service: Arc<TtsService>,
    ) -> Self {
        Self {
            pool,
            translation_service,
            stt_service,
            tts_service,
        }
    }

    pub async fn health() -> impl IntoResponse {
        (StatusCode::OK, "OK")
    }

    pub async fn health_ready(
        State(controller): State<Arc<HealthController>>,
    ) -> impl IntoResponse {
        let translate = vendor_status(controller.translation_service.is_configured());
        let stt = vendor_status(controller.stt_service.is_configured());
        let tts = vendor_status(controller.tts_service.is_configured());

        match check_connection(&controller.pool).await {
            Ok(_) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "database": "connected",
                    "translate": translate,
                    "stt": stt,
                    "tts": tts
                })),
            ),
            Err(e) => {
                tracing::error!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "not_ready",
                        "database": "disconnected",
                        "translate": translate,
                        "stt": stt,
                        "tts": tts
                    })),
                )
            }
        }
    }
}

fn vendor_status(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "not_configured"
    }
}
