use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::{Stream, StreamExt};
use std::{convert::Infallible, sync::Arc, time::Duration};
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use uuid::Uuid;

use crate::{
    domain::translation::{
        HistoryQuery, TranslationRecord, TranslationService, TranslationServiceApi,
    },
    error::{AppError, AppResult},
};

const TRANSLATION_EVENT: &str = "translation";
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

pub struct HistoryController {
    translation_service: Arc<TranslationService>,
}

impl HistoryController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// GET /api/translations - Newest translations first
    pub async fn list(
        State(controller): State<Arc<HistoryController>>,
        query: Result<Query<HistoryQuery>, QueryRejection>,
    ) -> AppResult<Json<Vec<TranslationRecord>>> {
        let Query(query) =
            query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let records = controller.translation_service.history(query).await?;
        Ok(Json(records))
    }

    /// GET /api/translations/{id}
    pub async fn get(
        State(controller): State<Arc<HistoryController>>,
        id: Result<Path<Uuid>, PathRejection>,
    ) -> AppResult<Json<TranslationRecord>> {
        let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid translation id".to_string()))?;
        let record = controller.translation_service.get(id).await?;
        Ok(Json(record))
    }

    /// DELETE /api/translations/{id}
    pub async fn delete(
        State(controller): State<Arc<HistoryController>>,
        id: Result<Path<Uuid>, PathRejection>,
    ) -> AppResult<StatusCode> {
        let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid translation id".to_string()))?;
        controller.translation_service.delete(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /api/translations/stream - Server-sent events for new translations
    pub async fn stream(
        State(controller): State<Arc<HistoryController>>,
    ) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
        let receiver = controller.translation_service.events().subscribe();
        tracing::debug!("Translation stream subscriber connected");

        let events = live_records(receiver).filter_map(|record| async move {
            match Event::default()
                .event(TRANSLATION_EVENT)
                .id(record.id.to_string())
                .json_data(&record)
            {
                Ok(event) => Some(Ok(event)),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to encode translation event");
                    None
                }
            }
        });

        Sse::new(events).keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL))
    }
}

/// Records as they are published. A subscriber that falls behind skips the
/// records it missed and stays connected.
fn live_records(
    receiver: broadcast::Receiver<TranslationRecord>,
) -> impl Stream<Item = TranslationRecord> {
    BroadcastStream::new(receiver).filter_map(|message| async move {
        match message {
            Ok(record) => Some(record),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped = skipped, "Translation stream subscriber lagged");
                None
            }
        }
    })
}
