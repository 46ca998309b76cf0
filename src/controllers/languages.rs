use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::{
        language::{self, Capability, Language},
        translation::{LanguagePairUsage, TranslationService, TranslationServiceApi},
    },
    error::{AppError, AppResult},
};

const DEFAULT_USAGE_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct LanguagesQuery {
    pub region: Option<String>,
    pub capability: Option<Capability>,
}

#[derive(Debug, Deserialize)]
pub struct UsageQuery {
    pub limit: Option<i64>,
}

pub struct LanguagesController {
    translation_service: Arc<TranslationService>,
}

impl LanguagesController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// GET /api/languages - Catalog sorted by popularity
    pub async fn list(
        query: Result<Query<LanguagesQuery>, QueryRejection>,
    ) -> AppResult<Json<Vec<&'static Language>>> {
        let Query(query) =
            query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let region = query.region.as_deref().filter(|r| !r.trim().is_empty());
        Ok(Json(language::list(region, query.capability)))
    }

    /// GET /api/languages/{code}
    pub async fn get(Path(code): Path<String>) -> AppResult<Json<&'static Language>> {
        language::find(&language::normalize_code(&code))
            .map(Json)
            .ok_or_else(|| AppError::NotFound(format!("Language '{}'", code)))
    }

    /// GET /api/languages/usage - Most translated language pairs
    pub async fn usage(
        State(controller): State<Arc<LanguagesController>>,
        query: Result<Query<UsageQuery>, QueryRejection>,
    ) -> AppResult<Json<Vec<LanguagePairUsage>>> {
        let Query(query) =
            query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let pairs = controller
            .translation_service
            .top_language_pairs(query.limit.unwrap_or(DEFAULT_USAGE_LIMIT))
            .await?;
        Ok(Json(pairs))
    }
}
