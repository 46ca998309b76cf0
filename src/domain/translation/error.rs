use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    TooLarge(String),
    #[error("Translation service not configured")]
    NotConfigured,
    #[error("translation not found")]
    NotFound,
    #[error(transparent)]
    Dependency(AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for TranslationServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => TranslationServiceError::Invalid(msg),
            AppError::NotFound(_) => TranslationServiceError::NotFound,
            other => TranslationServiceError::Dependency(other),
        }
    }
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TranslationServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            TranslationServiceError::NotConfigured => {
                AppError::NotConfigured("Translation service not configured".to_string())
            }
            TranslationServiceError::NotFound => {
                AppError::NotFound("Translation not found".to_string())
            }
            TranslationServiceError::Dependency(e) => e,
            TranslationServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
