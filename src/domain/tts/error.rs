use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    TooLarge(String),
    #[error("Text-to-speech service not configured")]
    NotConfigured,
    #[error("{0}")]
    InvalidAudio(String),
    #[error(transparent)]
    Dependency(AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for TtsServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => TtsServiceError::Invalid(msg),
            other => TtsServiceError::Dependency(other),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            TtsServiceError::NotConfigured => {
                AppError::NotConfigured("Text-to-speech service not configured".to_string())
            }
            TtsServiceError::InvalidAudio(msg) => AppError::Internal(msg),
            TtsServiceError::Dependency(e) => e,
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
