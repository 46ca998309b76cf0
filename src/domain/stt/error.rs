use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SttServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error("Speech-to-text service not configured")]
    NotConfigured,
    #[error(transparent)]
    Dependency(AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for SttServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SttServiceError::Invalid(msg),
            other => SttServiceError::Dependency(other),
        }
    }
}

impl From<SttServiceError> for AppError {
    fn from(err: SttServiceError) -> Self {
        match err {
            SttServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SttServiceError::NotConfigured => {
                AppError::NotConfigured("Speech-to-text service not configured".to_string())
            }
            SttServiceError::Dependency(e) => e,
            SttServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
