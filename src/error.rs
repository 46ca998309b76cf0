use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Longest slice of a raw vendor body we echo back to the caller
const MAX_VENDOR_BODY_CHARS: usize = 500;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("{vendor} error ({status}): {message}")]
    Vendor {
        vendor: &'static str,
        status: u16,
        message: String,
    },

    #[error("{0}")]
    Timeout(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error body returned to clients: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Database(_)
            | Self::NotConfigured(_)
            | Self::Vendor { .. }
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build a vendor error from a non-success upstream response body
    pub fn vendor(vendor: &'static str, status: u16, body: &str) -> Self {
        Self::Vendor {
            vendor,
            status,
            message: extract_vendor_message(body),
        }
    }

    /// Build a vendor error for transport failures (no upstream status)
    pub fn vendor_transport(vendor: &'static str, err: reqwest::Error) -> Self {
        Self::Vendor {
            vendor,
            status: err.status().map(|s| s.as_u16()).unwrap_or(502),
            message: err.to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

/// Pull the human readable message out of a vendor error body.
///
/// Vendors disagree on the shape: Google uses `{"error": {"message"}}`,
/// AssemblyAI `{"error": "..."}`, ElevenLabs `{"detail": {"message"}}`,
/// Speechify and PlayAI `{"message"}` or `{"error_message"}`. Anything else
/// is passed through as text.
pub fn extract_vendor_message(body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        let candidates = [
            value.pointer("/error/message"),
            value.get("error"),
            value.pointer("/detail/message"),
            value.get("detail"),
            value.get("message"),
            value.get("error_message"),
        ];

        for candidate in candidates.into_iter().flatten() {
            if let Some(text) = candidate.as_str() {
                return text.to_string();
            }
        }
    }

    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    trimmed.chars().take(MAX_VENDOR_BODY_CHARS).collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
