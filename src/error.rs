//! Unified API error handling
//!
//! Errors are serialized as `{"error": "..."}` to match the frontend contract.
//! Internal causes are logged, never leaked; the one exception is PDF
//! extraction failures, whose wrapped cause is part of the API contract.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Failed to process PDF")]
    DocumentProcessing(#[source] anyhow::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Extraction(_) | Self::DocumentProcessing(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            // The extraction message embeds the underlying decoder failure
            Self::Extraction(msg) => msg.clone(),
            // Don't leak internal error details
            Self::DocumentProcessing(_) => "Failed to process PDF".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Internal server error");
            }
            Self::DocumentProcessing(e) => {
                tracing::error!(error = ?e, "Document processing failed");
            }
            Self::Extraction(msg) => {
                tracing::error!(error = %msg, "Document extraction failed");
            }
            Self::BadRequest(_) => {
                tracing::warn!(error = %self, "API error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
