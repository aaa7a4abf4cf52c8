use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Experience section not found in resume")]
    SectionNotFound,

    #[error("Uploaded document exceeds the size limit")]
    PayloadTooLarge,

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::SectionNotFound => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Llm(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::SectionNotFound => ("SECTION_NOT_FOUND", self.to_string()),
            AppError::PayloadTooLarge => ("PAYLOAD_TOO_LARGE", self.to_string()),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                (
                    "EXTRACTION_ERROR",
                    "Could not read text from the uploaded document".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    "LLM_ERROR",
                    "Failed to get a response from the language model".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_section_not_found_is_bad_request() {
        let (status, body) = body_json(AppError::SectionNotFound).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "SECTION_NOT_FOUND");
        assert_eq!(body["error"], "Experience section not found in resume");
    }

    #[tokio::test]
    async fn test_llm_error_hides_detail() {
        let err = AppError::from(LlmError::Api {
            status: 401,
            message: "Incorrect API key provided: sk-abc".to_string(),
        });
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "LLM_ERROR");
        assert!(!body["error"].as_str().unwrap().contains("sk-abc"));
    }

    #[tokio::test]
    async fn test_extraction_error_is_unprocessable() {
        let err = AppError::from(ExtractError::Pdf("invalid file header".to_string()));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let err = AppError::from(anyhow::anyhow!("disk full at /tmp/xyz"));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An internal server error occurred");
    }

    #[tokio::test]
    async fn test_payload_too_large_is_413() {
        let (status, body) = body_json(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    }

    #[test]
    fn test_validation_is_bad_request() {
        assert_eq!(
            AppError::Validation("job_desc is required".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
