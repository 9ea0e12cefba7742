use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type for the analysis pipeline.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure maps to exactly one HTTP response; nothing is retried or
/// recovered internally.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Failed to download PDF")]
    Download,

    #[error("{0}")]
    Extraction(String),

    #[error("Analysis failed")]
    Analysis(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingParameters => StatusCode::BAD_REQUEST,
            AppError::Download | AppError::Extraction(_) | AppError::Analysis(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // The analysis cause is deliberately not surfaced to the client;
        // log it here so the detail is not lost entirely.
        if let AppError::Analysis(cause) = &self {
            tracing::error!("Analysis failed: {cause}");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameters_is_400() {
        let response = AppError::MissingParameters.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_pipeline_errors_are_500() {
        let response = AppError::Download.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::Extraction("bad xref table".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::Analysis(LlmError::EmptyContent).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_analysis_message_is_generic() {
        let err = AppError::Analysis(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        });
        assert_eq!(err.to_string(), "Analysis failed");
    }

    #[test]
    fn test_extraction_message_is_verbatim() {
        let err = AppError::Extraction("unexpected end of file".to_string());
        assert_eq!(err.to_string(), "unexpected end of file");
    }
}
