//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::assistant::AssistantError;
use crate::core_state::CoreError;
use crate::models::ParseEnumError;
use crate::vision::VisionError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Please enter a question")]
    EmptyQuestion,
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Unknown or expired session")]
    UnknownSession,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::EmptyQuestion => (
                StatusCode::BAD_REQUEST,
                "EMPTY_QUESTION",
                "Please enter a question.".to_string(),
            ),
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::UnknownSession => (
                StatusCode::NOT_FOUND,
                "UNKNOWN_SESSION",
                "Unknown or expired session. Start a new one via POST /api/session.".to_string(),
            ),
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                detail.clone(),
            ),
            ApiError::ModelUnavailable(detail) => {
                tracing::warn!(detail, "Model unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MODEL_UNAVAILABLE",
                    "The language model is unavailable. Please try again.".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AssistantError> for ApiError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::EmptyQuestion => ApiError::EmptyQuestion,
            AssistantError::QuestionTooLong { .. } => ApiError::BadRequest(err.to_string()),
            AssistantError::OllamaConnection(_)
            | AssistantError::Timeout(_)
            | AssistantError::OllamaStatus { .. }
            | AssistantError::ResponseParsing(_)
            | AssistantError::HttpClient(_) => ApiError::ModelUnavailable(err.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownSession(_) => ApiError::UnknownSession,
            CoreError::LockPoisoned => ApiError::Internal("lock poisoned".into()),
        }
    }
}

impl From<VisionError> for ApiError {
    fn from(err: VisionError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ParseEnumError> for ApiError {
    fn from(err: ParseEnumError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn empty_question_returns_400() {
        let response = ApiError::EmptyQuestion.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "EMPTY_QUESTION");
    }

    #[tokio::test]
    async fn unknown_session_returns_404() {
        let response = ApiError::UnknownSession.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "UNKNOWN_SESSION");
    }

    #[tokio::test]
    async fn model_unavailable_returns_503_with_retry_hint() {
        let response =
            ApiError::ModelUnavailable("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "MODEL_UNAVAILABLE");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("try again"));
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let response = ApiError::Internal("something broke".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn assistant_transport_error_maps_to_503() {
        let api_err: ApiError =
            AssistantError::OllamaConnection("http://localhost:11434".into()).into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn assistant_empty_question_maps_to_400() {
        let api_err: ApiError = AssistantError::EmptyQuestion.into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn core_unknown_session_maps_to_404() {
        let api_err: ApiError = CoreError::UnknownSession(uuid::Uuid::new_v4()).into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn vision_error_maps_to_400() {
        let api_err: ApiError = VisionError::UnsupportedFormat.into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
