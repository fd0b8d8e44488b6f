//! The advisor: prompt assembly and dispatch to a local Ollama instance.

pub mod dispatcher;
pub mod ollama;
pub mod prompt;

pub use dispatcher::PromptDispatcher;
pub use ollama::{LlmClient, MockLlmClient, OllamaClient};

/// Errors from question validation and model invocation.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Question cannot be empty")]
    EmptyQuestion,
    #[error("Question too long (max {max} characters)")]
    QuestionTooLong { max: usize },
    #[error("Cannot connect to Ollama at {0}. Is it running?")]
    OllamaConnection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Ollama returned HTTP {status}: {body}")]
    OllamaStatus { status: u16, body: String },
    #[error("Failed to parse model response: {0}")]
    ResponseParsing(String),
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl AssistantError {
    /// Transport-level failures are worth one more attempt; anything the
    /// model itself said (or sent malformed) is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::OllamaConnection(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_retryable() {
        assert!(AssistantError::OllamaConnection("http://localhost:11434".into()).is_retryable());
        assert!(AssistantError::Timeout(120).is_retryable());
    }

    #[test]
    fn model_and_input_errors_are_not_retryable() {
        assert!(!AssistantError::EmptyQuestion.is_retryable());
        assert!(!AssistantError::OllamaStatus {
            status: 404,
            body: "model not found".into()
        }
        .is_retryable());
        assert!(!AssistantError::ResponseParsing("bad json".into()).is_retryable());
    }
}
