//! Turns a user question into a finished model answer.
//!
//! One fixed model, one fixed system instruction, one blocking call per
//! question. Transport failures get exactly one retry before they surface;
//! anything the model itself returned is reported as-is.

use super::ollama::LlmClient;
use super::prompt::format_prompt;
use super::AssistantError;

/// Upper bound on question length, matching the chat input widget.
pub const MAX_QUESTION_CHARS: usize = 2000;

/// Formats and dispatches questions to the configured model.
pub struct PromptDispatcher {
    client: Box<dyn LlmClient + Send + Sync>,
    model: String,
    system_instruction: String,
}

impl PromptDispatcher {
    pub fn new(
        client: Box<dyn LlmClient + Send + Sync>,
        model: String,
        system_instruction: String,
    ) -> Self {
        Self {
            client,
            model,
            system_instruction,
        }
    }

    /// The model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Validate a question without dispatching it. Both entry points apply
    /// the same rules, so an invalid question never reaches the transcript.
    pub fn validate(&self, question: &str) -> Result<(), AssistantError> {
        if question.trim().is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }
        if question.len() > MAX_QUESTION_CHARS {
            return Err(AssistantError::QuestionTooLong {
                max: MAX_QUESTION_CHARS,
            });
        }
        Ok(())
    }

    /// Dispatch a question and return the model's raw answer.
    ///
    /// The prompt travels as a single formatted string in the `prompt` field;
    /// the request's separate `system` field stays empty.
    pub fn ask(&self, question: &str) -> Result<String, AssistantError> {
        self.validate(question)?;
        let question = question.trim();
        let prompt = format_prompt(&self.system_instruction, question);

        match self.client.generate(&self.model, &prompt, "") {
            Ok(response) => Ok(response),
            Err(e) if e.is_retryable() => {
                tracing::warn!(error = %e, model = %self.model, "Model call failed, retrying once");
                self.client.generate(&self.model, &prompt, "")
            }
            Err(e) => Err(e),
        }
    }

    /// Whether the configured model is present on the Ollama instance.
    pub fn check_model(&self) -> Result<bool, AssistantError> {
        self.client.is_model_available(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::ollama::MockLlmClient;
    use crate::assistant::prompt::ADVISOR_SYSTEM_PROMPT;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn dispatcher(client: MockLlmClient) -> PromptDispatcher {
        PromptDispatcher::new(
            Box::new(client),
            "llama2".into(),
            ADVISOR_SYSTEM_PROMPT.into(),
        )
    }

    #[test]
    fn returns_model_response() {
        let d = dispatcher(MockLlmClient::new("Keep leftovers 3-4 days refrigerated."));
        let answer = d.ask("How long can I keep leftovers?").unwrap();
        assert_eq!(answer, "Keep leftovers 3-4 days refrigerated.");
    }

    #[test]
    fn empty_question_rejected() {
        let d = dispatcher(MockLlmClient::new("unused"));
        assert!(matches!(d.ask(""), Err(AssistantError::EmptyQuestion)));
        assert!(matches!(d.ask("   \n\t"), Err(AssistantError::EmptyQuestion)));
    }

    #[test]
    fn oversized_question_rejected() {
        let d = dispatcher(MockLlmClient::new("unused"));
        let long = "x".repeat(MAX_QUESTION_CHARS + 1);
        assert!(matches!(
            d.ask(&long),
            Err(AssistantError::QuestionTooLong { .. })
        ));
    }

    #[test]
    fn retries_once_on_connection_failure() {
        let d = dispatcher(MockLlmClient::new("second try worked").failing(1));
        assert_eq!(d.ask("test?").unwrap(), "second try worked");
    }

    #[test]
    fn gives_up_after_one_retry() {
        let d = dispatcher(MockLlmClient::new("never reached").failing(2));
        assert!(matches!(
            d.ask("test?"),
            Err(AssistantError::OllamaConnection(_))
        ));
    }

    /// Counts calls and always answers with a model-side HTTP error.
    struct StatusErrorClient {
        calls: std::sync::Arc<AtomicU32>,
    }

    impl LlmClient for StatusErrorClient {
        fn generate(&self, _: &str, _: &str, _: &str) -> Result<String, AssistantError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AssistantError::OllamaStatus {
                status: 404,
                body: "model 'llama2' not found".into(),
            })
        }

        fn is_model_available(&self, _: &str) -> Result<bool, AssistantError> {
            Ok(false)
        }

        fn list_models(&self) -> Result<Vec<String>, AssistantError> {
            Ok(vec![])
        }
    }

    #[test]
    fn model_side_errors_are_not_retried() {
        let calls = std::sync::Arc::new(AtomicU32::new(0));
        let client = StatusErrorClient {
            calls: calls.clone(),
        };
        let d = PromptDispatcher::new(
            Box::new(client),
            "llama2".into(),
            ADVISOR_SYSTEM_PROMPT.into(),
        );
        assert!(matches!(
            d.ask("anything"),
            Err(AssistantError::OllamaStatus { status: 404, .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1, "no retry expected");
    }

    #[test]
    fn question_is_trimmed_before_formatting() {
        // A mock that echoes the prompt back lets us inspect formatting.
        struct EchoClient;
        impl LlmClient for EchoClient {
            fn generate(&self, _: &str, prompt: &str, _: &str) -> Result<String, AssistantError> {
                Ok(prompt.to_string())
            }
            fn is_model_available(&self, _: &str) -> Result<bool, AssistantError> {
                Ok(true)
            }
            fn list_models(&self) -> Result<Vec<String>, AssistantError> {
                Ok(vec![])
            }
        }

        let d = PromptDispatcher::new(Box::new(EchoClient), "llama2".into(), "PREFIX: ".into());
        let echoed = d.ask("  spaced question  ").unwrap();
        assert_eq!(echoed, "PREFIX: spaced question");
    }

    #[test]
    fn check_model_consults_client() {
        let d = dispatcher(MockLlmClient::new("").with_models(vec!["llama2:latest".into()]));
        assert!(d.check_model().unwrap());

        let d = dispatcher(MockLlmClient::new("").with_models(vec!["mistral:7b".into()]));
        assert!(!d.check_model().unwrap());
    }
}
