//! Shared application state.
//!
//! `CoreState` is the single state object behind every request handler:
//! configuration, the session store, and the prompt dispatcher. Wrapped in
//! `Arc` at startup and cloned into the router.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

use crate::assistant::ollama::{LlmClient, OllamaClient};
use crate::assistant::prompt::ADVISOR_SYSTEM_PROMPT;
use crate::assistant::PromptDispatcher;
use crate::config::AppConfig;
use crate::models::enums::Page;
use crate::session::{SessionHandle, SessionStore};

/// Transport-agnostic application state.
pub struct CoreState {
    config: AppConfig,
    sessions: Mutex<SessionStore>,
    dispatcher: Arc<PromptDispatcher>,
}

/// Errors from shared-state access.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("State lock poisoned")]
    LockPoisoned,
    #[error("Unknown or expired session: {0}")]
    UnknownSession(Uuid),
}

impl CoreState {
    /// Create state backed by a real Ollama client, per the configuration.
    pub fn new(config: AppConfig) -> Self {
        let client = OllamaClient::new(&config.ollama.base_url, config.ollama.timeout_secs);
        Self::with_client(config, Box::new(client))
    }

    /// Create state with an explicit model client. Tests inject mocks here.
    pub fn with_client(config: AppConfig, client: Box<dyn LlmClient + Send + Sync>) -> Self {
        let system_instruction = config
            .assistant
            .system_prompt
            .clone()
            .unwrap_or_else(|| ADVISOR_SYSTEM_PROMPT.to_string());
        let dispatcher = Arc::new(PromptDispatcher::new(
            client,
            config.ollama.model.clone(),
            system_instruction,
        ));
        let store = SessionStore::new(
            Duration::from_secs(config.session.ttl_secs),
            config.session.max_turns,
        );
        Self {
            config,
            sessions: Mutex::new(store),
            dispatcher,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The dispatcher, shared so handlers can move it into blocking tasks.
    pub fn dispatcher(&self) -> Arc<PromptDispatcher> {
        self.dispatcher.clone()
    }

    // ── Sessions ─────────────────────────────────────────

    /// Start a new session. Returns its id and initial page.
    pub fn create_session(&self) -> Result<(Uuid, Page), CoreError> {
        let mut store = self.sessions.lock().map_err(|_| CoreError::LockPoisoned)?;
        let (id, _handle) = store.create();
        Ok((id, Page::Chatbot))
    }

    /// Look up a live session, touching its activity clock.
    pub fn session(&self, id: Uuid) -> Result<SessionHandle, CoreError> {
        let mut store = self.sessions.lock().map_err(|_| CoreError::LockPoisoned)?;
        store.get(&id).ok_or(CoreError::UnknownSession(id))
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|store| store.len()).unwrap_or(0)
    }
}
