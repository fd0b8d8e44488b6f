//! Chatbot page endpoints.
//!
//! - `POST /api/chat/send` — ask a question; both turns land in the transcript
//! - `GET  /api/chat/transcript` — turns, most recent first
//! - `POST /api/chat/save` — keep a bot answer in the saved list
//! - `GET  /api/chat/suggestions` — sample questions for the empty chat

use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SessionId};
use crate::models::enums::Role;
use crate::models::{SavedResponse, Turn};

/// Sample questions offered on an empty chat page.
pub const SAMPLE_QUESTIONS: [&str; 3] = [
    "How long can I keep leftovers?",
    "What's the safe cooking temperature for chicken?",
    "How do I prevent cross-contamination?",
];

#[derive(Deserialize)]
pub struct ChatSendRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct ChatSendResponse {
    pub response: String,
    pub transcript_len: usize,
}

/// `POST /api/chat/send` — one full exchange.
///
/// Validation happens before anything is appended, so a rejected question
/// leaves the transcript untouched. The session lock is held across the
/// model call: a second submit from the same session waits its turn.
pub async fn send(
    State(ctx): State<ApiContext>,
    Extension(session_id): Extension<SessionId>,
    Json(req): Json<ChatSendRequest>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    let dispatcher = ctx.core.dispatcher();
    dispatcher.validate(&req.question)?;

    let handle = ctx.core.session(session_id.0)?;
    let mut session = handle.lock().await;

    let question = req.question.trim().to_string();
    session.append_turn(Role::User, &question);

    // The blocking Ollama client must not run on the async worker threads.
    let asked = question.clone();
    let result = tokio::task::spawn_blocking(move || dispatcher.ask(&asked))
        .await
        .map_err(|e| ApiError::Internal(format!("model task failed: {e}")))?;

    // On failure the user turn stays (it happened); only the answer is absent.
    let response = result?;

    session.append_turn(Role::Bot, &response);
    tracing::debug!(
        session_id = %session.id(),
        turns = session.transcript_len(),
        "Chat exchange completed"
    );

    let transcript_len = session.transcript_len();
    Ok(Json(ChatSendResponse {
        response,
        transcript_len,
    }))
}

/// Wire representation of one turn.
#[derive(Serialize)]
pub struct TurnView {
    pub role: &'static str,
    pub message: String,
    pub timestamp: String,
}

impl From<Turn> for TurnView {
    fn from(turn: Turn) -> Self {
        Self {
            role: turn.role.as_str(),
            message: turn.message,
            timestamp: turn.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub turns: Vec<TurnView>,
}

/// `GET /api/chat/transcript` — most recent turn first.
pub async fn transcript(
    State(ctx): State<ApiContext>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let handle = ctx.core.session(session_id.0)?;
    let session = handle.lock().await;

    let turns = session
        .transcript_newest_first()
        .into_iter()
        .map(TurnView::from)
        .collect();

    Ok(Json(TranscriptResponse { turns }))
}

#[derive(Deserialize)]
pub struct SaveRequest {
    pub response: String,
}

/// `POST /api/chat/save` — copy a bot answer into the saved list.
/// No deduplication: saving twice keeps two timestamped entries.
pub async fn save(
    State(ctx): State<ApiContext>,
    Extension(session_id): Extension<SessionId>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SavedResponse>, ApiError> {
    let handle = ctx.core.session(session_id.0)?;
    let mut session = handle.lock().await;

    let entry = session.save_response(&req.response);
    Ok(Json(entry))
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

/// `GET /api/chat/suggestions` — sample questions. Stateless.
pub async fn suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: SAMPLE_QUESTIONS.to_vec(),
    })
}
