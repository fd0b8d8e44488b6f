//! Per-session state: conversation transcript, saved answers, and the
//! current page selection.
//!
//! Every browser session gets one `SessionContext`, created on first contact
//! and discarded on inactivity. Nothing here touches disk — when the session
//! ends, its state is gone.
//!
//! Each context lives behind a `tokio::sync::Mutex` handed out by the store,
//! so at most one interaction is in flight per session at any moment. The
//! chat handler holds that lock across the model call; a second submit from
//! the same session waits rather than interleaving.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use uuid::Uuid;

use crate::models::enums::{Page, Role};
use crate::models::{SavedResponse, Turn};

/// Timestamp format for saved responses.
const SAVED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ═══════════════════════════════════════════════════════════
// SessionContext — one user's hub state
// ═══════════════════════════════════════════════════════════

/// State for one user session.
pub struct SessionContext {
    id: Uuid,
    page: Page,
    transcript: Vec<Turn>,
    saved: Vec<SavedResponse>,
    max_turns: usize,
}

impl SessionContext {
    /// Create a fresh session. Navigation starts on the Chatbot page.
    pub fn new(id: Uuid, max_turns: usize) -> Self {
        Self {
            id,
            page: Page::Chatbot,
            transcript: Vec::new(),
            saved: Vec::new(),
            max_turns,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    // ── Navigation ───────────────────────────────────────

    pub fn page(&self) -> Page {
        self.page
    }

    /// Overwrite the current page selection. Not historized.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    // ── Transcript ───────────────────────────────────────

    /// Append one turn. The transcript is append-only; when it outgrows the
    /// configured cap the oldest turns are dropped.
    pub fn append_turn(&mut self, role: Role, message: &str) {
        self.transcript.push(Turn {
            role,
            message: message.to_string(),
            timestamp: Local::now().naive_local(),
        });
        if self.transcript.len() > self.max_turns {
            let excess = self.transcript.len() - self.max_turns;
            self.transcript.drain(0..excess);
        }
    }

    pub fn transcript_len(&self) -> usize {
        self.transcript.len()
    }

    /// Turns in display order: most recent first.
    pub fn transcript_newest_first(&self) -> Vec<Turn> {
        self.transcript.iter().rev().cloned().collect()
    }

    // ── Saved responses ──────────────────────────────────

    /// Keep a bot answer, stamped with the current wall clock. Repeated
    /// saves of the same text accumulate independent entries.
    pub fn save_response(&mut self, response: &str) -> SavedResponse {
        let entry = SavedResponse {
            timestamp: Local::now().format(SAVED_TIMESTAMP_FORMAT).to_string(),
            response: response.to_string(),
        };
        self.saved.push(entry.clone());
        entry
    }

    /// Saved answers in insertion order.
    pub fn saved(&self) -> &[SavedResponse] {
        &self.saved
    }
}

// ═══════════════════════════════════════════════════════════
// SessionStore — all live sessions
// ═══════════════════════════════════════════════════════════

/// Shared handle to one session's state.
pub type SessionHandle = Arc<tokio::sync::Mutex<SessionContext>>;

struct SessionEntry {
    context: SessionHandle,
    last_seen: Instant,
}

/// In-memory map of live sessions with inactivity expiry.
///
/// Expiry is lazy: expired entries are dropped when looked up, and the whole
/// map is swept on every create. There is no background reaper.
pub struct SessionStore {
    sessions: HashMap<Uuid, SessionEntry>,
    ttl: Duration,
    max_turns: usize,
}

impl SessionStore {
    pub fn new(ttl: Duration, max_turns: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
            max_turns,
        }
    }

    /// Create a new session and return its id and handle.
    pub fn create(&mut self) -> (Uuid, SessionHandle) {
        self.cleanup();
        let id = Uuid::new_v4();
        let handle: SessionHandle =
            Arc::new(tokio::sync::Mutex::new(SessionContext::new(id, self.max_turns)));
        self.sessions.insert(
            id,
            SessionEntry {
                context: handle.clone(),
                last_seen: Instant::now(),
            },
        );
        tracing::debug!(session_id = %id, "Session created");
        (id, handle)
    }

    /// Look up a live session, touching its activity clock.
    /// An expired session is evicted and reported as absent.
    pub fn get(&mut self, id: &Uuid) -> Option<SessionHandle> {
        let expired = match self.sessions.get(id) {
            Some(entry) => entry.last_seen.elapsed() >= self.ttl,
            None => return None,
        };
        if expired {
            self.sessions.remove(id);
            tracing::debug!(session_id = %id, "Session expired");
            return None;
        }
        let entry = self.sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.context.clone())
    }

    /// Drop a session explicitly.
    pub fn evict(&mut self, id: &Uuid) {
        self.sessions.remove(id);
    }

    /// Sweep expired sessions.
    pub fn cleanup(&mut self) {
        let ttl = self.ttl;
        self.sessions.retain(|_, entry| entry.last_seen.elapsed() < ttl);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
