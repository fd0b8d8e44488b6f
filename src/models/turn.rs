use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::Role;

/// One message in a conversation, tagged with its speaker.
/// Immutable once created; the transcript only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub message: String,
    pub timestamp: NaiveDateTime,
}

/// A bot answer the user explicitly kept. Never edited, deduplicated, or
/// removed — repeated saves of the same answer accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResponse {
    /// Wall clock at save time, formatted `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub response: String,
}
