pub mod enums;
pub mod news;
pub mod turn;

pub use news::NewsArticle;
pub use turn::{SavedResponse, Turn};

/// Error for enum strings arriving over the wire.
#[derive(Debug, thiserror::Error)]
#[error("Invalid {field} value: '{value}'")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}
