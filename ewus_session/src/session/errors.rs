use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Key unavailable or payload serialization failed
    #[error("Session encoding error: {0}")]
    Encoding(String),

    /// Token tampered with, malformed, or signed with another key
    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Header error: {0}")]
    HeaderError(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
