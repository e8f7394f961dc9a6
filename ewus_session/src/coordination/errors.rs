//! Error types for the coordination layer

use thiserror::Error;

use crate::ewus::EwusError;
use crate::session::SessionError;

/// Errors that can occur while coordinating the session flow
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Error from session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from the remote eWUS collaborator
    #[error("eWUS error: {0}")]
    EwusError(EwusError),
}

impl CoordinationError {
    /// Log the error and return self, allowing method chaining and explicit
    /// logging where the error is swallowed rather than propagated.
    pub fn log(self) -> Self {
        match &self {
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::EwusError(err) => tracing::error!("eWUS error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<EwusError> for CoordinationError {
    fn from(err: EwusError) -> Self {
        let error = Self::EwusError(err);
        tracing::error!("{}", error);
        error
    }
}
