use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum EwusError {
    /// Sign-in form failed the required field shape check
    #[error("Invalid sign-in form")]
    InvalidForm,

    #[error("404. Not found")]
    NotFound,

    #[error("500. Internal server error")]
    InternalServerError,

    /// Any other non-2xx status, surfaced raw
    #[error("{0}")]
    Status(u16),

    /// Network-level failure, including timeouts
    #[error("Login request failed: {0}")]
    Request(String),

    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_remote_mapping() {
        // 400 is reported as "not found", 500 as an internal server error,
        // anything else as the raw status code
        assert_eq!(EwusError::NotFound.to_string(), "404. Not found");
        assert_eq!(
            EwusError::InternalServerError.to_string(),
            "500. Internal server error"
        );
        assert_eq!(EwusError::Status(503).to_string(), "503");
    }
}
