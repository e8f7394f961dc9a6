use http::StatusCode;

use ewus_session::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for CoordinationError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                CoordinationError::SessionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                CoordinationError::EwusError(_) => StatusCode::BAD_GATEWAY,
            };
            (status, e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewus_session::{EwusError, SessionError};

    #[test]
    fn test_session_error_maps_to_internal_server_error() {
        let result: Result<(), CoordinationError> =
            Err(CoordinationError::SessionError(SessionError::Encoding(
                "SESSION_SECRET must be set".to_string(),
            )));

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_ewus_error_maps_to_bad_gateway() {
        let result: Result<(), CoordinationError> =
            Err(CoordinationError::EwusError(EwusError::Status(503)));

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn test_success_case() {
        let result: Result<String, CoordinationError> = Ok("Success".to_string());

        let response_error = result.into_response_error();

        assert!(response_error.is_ok());
        if let Ok(value) = response_error {
            assert_eq!(value, "Success");
        }
    }
}
