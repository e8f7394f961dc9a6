use http::header::HeaderMap;

use crate::session::{
    SessionPayload, SessionSecret, get_session_from_headers, refresh_session_headers,
};

use super::errors::CoordinationError;

/// Read the session carried by the request, if any
///
/// Absent or undecodable cookies both come back as `Ok(None)`; only
/// infrastructure failures (missing process secret, unreadable headers) are
/// errors.
pub fn get_session_core(headers: &HeaderMap) -> Result<Option<SessionPayload>, CoordinationError> {
    let secret = SessionSecret::from_env()?;
    Ok(get_session_from_headers(headers, &secret)?)
}

/// Sliding-expiry refresh for protected routes
///
/// `Ok(None)` means the request carried no usable session cookie and passes
/// through unmodified. `Ok(Some(headers))` carries the re-encoded cookie with
/// its expiry pushed forward, to be attached to the outgoing response.
pub fn refresh_session_core(headers: &HeaderMap) -> Result<Option<HeaderMap>, CoordinationError> {
    let secret = SessionSecret::from_env()?;
    Ok(refresh_session_headers(headers, &secret)?)
}
