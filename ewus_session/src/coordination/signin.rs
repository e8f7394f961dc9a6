use http::header::HeaderMap;

use crate::ewus::{LoginResponse, SignInForm, login_with_credentials};
use crate::session::{
    SessionSecret, UserSession, expired_session_headers, new_session_headers,
};

use super::errors::CoordinationError;

/// Message shown when the sign-in form fails the required field shape check
pub const MSG_INVALID_CREDENTIALS: &str = "Nieprawidłowe dane logowania.";

/// Message shown when the remote login attempt does not yield a session
pub const MSG_SIGNIN_FAILED: &str = "Nieudana próba zalogowania użytkownika.";

/// Outcome of a sign-in attempt
#[derive(Debug)]
pub enum SignInResult {
    /// Session cookie headers to attach to the response; the caller redirects
    /// to the application root.
    Authenticated(HeaderMap),
    /// Localized message for the user. Session state is untouched and no
    /// redirect happens.
    Denied(&'static str),
}

/// Sign the user in against the remote eWUS login service
///
/// The form is validated before any network call. Remote failures (HTTP
/// error, network error, timeout) and responses lacking `session_id` or
/// `token_id` both deny the attempt; the underlying cause is logged, the
/// user sees the generic localized failure message.
pub async fn signin_core(form: &SignInForm) -> Result<SignInResult, CoordinationError> {
    if let Err(e) = form.validate() {
        tracing::debug!("Sign-in form rejected: {}", e);
        return Ok(SignInResult::Denied(MSG_INVALID_CREDENTIALS));
    }

    let credentials = form.normalize();
    let response = match login_with_credentials(&credentials).await {
        Ok(response) => response,
        Err(e) => {
            CoordinationError::EwusError(e).log();
            return Ok(SignInResult::Denied(MSG_SIGNIN_FAILED));
        }
    };

    let Some(user_session) = user_session_from_response(&credentials.login_ewus, response) else {
        tracing::warn!("Remote login response lacked session_id or token_id");
        return Ok(SignInResult::Denied(MSG_SIGNIN_FAILED));
    };

    let secret = SessionSecret::from_env()?;
    let headers = new_session_headers(user_session, &secret)?;
    Ok(SignInResult::Authenticated(headers))
}

/// A remote response yields a session only when both identifiers are present
/// and non-empty.
fn user_session_from_response(login_ewus: &str, response: LoginResponse) -> Option<UserSession> {
    match (response.session_id, response.token_id) {
        (Some(session_id), Some(token_id)) if !session_id.is_empty() && !token_id.is_empty() => {
            Some(UserSession {
                login_ewus: login_ewus.to_string(),
                session_id,
                token_id,
            })
        }
        _ => None,
    }
}

/// Sign the user out by expiring the session cookie
///
/// Unconditional and idempotent; the caller redirects to the login route.
pub fn signout_core() -> Result<HeaderMap, CoordinationError> {
    Ok(expired_session_headers()?)
}
