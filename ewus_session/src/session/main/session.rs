use chrono::{Duration, Utc};
use http::header::{COOKIE, HeaderMap};

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::session::types::{SessionPayload, UserSession};
use crate::utils::header_set_cookie;

use super::codec::{SessionSecret, decrypt_session, encrypt_session};

/// Mint a fresh session for the given user
///
/// The payload gets a fixed 10-minute expiry window (configurable through
/// `SESSION_COOKIE_MAX_AGE`) and is returned as `Set-Cookie` headers to be
/// attached to the response that performs the redirect.
pub fn new_session_headers(
    user_session: UserSession,
    secret: &SessionSecret,
) -> Result<HeaderMap, SessionError> {
    let expires = Utc::now() + Duration::seconds(*SESSION_COOKIE_MAX_AGE as i64);
    let payload = SessionPayload {
        user_session,
        expires,
    };
    let token = encrypt_session(&payload, secret)?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.to_string(),
        token,
        expires,
        *SESSION_COOKIE_MAX_AGE as i64,
    )?;
    Ok(headers)
}

/// Prepare sign-out headers: the cookie value is emptied and its expiry set
/// in the past. Safe to call when no session exists.
pub fn expired_session_headers() -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.to_string(),
        String::new(),
        Utc::now() - Duration::seconds(86400),
        -86400,
    )?;
    Ok(headers)
}

pub(crate) fn get_session_token_from_headers(
    headers: &HeaderMap,
) -> Result<Option<&str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        tracing::debug!("No cookie header found");
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::error!("Invalid cookie header: {}", e);
        SessionError::HeaderError("Invalid cookie header".to_string())
    })?;

    let cookie_name = SESSION_COOKIE_NAME.as_str();
    let token = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v),
            _ => None,
        }
    });

    if token.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    }

    Ok(token)
}

/// Retrieve the session carried by the request headers
///
/// Returns `Ok(None)` when no cookie is present. A cookie that fails to
/// decode (tampered, malformed, expired) is treated as "no session" so the
/// user is forced to re-authenticate instead of crashing the request.
pub fn get_session_from_headers(
    headers: &HeaderMap,
    secret: &SessionSecret,
) -> Result<Option<SessionPayload>, SessionError> {
    let Some(token) = get_session_token_from_headers(headers)? else {
        return Ok(None);
    };

    match decrypt_session(token, secret) {
        Ok(payload) => Ok(Some(payload)),
        Err(e) => {
            tracing::debug!("Discarding undecodable session cookie: {}", e);
            Ok(None)
        }
    }
}

/// Same as [`get_session_from_headers`] but for an already-parsed typed
/// `Cookie` header.
pub fn get_session_from_cookies(
    cookies: &headers::Cookie,
    secret: &SessionSecret,
) -> Result<Option<SessionPayload>, SessionError> {
    let Some(token) = cookies.get(SESSION_COOKIE_NAME.as_str()) else {
        return Ok(None);
    };

    match decrypt_session(token, secret) {
        Ok(payload) => Ok(Some(payload)),
        Err(e) => {
            tracing::debug!("Discarding undecodable session cookie: {}", e);
            Ok(None)
        }
    }
}

/// Sliding-expiry refresh, invoked on every request to a protected route
///
/// Returns `Ok(None)` when the request carries no usable session cookie, in
/// which case the request passes through unmodified. Otherwise the payload
/// expiry is reset to now + `SESSION_COOKIE_MAX_AGE`, re-encoded, and
/// returned as `Set-Cookie` headers for the outgoing response.
pub fn refresh_session_headers(
    headers: &HeaderMap,
    secret: &SessionSecret,
) -> Result<Option<HeaderMap>, SessionError> {
    let Some(token) = get_session_token_from_headers(headers)? else {
        return Ok(None);
    };

    let mut payload = match decrypt_session(token, secret) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!("Not refreshing undecodable session cookie: {}", e);
            return Ok(None);
        }
    };

    payload.expires = Utc::now() + Duration::seconds(*SESSION_COOKIE_MAX_AGE as i64);
    let token = encrypt_session(&payload, secret)?;

    let mut response_headers = HeaderMap::new();
    header_set_cookie(
        &mut response_headers,
        SESSION_COOKIE_NAME.to_string(),
        token,
        payload.expires,
        *SESSION_COOKIE_MAX_AGE as i64,
    )?;
    Ok(Some(response_headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::SET_COOKIE;

    fn test_secret() -> SessionSecret {
        SessionSecret::new(b"test_secret_key")
    }

    fn user_session() -> UserSession {
        UserSession {
            login_ewus: "u1".to_string(),
            session_id: "A".to_string(),
            token_id: "B".to_string(),
        }
    }

    /// Extract the cookie value from the first `Set-Cookie` header.
    fn cookie_value(headers: &HeaderMap) -> &str {
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        let pair = cookie.split(';').next().unwrap();
        pair.splitn(2, '=').nth(1).unwrap()
    }

    /// Build request headers carrying the given value as the session cookie.
    fn request_headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            format!("other=1; {}={}", SESSION_COOKIE_NAME.as_str(), value)
                .parse()
                .unwrap(),
        );
        headers
    }

    #[test]
    fn test_new_session_headers_set_decodable_cookie() {
        let secret = test_secret();
        let headers = new_session_headers(user_session(), &secret).unwrap();

        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.contains("HttpOnly"));

        let payload = decrypt_session(cookie_value(&headers), &secret).unwrap();
        assert_eq!(payload.user_session, user_session());
        assert!(payload.expires > Utc::now());
        assert!(payload.expires <= Utc::now() + Duration::seconds(*SESSION_COOKIE_MAX_AGE as i64));
    }

    #[test]
    fn test_expired_session_headers_clear_cookie() {
        let headers = expired_session_headers().unwrap();

        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}=;", SESSION_COOKIE_NAME.as_str())));
        assert!(cookie.contains("Max-Age=-86400"));
    }

    #[test]
    fn test_get_session_token_absent() {
        let headers = HeaderMap::new();
        assert_eq!(get_session_token_from_headers(&headers).unwrap(), None);
    }

    #[test]
    fn test_get_session_token_among_other_cookies() {
        let headers = request_headers_with_cookie("tok");
        assert_eq!(
            get_session_token_from_headers(&headers).unwrap(),
            Some("tok")
        );
    }

    #[test]
    fn test_get_session_from_headers_roundtrip() {
        let secret = test_secret();
        let set_headers = new_session_headers(user_session(), &secret).unwrap();
        let request = request_headers_with_cookie(cookie_value(&set_headers));

        let payload = get_session_from_headers(&request, &secret).unwrap().unwrap();
        assert_eq!(payload.user_session, user_session());
    }

    #[test]
    fn test_get_session_from_headers_garbage_cookie_is_none() {
        let secret = test_secret();
        let request = request_headers_with_cookie("garbage");

        assert_eq!(get_session_from_headers(&request, &secret).unwrap(), None);
    }

    #[test]
    fn test_refresh_without_cookie_is_noop() {
        let secret = test_secret();
        let request = HeaderMap::new();

        assert!(refresh_session_headers(&request, &secret).unwrap().is_none());
    }

    #[test]
    fn test_refresh_garbage_cookie_is_noop() {
        let secret = test_secret();
        let request = request_headers_with_cookie("not-a-token");

        assert!(refresh_session_headers(&request, &secret).unwrap().is_none());
    }

    #[test]
    fn test_refresh_extends_expiry() {
        let secret = test_secret();

        // A session minted earlier, with most of its window already consumed
        let stale = SessionPayload {
            user_session: user_session(),
            expires: Utc::now() + Duration::seconds(30),
        };
        let token = encrypt_session(&stale, &secret).unwrap();
        let request = request_headers_with_cookie(&token);

        let refreshed = refresh_session_headers(&request, &secret)
            .unwrap()
            .expect("expected refreshed cookie headers");
        let payload = decrypt_session(cookie_value(&refreshed), &secret).unwrap();

        assert!(payload.expires > stale.expires);
        assert_eq!(payload.user_session, stale.user_session);
    }
}
