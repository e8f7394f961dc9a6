use chrono::{DateTime, Utc};
use http::header::{HeaderMap, SET_COOKIE};

pub(crate) fn header_set_cookie(
    headers: &mut HeaderMap,
    name: String,
    value: String,
    expires_at: DateTime<Utc>,
    max_age: i64,
) -> Result<&HeaderMap, UtilError> {
    // The Expires attribute mirrors the payload expiry; Max-Age is kept in
    // sync for clients that prefer it.
    let expires = expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
    let cookie = format!(
        "{name}={value}; SameSite=Lax; Secure; HttpOnly; Path=/; Expires={expires}; Max-Age={max_age}"
    );
    tracing::debug!("Set-Cookie: {}", cookie);
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Cookie error: {0}")]
    Cookie(String),
}
