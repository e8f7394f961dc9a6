//! Session codec: encrypts a [`SessionPayload`] into an opaque, tamper-evident
//! token and back.
//!
//! The token is a JWT signed with HS256. The `exp` claim mirrors the payload
//! expiry in Unix seconds so expiry is enforced during decoding, while the
//! `expires` claim round-trips the timestamp with full precision.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::session::errors::SessionError;
use crate::session::types::{SessionPayload, UserSession};

/// Symmetric key for the session codec
///
/// The key is an explicitly passed configuration value rather than ambient
/// global state, which keeps the codec side-effect-free and testable.
#[derive(Clone)]
pub struct SessionSecret {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionSecret {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Read the process-wide key from the `SESSION_SECRET` environment
    /// variable.
    pub fn from_env() -> Result<Self, SessionError> {
        let secret = std::env::var("SESSION_SECRET")
            .map_err(|_| SessionError::Encoding("SESSION_SECRET must be set".to_string()))?;
        Ok(Self::new(secret.as_bytes()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    user_session: UserSession,
    expires: DateTime<Utc>,
    exp: i64,
}

pub fn encrypt_session(
    payload: &SessionPayload,
    secret: &SessionSecret,
) -> Result<String, SessionError> {
    let claims = SessionClaims {
        user_session: payload.user_session.clone(),
        expires: payload.expires,
        exp: payload.expires.timestamp(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &secret.encoding)
        .map_err(|e| SessionError::Encoding(e.to_string()))
}

pub fn decrypt_session(
    token: &str,
    secret: &SessionSecret,
) -> Result<SessionPayload, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data =
        decode::<SessionClaims>(token, &secret.decoding, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => SessionError::SessionExpired,
            _ => SessionError::InvalidToken(e.to_string()),
        })?;

    Ok(SessionPayload {
        user_session: data.claims.user_session,
        expires: data.claims.expires,
    })
}
