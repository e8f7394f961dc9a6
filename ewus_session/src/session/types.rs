use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity and remote eWUS tokens carried by an authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub login_ewus: String,
    pub session_id: String,
    pub token_id: String,
}

/// The session record owned by the cookie
///
/// There is no server-side copy: the payload is created at sign-in, its
/// expiry is pushed forward on each authenticated request, and it is
/// destroyed at sign-out or natural expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub user_session: UserSession,
    pub expires: DateTime<Utc>,
}

impl SessionPayload {
    /// Wall-clock expiry check. Decoding already rejects expired tokens;
    /// callers re-check before trusting the other fields.
    pub fn is_expired(&self) -> bool {
        self.expires < Utc::now()
    }
}
