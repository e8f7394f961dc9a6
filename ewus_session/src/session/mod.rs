mod config;
mod errors;
mod main;
mod types;

pub use config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
pub use errors::SessionError;
pub use main::{
    SessionSecret, decrypt_session, encrypt_session, expired_session_headers,
    get_session_from_cookies, get_session_from_headers, new_session_headers,
    refresh_session_headers,
};
pub use types::{SessionPayload, UserSession};
