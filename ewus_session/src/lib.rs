//! ewus-session - Cookie-based session flow for the eWUS login service
//!
//! This crate provides the session codec (encrypted, tamper-evident cookie
//! payloads with a rolling 10-minute expiry) and the coordination layer for
//! sign-in, sign-out, session retrieval, and sliding-expiry refresh against
//! a remote eWUS login endpoint. The server keeps no session state of its
//! own; the cookie is the single source of truth.

mod config;
mod coordination;
mod ewus;
mod session;
mod utils;

// Re-export the main coordination components
pub use coordination::{
    CoordinationError, MSG_INVALID_CREDENTIALS, MSG_SIGNIN_FAILED, SignInResult,
    get_session_core, refresh_session_core, signin_core, signout_core,
};

// Re-export the route prefix
pub use config::EWUS_ROUTE_PREFIX;

pub use ewus::{Credentials, EwusError, LoginResponse, SignInForm};

pub use session::{
    SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SessionError, SessionPayload, SessionSecret,
    UserSession, decrypt_session, encrypt_session, expired_session_headers,
    get_session_from_cookies, get_session_from_headers, new_session_headers,
    refresh_session_headers,
};
