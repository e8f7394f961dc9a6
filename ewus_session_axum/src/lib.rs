//! Axum integration for the ewus-session flow
//!
//! Provides the sign-in/sign-out router, the [`AuthSession`] extractor, the
//! sliding-expiry [`refresh_session`] middleware, and a minimal login page.

mod config;
mod error;
mod middleware;
mod pages;
mod router;
mod session;
mod signin;

pub use config::{EWUS_REDIRECT_ANON, EWUS_REDIRECT_SIGNED_IN};
pub use middleware::refresh_session;
pub use pages::login_page;
pub use router::ewus_session_router;
pub use session::AuthSession;

// Re-export the route prefix from the core crate
pub use ewus_session::EWUS_ROUTE_PREFIX;
