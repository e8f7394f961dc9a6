//! Central configuration for the ewus-session-axum crate

use std::sync::LazyLock;

/// Where a successful sign-in lands
/// Default: "/"
pub static EWUS_REDIRECT_SIGNED_IN: LazyLock<String> = LazyLock::new(|| {
    std::env::var("EWUS_REDIRECT_SIGNED_IN").unwrap_or_else(|_| "/".to_string())
});

/// Where anonymous or signed-out users land
/// Default: "/login"
pub static EWUS_REDIRECT_ANON: LazyLock<String> =
    LazyLock::new(|| std::env::var("EWUS_REDIRECT_ANON").unwrap_or_else(|_| "/login".to_string()));
