//! Central configuration for the ewus-session crate

use std::sync::LazyLock;

/// Route prefix for all ewus-session endpoints
///
/// This is the prefix under which the sign-in and sign-out endpoints are
/// mounted by the web layer.
/// Default: "/ewus"
pub static EWUS_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("EWUS_ROUTE_PREFIX").unwrap_or_else(|_| "/ewus".to_string()));
