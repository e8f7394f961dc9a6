use std::sync::LazyLock;

/// Base URL of the remote eWUS login service, e.g. `https://ewus.example.pl`
pub(crate) static EWUS_SERVER_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("EWUS_SERVER_BASE_URL").expect("EWUS_SERVER_BASE_URL must be set")
});

/// Outbound login request timeout in seconds
///
/// The remote call gets a bounded timeout; a timed-out attempt is treated as
/// a failed login.
/// Default: 30
pub(crate) static EWUS_LOGIN_TIMEOUT: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("EWUS_LOGIN_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30)
});
