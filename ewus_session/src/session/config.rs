use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("session".to_string())
});

pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(600) // Default to the 10-minute rolling window
});

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    /// Helper function to set an environment variable for the duration of the
    /// test and restore the original value afterward.
    fn with_env_var<F, R>(key: &str, value: Option<&str>, test: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var(key).ok();

        match value {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        let result = test();

        match original {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        result
    }

    #[test]
    #[serial]
    fn test_parse_session_cookie_name() {
        // Test default value
        with_env_var("SESSION_COOKIE_NAME", None, || {
            let default_value = env::var("SESSION_COOKIE_NAME")
                .ok()
                .unwrap_or("session".to_string());
            assert_eq!(default_value, "session");
        });

        // Test custom value
        with_env_var("SESSION_COOKIE_NAME", Some("CustomSessionId"), || {
            let custom_value = env::var("SESSION_COOKIE_NAME")
                .ok()
                .unwrap_or("session".to_string());
            assert_eq!(custom_value, "CustomSessionId");
        });
    }

    #[test]
    #[serial]
    fn test_parse_session_cookie_max_age() {
        // Test default value
        with_env_var("SESSION_COOKIE_MAX_AGE", None, || {
            let default_value: u64 = env::var("SESSION_COOKIE_MAX_AGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600);
            assert_eq!(default_value, 600); // 10 minutes
        });

        // Test custom value
        with_env_var("SESSION_COOKIE_MAX_AGE", Some("1800"), || {
            let custom_value: u64 = env::var("SESSION_COOKIE_MAX_AGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600);
            assert_eq!(custom_value, 1800); // 30 minutes
        });

        // Test invalid value
        with_env_var("SESSION_COOKIE_MAX_AGE", Some("invalid"), || {
            let invalid_value: u64 = env::var("SESSION_COOKIE_MAX_AGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600);
            assert_eq!(invalid_value, 600); // Should fall back to default
        });
    }
}
