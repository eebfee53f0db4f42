//! Environment variable parsing with warn-level logging for invalid values.

/// Read an environment variable, treating blank values as unset.
fn env_value(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Parse an environment variable with a default fallback.
///
/// - Unset or blank: returns `default` silently.
/// - Set but unparsable: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Some(raw) = env_value(var) else {
        return default;
    };
    match raw.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(
                var,
                value = %raw,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}

/// String variant of [`env_parse_with_default`]; never warns.
pub(crate) fn env_string_with_default(var: &str, default: &str) -> String {
    env_value(var).unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    /// Serializes tests that mutate the process environment.
    pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn set_env(var: &str, value: &str) {
        // SAFETY: callers hold `env_lock()`, so no other test touches the environment.
        unsafe { std::env::set_var(var, value) };
    }

    pub(crate) fn remove_env(var: &str) {
        // SAFETY: callers hold `env_lock()`.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let _guard = env_lock();
        let var_name = "DASHBOARD_TEST_PARSE_VALID";
        set_env(var_name, "25");
        let result: usize = env_parse_with_default(var_name, 10);
        assert_eq!(result, 25);
        remove_env(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let _guard = env_lock();
        let var_name = "DASHBOARD_TEST_PARSE_INVALID";
        set_env(var_name, "banana");
        let result: usize = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        remove_env(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let _guard = env_lock();
        let var_name = "DASHBOARD_TEST_PARSE_MISSING";
        remove_env(var_name);
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 30);
    }

    #[test]
    fn test_env_string_blank_is_default() {
        let _guard = env_lock();
        let var_name = "DASHBOARD_TEST_STRING_BLANK";
        set_env(var_name, "   ");
        assert_eq!(env_string_with_default(var_name, "data"), "data");
        set_env(var_name, " http://localhost:5500/data ");
        assert_eq!(env_string_with_default(var_name, "data"), "http://localhost:5500/data");
        remove_env(var_name);
    }
}
