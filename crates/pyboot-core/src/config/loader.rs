//! Centralized environment variable access.
//!
//! Reads go through the helpers here; writes go through [`set_env_var`] /
//! [`remove_env_var`]. Business code never calls `std::env::set_var`
//! directly.

use std::env;

/// Read an env var, treating empty or whitespace-only values as unset.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean env var: 0/false/no/off are false, anything else set is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key).ok().as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

// ─── Centralized env::set_var / remove_var wrappers ─────────────────────────
//
// SAFETY convention: callers set process environment on the main startup
// path, before any threads that read it are running.

/// Set a single environment variable (unsafe concentrated here).
#[allow(unsafe_code)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

/// Remove a single environment variable.
#[allow(unsafe_code)]
pub fn remove_env_var(key: &str) {
    unsafe { env::remove_var(key) };
}

/// RAII guard: removes the named env var on drop.
///
/// For tests and short-lived overrides that must not leak into the rest of
/// the process.
pub struct ScopedEnvGuard(pub &'static str);

impl Drop for ScopedEnvGuard {
    fn drop(&mut self) {
        remove_env_var(self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_optional_treats_blank_as_unset() {
        set_env_var("PYBOOT_TEST_BLANK", "   ");
        let _guard = ScopedEnvGuard("PYBOOT_TEST_BLANK");
        assert_eq!(env_optional("PYBOOT_TEST_BLANK"), None);
        assert_eq!(env_optional("PYBOOT_TEST_NEVER_SET"), None);
    }

    #[test]
    #[serial]
    fn env_optional_trims_value() {
        set_env_var("PYBOOT_TEST_TRIM", "  /some/path  ");
        let _guard = ScopedEnvGuard("PYBOOT_TEST_TRIM");
        assert_eq!(env_optional("PYBOOT_TEST_TRIM").as_deref(), Some("/some/path"));
    }

    #[test]
    #[serial]
    fn env_bool_parses_falsey_values() {
        let _guard = ScopedEnvGuard("PYBOOT_TEST_BOOL");
        for v in ["0", "false", "no", "off", "FALSE", "Off"] {
            set_env_var("PYBOOT_TEST_BOOL", v);
            assert!(!env_bool("PYBOOT_TEST_BOOL", true), "{v} should be false");
        }
        for v in ["1", "true", "yes", "anything"] {
            set_env_var("PYBOOT_TEST_BOOL", v);
            assert!(env_bool("PYBOOT_TEST_BOOL", false), "{v} should be true");
        }
    }

    #[test]
    #[serial]
    fn env_bool_default_when_unset() {
        assert!(env_bool("PYBOOT_TEST_BOOL_UNSET", true));
        assert!(!env_bool("PYBOOT_TEST_BOOL_UNSET", false));
    }

    #[test]
    #[serial]
    fn scoped_guard_removes_on_drop() {
        set_env_var("PYBOOT_TEST_GUARD", "1");
        {
            let _guard = ScopedEnvGuard("PYBOOT_TEST_GUARD");
            assert!(std::env::var("PYBOOT_TEST_GUARD").is_ok());
        }
        assert!(std::env::var("PYBOOT_TEST_GUARD").is_err());
    }
}
