//! Config structs grouped by concern, loaded from the environment.

use std::path::PathBuf;

use super::env_keys::{observability as obv_keys, paths as path_keys};
use super::loader::{env_bool, env_optional};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(obv_keys::PYBOOT_QUIET, false),
            log_level: env_optional(obv_keys::PYBOOT_LOG_LEVEL)
                .unwrap_or_else(|| "pyboot=info".to_string()),
            log_json: env_bool(obv_keys::PYBOOT_LOG_JSON, false),
        }
    }
}

/// Working-directory override (`PYBOOT_RUNTIME_DIR`).
#[derive(Debug, Clone, Default)]
pub struct RuntimeDirConfig {
    pub runtime_dir: Option<PathBuf>,
}

impl RuntimeDirConfig {
    pub fn from_env() -> Self {
        Self {
            runtime_dir: env_optional(path_keys::PYBOOT_RUNTIME_DIR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::{set_env_var, ScopedEnvGuard};
    use serial_test::serial;

    #[test]
    #[serial]
    fn observability_defaults() {
        let cfg = ObservabilityConfig::from_env();
        assert!(!cfg.quiet);
        assert_eq!(cfg.log_level, "pyboot=info");
        assert!(!cfg.log_json);
    }

    #[test]
    #[serial]
    fn runtime_dir_override_read_from_env() {
        set_env_var("PYBOOT_RUNTIME_DIR", "/opt/app/py");
        let _guard = ScopedEnvGuard("PYBOOT_RUNTIME_DIR");
        let cfg = RuntimeDirConfig::from_env();
        assert_eq!(cfg.runtime_dir, Some(PathBuf::from("/opt/app/py")));
    }

    #[test]
    #[serial]
    fn runtime_dir_unset_is_none() {
        assert_eq!(RuntimeDirConfig::from_env().runtime_dir, None);
    }
}
