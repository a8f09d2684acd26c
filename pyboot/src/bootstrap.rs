//! The bootstrap sequence: resolve paths, ensure the working directory,
//! publish the interpreter environment.
//!
//! Runs once on the application's main startup path, before the embedded
//! interpreter starts. Every step is idempotent, so calling it again is
//! harmless: directory creation is skipped when the directory exists and the
//! environment bindings are overwritten, never merged.

use std::path::{Path, PathBuf};

use pyboot_core::config::{self, env_keys, RuntimeDirConfig};
use pyboot_core::error::BootstrapError;
use serde::Serialize;
use tracing::{debug, warn};

use crate::platform::{HostPlatform, PlatformPaths};

/// Fixed name of the writable working directory under the support root.
pub const RUNTIME_DIR_NAME: &str = "python-runtime";

/// Resolved interpreter environment.
///
/// Prefer handing this struct to the embedded-runtime initializer directly;
/// [`publish`] writes it into the process environment for runtimes that only
/// read env vars. Both paths are always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeEnv {
    /// `PYTHONHOME`: the native-library/bundle directory.
    pub python_home: PathBuf,
    /// `PYTHONPATH`: the writable working directory.
    pub python_path: PathBuf,
}

impl RuntimeEnv {
    /// The two key/value pairs this bootstrap publishes.
    pub fn bindings(&self) -> [(&'static str, &Path); 2] {
        [
            (env_keys::interpreter::PYTHONHOME, self.python_home.as_path()),
            (env_keys::interpreter::PYTHONPATH, self.python_path.as_path()),
        ]
    }
}

/// Resolve both paths without touching the filesystem or the environment
/// table. Honors the `PYBOOT_RUNTIME_DIR` override.
pub fn resolve(platform: &impl PlatformPaths) -> RuntimeEnv {
    resolve_with(platform, None)
}

/// [`resolve`] with an explicit working-directory override (CLI flag).
/// Override precedence: argument, then `PYBOOT_RUNTIME_DIR`, then
/// `<support-root>/python-runtime` with a temp-dir fallback.
pub fn resolve_with(
    platform: &impl PlatformPaths,
    runtime_dir_override: Option<&Path>,
) -> RuntimeEnv {
    let python_home = platform
        .native_library_dir()
        .or_else(crate::platform::exe_dir)
        .map(absolutize)
        .unwrap_or_else(std::env::temp_dir);

    let python_path = runtime_dir_override
        .map(|p| p.to_path_buf())
        .or_else(|| RuntimeDirConfig::from_env().runtime_dir)
        .map(absolutize)
        .unwrap_or_else(|| {
            platform
                .support_dir()
                .map(absolutize)
                .unwrap_or_else(std::env::temp_dir)
                .join(RUNTIME_DIR_NAME)
        });

    RuntimeEnv {
        python_home,
        python_path,
    }
}

/// Create the working directory (with intermediate directories) if missing.
/// Never destructive: an existing directory and its contents are left alone.
pub fn ensure_runtime_dir(env: &RuntimeEnv) -> Result<(), BootstrapError> {
    if env.python_path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(&env.python_path).map_err(|source| {
        BootstrapError::CreateRuntimeDir {
            path: env.python_path.clone(),
            source,
        }
    })
}

/// Overwrite `PYTHONHOME` / `PYTHONPATH` in the process environment.
pub fn publish(env: &RuntimeEnv) {
    for (key, value) in env.bindings() {
        config::set_env_var(key, &value.to_string_lossy());
    }
}

/// Full bootstrap against an explicit platform adapter.
///
/// Directory creation is best-effort: failure is logged and the environment
/// is published regardless, matching the contract that nothing here is
/// fatal. Downstream failures surface from the interpreter itself.
pub fn install(platform: &impl PlatformPaths) -> RuntimeEnv {
    install_with(platform, None)
}

/// [`install`] with an explicit working-directory override (CLI flag).
pub fn install_with(
    platform: &impl PlatformPaths,
    runtime_dir_override: Option<&Path>,
) -> RuntimeEnv {
    let env = resolve_with(platform, runtime_dir_override);
    if let Err(err) = ensure_runtime_dir(&env) {
        warn!("runtime working directory unavailable: {err}");
    }
    publish(&env);
    debug!(
        python_home = %env.python_home.display(),
        python_path = %env.python_path.display(),
        "interpreter environment published"
    );
    env
}

/// Full bootstrap for the current OS.
pub fn ensure_initialized() -> RuntimeEnv {
    install(&HostPlatform)
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }
}
