//! pyboot: prepares filesystem paths and process environment before a host
//! application starts an embedded Python interpreter.
//!
//! On startup the host calls [`bootstrap::ensure_initialized`] (or
//! [`bootstrap::install`] with an explicit [`platform::PlatformPaths`]
//! adapter). Afterwards `PYTHONHOME` points at the native-library/bundle
//! directory and `PYTHONPATH` at a writable `python-runtime` working
//! directory, which has been created if missing (best-effort).

pub mod bootstrap;
pub mod observability;
pub mod platform;

pub use bootstrap::{ensure_initialized, install, resolve, RuntimeEnv, RUNTIME_DIR_NAME};
pub use platform::{HostPlatform, PlatformPaths, StaticPaths};
