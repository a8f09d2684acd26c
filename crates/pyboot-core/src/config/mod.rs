//! Unified configuration layer.
//!
//! All environment variable access is centralized in this module; business
//! code goes through structured config instead of raw `std::env::var`.
//!
//! - `loader`: env_optional, env_bool helpers plus the set/remove wrappers
//! - `schema`: ObservabilityConfig, RuntimeDirConfig
//! - `env_keys`: key constants (published keys and `PYBOOT_*` keys)

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, remove_env_var, set_env_var, ScopedEnvGuard};
pub use schema::{ObservabilityConfig, RuntimeDirConfig};
