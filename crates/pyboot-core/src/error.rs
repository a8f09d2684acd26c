//! Bootstrap error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures the bootstrap can hit. Directory creation is the only fallible
/// step; the top-level install path logs it and proceeds.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to create runtime directory {path}: {source}")]
    CreateRuntimeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
