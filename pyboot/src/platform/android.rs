//! Android: the native-library and files directories come from the host's
//! `Context` over JNI; Rust cannot discover them ambiently. Embedders
//! construct [`AndroidPaths`] with both values before calling the bootstrap.
//! The ambient lookups return `None`, so a host that forgot to do so still
//! gets the fallback paths instead of a crash.

use std::path::PathBuf;

use super::PlatformPaths;

pub(super) fn native_library_dir() -> Option<PathBuf> {
    None
}

pub(super) fn support_dir() -> Option<PathBuf> {
    None
}

/// Adapter for Android embedders holding `nativeLibraryDir` and `filesDir`
/// from the application `Context`.
#[derive(Debug, Clone)]
pub struct AndroidPaths {
    native_library_dir: PathBuf,
    files_dir: PathBuf,
}

impl AndroidPaths {
    pub fn new(native_library_dir: impl Into<PathBuf>, files_dir: impl Into<PathBuf>) -> Self {
        Self {
            native_library_dir: native_library_dir.into(),
            files_dir: files_dir.into(),
        }
    }
}

impl PlatformPaths for AndroidPaths {
    fn native_library_dir(&self) -> Option<PathBuf> {
        Some(self.native_library_dir.clone())
    }

    fn support_dir(&self) -> Option<PathBuf> {
        Some(self.files_dir.clone())
    }
}
