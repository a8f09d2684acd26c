//! Platform adapters: where the native libraries live and where the app may
//! write.
//!
//! The bootstrap is parameterized over [`PlatformPaths`] so each OS only
//! contributes these two lookups. Hosts that already know the directories
//! (an Android embedder receiving them over JNI, a test) use [`StaticPaths`]
//! or `AndroidPaths` instead of the ambient [`HostPlatform`].

use std::path::PathBuf;

/// The two capabilities the bootstrap needs from the OS.
pub trait PlatformPaths {
    /// Directory containing the app's installed native code and bundled
    /// resources. `None` when the platform cannot report one.
    fn native_library_dir(&self) -> Option<PathBuf>;

    /// First writable, user-domain, app-support-class directory.
    /// `None` triggers the temp-dir fallback in the bootstrap.
    fn support_dir(&self) -> Option<PathBuf>;
}

/// Explicit adapter for hosts (and tests) that already know both paths.
#[derive(Debug, Clone, Default)]
pub struct StaticPaths {
    pub native_library_dir: Option<PathBuf>,
    pub support_dir: Option<PathBuf>,
}

impl PlatformPaths for StaticPaths {
    fn native_library_dir(&self) -> Option<PathBuf> {
        self.native_library_dir.clone()
    }

    fn support_dir(&self) -> Option<PathBuf> {
        self.support_dir.clone()
    }
}

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub use android::AndroidPaths;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod apple;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
mod unix;

#[cfg(target_os = "android")]
use android as host;
#[cfg(any(target_os = "macos", target_os = "ios"))]
use apple as host;
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
use unix as host;
#[cfg(target_os = "windows")]
use windows as host;

/// Ambient adapter for the current OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformPaths for HostPlatform {
    fn native_library_dir(&self) -> Option<PathBuf> {
        host::native_library_dir()
    }

    fn support_dir(&self) -> Option<PathBuf> {
        host::support_dir()
    }
}

/// Directory holding the running executable.
pub(crate) fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_reports_what_it_holds() {
        let paths = StaticPaths {
            native_library_dir: Some(PathBuf::from("/app/lib")),
            support_dir: None,
        };
        assert_eq!(paths.native_library_dir(), Some(PathBuf::from("/app/lib")));
        assert_eq!(paths.support_dir(), None);
    }

    #[test]
    fn exe_dir_is_absolute() {
        let dir = exe_dir().expect("test binary has a parent directory");
        assert!(dir.is_absolute());
    }
}
