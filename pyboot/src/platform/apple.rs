//! macOS / iOS lookups: bundle root and the user-domain Application Support
//! directory.

use std::path::PathBuf;

/// Bundle root. On macOS the executable sits at
/// `Name.app/Contents/MacOS/exe`; on iOS it sits directly in the bundle.
pub(super) fn native_library_dir() -> Option<PathBuf> {
    let exe_dir = super::exe_dir()?;
    #[cfg(target_os = "macos")]
    {
        if exe_dir.ends_with("Contents/MacOS") {
            if let Some(bundle) = exe_dir.parent().and_then(|p| p.parent()) {
                return Some(bundle.to_path_buf());
            }
        }
    }
    Some(exe_dir)
}

/// `~/Library/Application Support` (sandboxed equivalent inside containers).
pub(super) fn support_dir() -> Option<PathBuf> {
    dirs::data_dir()
}
