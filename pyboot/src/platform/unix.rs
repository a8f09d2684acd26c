//! Generic unix (Linux dev/test hosts): executable directory plus the XDG
//! data directory.

use std::path::PathBuf;

pub(super) fn native_library_dir() -> Option<PathBuf> {
    super::exe_dir()
}

/// `$XDG_DATA_HOME` or `~/.local/share`.
pub(super) fn support_dir() -> Option<PathBuf> {
    dirs::data_dir()
}
