//! Windows lookups: everything anchors at the executable's directory, so the
//! runtime working directory lands next to the installed binary.

use std::path::PathBuf;

pub(super) fn native_library_dir() -> Option<PathBuf> {
    super::exe_dir()
}

pub(super) fn support_dir() -> Option<PathBuf> {
    super::exe_dir()
}
