//! `pyboot init`: run the full bootstrap on this host.

use std::path::Path;

use anyhow::Result;
use pyboot::bootstrap::install_with;
use pyboot::platform::HostPlatform;

pub fn cmd_init(runtime_dir: Option<&Path>) -> Result<()> {
    let env = install_with(&HostPlatform, runtime_dir);

    eprintln!("✓ runtime directory: {}", env.python_path.display());
    for (key, value) in env.bindings() {
        eprintln!("  • {}={}", key, value.display());
    }
    Ok(())
}
