//! `pyboot env`: print the bindings the bootstrap would publish, without
//! touching the filesystem or the process environment.

use std::path::Path;

use anyhow::Result;
use pyboot::bootstrap::resolve_with;
use pyboot::platform::HostPlatform;

pub fn cmd_env(json: bool, runtime_dir: Option<&Path>) -> Result<()> {
    let env = resolve_with(&HostPlatform, runtime_dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&env)?);
    } else {
        for (key, value) in env.bindings() {
            println!("{}={}", key, value.display());
        }
    }
    Ok(())
}
