use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pyboot - prepare PYTHONHOME/PYTHONPATH for an embedded Python runtime
#[derive(Parser, Debug)]
#[command(name = "pyboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the environment the bootstrap would publish (no side effects)
    Env {
        /// Print as JSON instead of KEY=value lines
        #[arg(long, default_value = "false")]
        json: bool,

        /// Custom runtime working directory
        #[arg(long, value_name = "DIR", env = "PYBOOT_RUNTIME_DIR")]
        runtime_dir: Option<PathBuf>,
    },

    /// Run the bootstrap: create the runtime directory and publish env
    Init {
        /// Custom runtime working directory
        #[arg(long, value_name = "DIR", env = "PYBOOT_RUNTIME_DIR")]
        runtime_dir: Option<PathBuf>,
    },
}
