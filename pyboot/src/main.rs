mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    pyboot::observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Env { json, runtime_dir } => commands::env::cmd_env(json, runtime_dir.as_deref()),
        Commands::Init { runtime_dir } => commands::init::cmd_init(runtime_dir.as_deref()),
    }
}
