use std::path::PathBuf;

use clap::Parser;

/// Convert GoLand run configurations to VS Code launch configurations.
#[derive(Parser, Debug)]
#[command(name = "launch-converter", version)]
pub struct Cli {
    /// Project directories containing a .idea/workspace.xml to convert.
    pub projects: Vec<PathBuf>,
}

pub fn get_args() -> Cli {
    Cli::parse()
}
