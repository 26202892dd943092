mod cli;
mod extract;
mod launch;
mod split;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{bail, Context};
use tracing::{info, warn};

use cli::get_args;
use extract::extract_configurations;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("launch_converter=info")),
        )
        .init();

    let cli = get_args();
    if cli.projects.is_empty() {
        bail!("use one or more directories with existing GoLand projects as arguments");
    }

    for dir in &cli.projects {
        convert_project(dir)?;
    }

    Ok(())
}

fn convert_project(dir: &Path) -> anyhow::Result<()> {
    if !is_directory(dir)? {
        warn!("argument {} is not a directory, skipped", dir.display());
        return Ok(());
    }

    let workspace_file = dir.join(".idea/workspace.xml");
    if !file_exists(&workspace_file)? {
        warn!("file {} does not exist, skipped", workspace_file.display());
        return Ok(());
    }
    info!("found GoLand configuration {}", workspace_file.display());

    let reader = BufReader::new(
        File::open(&workspace_file)
            .with_context(|| format!("failed to open {}", workspace_file.display()))?,
    );
    let document = extract_configurations(reader)
        .with_context(|| format!("failed while converting {}", workspace_file.display()))?;

    let vscode_dir = dir.join(".vscode");
    if !is_directory(&vscode_dir)? {
        info!("VS Code dir {} does not exist, creating", vscode_dir.display());
        fs::create_dir(&vscode_dir)
            .with_context(|| format!("failed to create {}", vscode_dir.display()))?;
    }

    let launch_file = vscode_dir.join("launch.json");
    let output = File::create(&launch_file)
        .with_context(|| format!("failed to create {}", launch_file.display()))?;
    serde_json::to_writer_pretty(output, &document)
        .with_context(|| format!("failed to write {}", launch_file.display()))?;
    info!("file written to {}", launch_file.display());

    Ok(())
}

/// A missing path is not a directory; any other stat failure is fatal for
/// the whole run.
fn is_directory(path: &Path) -> anyhow::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("failed to stat {}", path.display())),
    }
}

fn file_exists(path: &Path) -> anyhow::Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("failed to stat {}", path.display())),
    }
}
