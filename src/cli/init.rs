use anyhow::{Context, Result};
use campaigner_core::config::CampaignerConfig;
use console::style;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!("{}", style("Initialize campaigner configuration").blue().bold());
    println!("Workspace: {}", workspace.display());

    let written = CampaignerConfig::bootstrap_project(workspace, force)
        .with_context(|| "failed to initialize configuration file")?;

    match written {
        Some(path) => println!("{} {}", style("Created").green(), path.display()),
        None => println!(
            "{}",
            style("campaigner.toml already exists; use --force to overwrite").yellow()
        ),
    }

    Ok(())
}
