//! Campaigner - marketing campaign generator
//!
//! Collects a campaign brief from flags or an interactive form, sends it to
//! Gemini, and renders the generated campaign as Markdown.

use anyhow::{Context, Result};
use campaigner_core::config::constants::{defaults, env_vars};
use campaigner_core::config::{CampaignerConfig, ConfigManager, load_dotenv};
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{AppContext, Cli, Commands, GenerateArgs};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", style(format!("{err:#}")).red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    load_dotenv()?;
    let args = Cli::parse();

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let workspace = match &args.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("cannot determine current dir")?,
    };

    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)?,
    };

    init_tracing(args.log_level.as_deref(), manager.config());
    if let Some(path) = manager.config_path() {
        tracing::debug!(path = %path.display(), "using configuration file");
    }

    let ctx = AppContext {
        workspace,
        config: manager.config().clone(),
        api_key_env: args.api_key_env.clone(),
    };

    match args.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(generate) => cli::handle_generate_command(&ctx, &generate).await,
        Commands::Options => {
            cli::handle_options_command();
            Ok(())
        }
        Commands::Init { force } => cli::handle_init_command(&ctx.workspace, force),
        Commands::Prompt(brief) => cli::handle_prompt_command(&brief),
    }
}

/// Logs go to stderr; stdout carries only the campaign.
fn init_tracing(cli_level: Option<&str>, config: &CampaignerConfig) {
    let directive = select_filter(
        cli_level,
        std::env::var(env_vars::RUST_LOG).ok(),
        &config.logging.level,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!(
            "{}",
            style(format!("Ignoring log filter '{directive}': {err}")).yellow()
        );
        EnvFilter::new(defaults::DEFAULT_LOG_LEVEL)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter directive by precedence: `--log-level`, then `RUST_LOG`, then
/// `[logging] level`. Blank values are skipped.
fn select_filter(cli: Option<&str>, env: Option<String>, config: &str) -> String {
    cli.map(str::to_string)
        .filter(|level| !level.trim().is_empty())
        .or_else(|| env.filter(|level| !level.trim().is_empty()))
        .unwrap_or_else(|| config.to_string())
}
