use crate::cli::{AppContext, GenerateArgs, form};
use anyhow::{Context, Result};
use campaigner_core::config::constants::ui as ui_text;
use campaigner_core::config::{ApiKeySources, get_api_key};
use campaigner_core::ui::{is_interactive, render_markdown, start_loading_spinner};
use campaigner_core::{CampaignGenerator, export_markdown};
use console::style;
use std::path::PathBuf;

/// Handle the generate command: collect, generate, render, export
pub async fn handle_generate_command(ctx: &AppContext, args: &GenerateArgs) -> Result<()> {
    let brief = form::collect_brief(&args.brief, args.interactive)?;
    let api_key = resolve_api_key(ctx)?;

    let generator = CampaignGenerator::from_config(api_key, &ctx.config.gemini)?;

    let spinner = start_loading_spinner(ui_text::SPINNER_MESSAGE, is_interactive());
    let result = generator.generate(&brief).await;
    spinner.finish_and_clear();
    let campaign = result.context("Error generating campaign")?;

    if is_interactive() {
        eprintln!("{}", style(ui_text::RESULT_HEADING).green().bold());
        eprintln!();
    }
    if args.raw {
        println!("{campaign}");
    } else {
        render_markdown(&campaign);
    }

    if let Some(directory) = export_directory(ctx, args) {
        let path = export_markdown(&directory, &brief.brand_name, &campaign)?;
        eprintln!(
            "{} {}",
            style("Saved campaign to").green(),
            style(path.display()).bold()
        );
    }

    Ok(())
}

/// Key from the environment or config file, else asked for when interactive
fn resolve_api_key(ctx: &AppContext) -> Result<String> {
    let sources = ApiKeySources::with_env(&ctx.api_key_env, ctx.config.gemini.api_key.clone());
    match get_api_key(&sources) {
        Ok(key) => Ok(key),
        Err(err) if is_interactive() => {
            tracing::debug!(error = %err, "prompting for API key");
            form::prompt_api_key()
        }
        Err(err) => Err(err),
    }
}

/// Where to write the Markdown file, or `None` when saving is off
fn export_directory(ctx: &AppContext, args: &GenerateArgs) -> Option<PathBuf> {
    if args.no_save || !ctx.config.output.save_markdown {
        return None;
    }
    let directory = args
        .output
        .clone()
        .unwrap_or_else(|| ctx.config.output.directory.clone());
    if directory.is_relative() {
        Some(ctx.workspace.join(directory))
    } else {
        Some(directory)
    }
}
