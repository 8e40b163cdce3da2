use crate::cli::{BriefArgs, form};
use anyhow::Result;
use campaigner_core::compose_generation_prompt;

/// Handle the prompt command: print the exact text the model would receive
pub fn handle_prompt_command(args: &BriefArgs) -> Result<()> {
    let brief = form::collect_brief(args, false)?;
    tracing::debug!(brand = %brief.brand_name, "printing prompt without generating");
    println!("{}", compose_generation_prompt(&brief));
    Ok(())
}
