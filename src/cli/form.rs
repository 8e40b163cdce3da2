//! Collects the campaign brief from flags or an interactive form
//!
//! Everything the form prints goes to stderr, the same stream dialoguer draws
//! on, so stdout carries only the prompt or campaign.

use crate::cli::BriefArgs;
use anyhow::{Result, bail};
use campaigner_core::ui::is_interactive;
use campaigner_core::{CampaignBrief, CampaignGoal, Channel, Tone};
use console::{Term, style};
use dialoguer::{Input, MultiSelect, Password, Select, Sort};
use std::io::Write;

/// Brief built from flags alone; unset optional fields take the form defaults
pub fn brief_from_args(args: &BriefArgs) -> CampaignBrief {
    let mut brief = CampaignBrief::new(
        args.brand.clone().unwrap_or_default(),
        args.product.clone().unwrap_or_default(),
        args.audience.clone().unwrap_or_default(),
    )
    .with_goal(args.goal.unwrap_or_default())
    .with_tone(args.tone.unwrap_or_default())
    .with_additional_context(args.context.clone());

    if !args.channels.is_empty() {
        brief = brief.with_channels(args.channels.iter().copied());
    }
    brief
}

/// Produce a validated brief.
///
/// The form runs when `force_form` is set or a required flag is missing, as
/// long as the session is interactive. Otherwise the flags must be complete.
pub fn collect_brief(args: &BriefArgs, force_form: bool) -> Result<CampaignBrief> {
    collect_brief_with(args, force_form, is_interactive(), prompt_brief)
}

fn collect_brief_with(
    args: &BriefArgs,
    force_form: bool,
    interactive: bool,
    form: impl FnOnce(CampaignBrief) -> Result<CampaignBrief>,
) -> Result<CampaignBrief> {
    let brief = brief_from_args(args);

    if !force_form && args.has_required_fields() {
        brief.validate()?;
        return Ok(brief);
    }

    if !interactive {
        if force_form {
            bail!("--interactive needs a terminal");
        }
        brief.validate()?;
        return Ok(brief);
    }

    form(brief)
}

/// Ask for every field, pre-filled from `defaults`, until the brief validates
pub fn prompt_brief(defaults: CampaignBrief) -> Result<CampaignBrief> {
    let mut term = Term::stderr();
    write_form_intro(&mut term)?;

    let mut brief = defaults;
    loop {
        brief = prompt_once(&brief)?;
        match brief.validate() {
            Ok(()) => return Ok(brief),
            Err(err) => write_retry_notice(&mut term, &err.to_string())?,
        }
    }
}

fn write_form_intro(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", style("Campaign Brief").cyan().bold())?;
    writeln!(
        out,
        "{}",
        style("Fill in your campaign details. Required fields cannot be left empty.").dim()
    )?;
    writeln!(out)?;
    Ok(())
}

fn write_retry_notice(out: &mut impl Write, message: &str) -> Result<()> {
    writeln!(out, "{}", style(message).yellow())?;
    writeln!(out)?;
    Ok(())
}

fn prompt_once(current: &CampaignBrief) -> Result<CampaignBrief> {
    let brand_name = prompt_text("Brand Name", "e.g., BrewMate", &current.brand_name)?;
    let product_description = prompt_text(
        "Product/Service Description",
        "e.g., A premium cold brew coffee maker that makes cafe-quality coffee at home",
        &current.product_description,
    )?;
    let target_audience = prompt_text(
        "Target Audience",
        "e.g., Young professionals aged 25-35 who love coffee",
        &current.target_audience,
    )?;

    let goal_labels: Vec<&str> = CampaignGoal::ALL.iter().map(|goal| goal.label()).collect();
    let goal_index = Select::new()
        .with_prompt("Campaign Goal")
        .items(&goal_labels)
        .default(index_of(&CampaignGoal::ALL, &current.campaign_goal))
        .interact()?;

    let channels = prompt_channels(&current.channels)?;

    let tone_labels: Vec<&str> = Tone::ALL.iter().map(|tone| tone.label()).collect();
    let tone_index = Select::new()
        .with_prompt("Brand Tone")
        .items(&tone_labels)
        .default(index_of(&Tone::ALL, &current.tone))
        .interact()?;

    let context = prompt_text(
        "Additional Context (optional)",
        "existing taglines, competitors, promotions, constraints",
        current.context().unwrap_or_default(),
    )?;

    Ok(
        CampaignBrief::new(brand_name, product_description, target_audience)
            .with_goal(CampaignGoal::ALL[goal_index])
            .with_channels(channels)
            .with_tone(Tone::ALL[tone_index])
            .with_additional_context(Some(context)),
    )
}

/// Pick channels, then put them in order when more than one is chosen
fn prompt_channels(previous: &[Channel]) -> Result<Vec<Channel>> {
    let labels: Vec<&str> = Channel::ALL.iter().map(|channel| channel.label()).collect();
    let checked: Vec<bool> = Channel::ALL
        .iter()
        .map(|channel| previous.contains(channel))
        .collect();
    let indices = MultiSelect::new()
        .with_prompt("Marketing Channels (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    let picked = keep_previous_order(
        indices.into_iter().map(|index| Channel::ALL[index]).collect(),
        previous,
    );
    if picked.len() < 2 {
        return Ok(picked);
    }

    let picked_labels: Vec<&str> = picked.iter().map(|channel| channel.label()).collect();
    let order = Sort::new()
        .with_prompt("Channel order (space to grab, arrows to move, enter to confirm)")
        .items(&picked_labels)
        .interact()?;
    Ok(order.into_iter().map(|index| picked[index]).collect())
}

/// Channels that were already chosen keep their earlier position; new ones
/// follow in catalogue order
fn keep_previous_order(mut picked: Vec<Channel>, previous: &[Channel]) -> Vec<Channel> {
    picked.sort_by_key(|channel| {
        previous
            .iter()
            .position(|prev| prev == channel)
            .unwrap_or(previous.len())
    });
    picked
}

fn prompt_text(label: &str, hint: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("{label} {}", style(format!("({hint})")).dim()))
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn index_of<T: PartialEq>(all: &[T], value: &T) -> usize {
    all.iter().position(|item| item == value).unwrap_or(0)
}

/// Hidden entry for the Gemini API key
pub fn prompt_api_key() -> Result<String> {
    write_missing_key_notice(&mut Term::stderr())?;
    let key = Password::new()
        .with_prompt("Gemini API Key (get one at https://aistudio.google.com/app/apikey)")
        .interact()?;
    Ok(key.trim().to_string())
}

fn write_missing_key_notice(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{}",
        style("No Gemini API key found in the environment or configuration.").yellow()
    )?;
    Ok(())
}
