//! CLI argument parsing

use campaigner_core::config::constants::defaults;
use campaigner_core::{CampaignGoal, Channel, Tone};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for campaigner
#[derive(Parser, Debug)]
#[command(
    name = "campaigner",
    version,
    about = "Generate complete marketing campaigns from a short brief with Gemini"
)]
pub struct Cli {
    /// API key environment variable to read (checks this, then GOOGLE_API_KEY)
    #[arg(long, global = true, default_value = defaults::DEFAULT_API_KEY_ENV)]
    pub api_key_env: String,

    /// Directory searched for campaigner.toml; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a campaign (default command)
    Generate(GenerateArgs),

    /// List the available goals, channels, and tones
    Options,

    /// Write a default campaigner.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the prompt that would be sent, without calling the model
    Prompt(BriefArgs),
}

/// The campaign brief, as flags
#[derive(Args, Debug, Clone, Default)]
pub struct BriefArgs {
    /// Brand name, e.g. "BrewMate"
    #[arg(long)]
    pub brand: Option<String>,

    /// Product or service description
    #[arg(long)]
    pub product: Option<String>,

    /// Target audience description
    #[arg(long)]
    pub audience: Option<String>,

    /// Campaign goal [default: product-launch]
    #[arg(long)]
    pub goal: Option<CampaignGoal>,

    /// Marketing channel; repeat for several, in order [default: instagram, email]
    #[arg(long = "channel", value_name = "CHANNEL")]
    pub channels: Vec<Channel>,

    /// Tone of voice [default: professional-friendly]
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Existing taglines, competitors, promotions, or constraints
    #[arg(long)]
    pub context: Option<String>,
}

impl BriefArgs {
    /// Brand, product, and audience were all given
    pub fn has_required_fields(&self) -> bool {
        [&self.brand, &self.product, &self.audience]
            .iter()
            .all(|field| field.as_deref().is_some_and(|value| !value.trim().is_empty()))
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub brief: BriefArgs,

    /// Directory for the Markdown export [default: from config, else "."]
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Do not write the Markdown file
    #[arg(long)]
    pub no_save: bool,

    /// Always fill in the brief through the interactive form
    #[arg(long, short)]
    pub interactive: bool,

    /// Print the generated text verbatim instead of rendering it
    #[arg(long)]
    pub raw: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["campaigner"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.api_key_env, "GEMINI_API_KEY");
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "campaigner",
            "generate",
            "--brand",
            "BrewMate",
            "--product",
            "cold brew kit",
            "--audience",
            "urban professionals 25-40",
            "--goal",
            "product-launch",
            "--channel",
            "email",
            "--channel",
            "Instagram",
            "--tone",
            "Playful & Witty",
            "--no-save",
        ])
        .unwrap();

        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.brief.brand.as_deref(), Some("BrewMate"));
        assert_eq!(args.brief.goal, Some(CampaignGoal::ProductLaunch));
        assert_eq!(args.brief.channels, vec![Channel::Email, Channel::Instagram]);
        assert_eq!(args.brief.tone, Some(Tone::PlayfulWitty));
        assert!(args.no_save);
        assert!(!args.raw);
        assert!(args.brief.has_required_fields());
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        let result = Cli::try_parse_from(["campaigner", "generate", "--channel", "myspace"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["campaigner", "init", "--force", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }

    #[test]
    fn test_blank_required_field_is_missing() {
        let args = BriefArgs {
            brand: Some("BrewMate".to_string()),
            product: Some("  ".to_string()),
            audience: Some("commuters".to_string()),
            ..BriefArgs::default()
        };
        assert!(!args.has_required_fields());
    }
}
