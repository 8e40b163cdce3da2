//! Command-line interface module
//!
//! Argument parsing, the interactive brief form, and one handler per
//! subcommand.

pub mod args;
pub mod form;
pub mod generate;
pub mod init;
pub mod options;
pub mod prompt;

pub use args::*;
pub use generate::handle_generate_command;
pub use init::handle_init_command;
pub use options::handle_options_command;
pub use prompt::handle_prompt_command;

use campaigner_core::config::CampaignerConfig;
use std::path::PathBuf;

/// Settings shared by every command after startup
#[derive(Debug, Clone)]
pub struct AppContext {
    pub workspace: PathBuf,
    pub config: CampaignerConfig,
    /// Environment variable checked first for the Gemini API key
    pub api_key_env: String,
}
