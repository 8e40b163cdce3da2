//! # campaigner-core - marketing campaign generation
//!
//! `campaigner-core` turns a structured campaign brief into a prompt for a
//! hosted text-generation model and returns the model's Markdown reply.
//!
//! ## Architecture Overview
//!
//! - `brief`: the [`CampaignBrief`] record and its goal/channel/tone enums.
//! - `prompts`: the deterministic prompt builder.
//! - `llm/`: provider trait and the Gemini REST provider.
//! - `generator`: [`CampaignGenerator`], one request per brief.
//! - `config/`: constants, API key lookup, and `campaigner.toml` loading.
//! - `export`: Markdown file export named after the brand.
//! - `ui/`: spinner and terminal Markdown rendering.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use campaigner_core::{CampaignBrief, CampaignGenerator, Channel, Tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let brief = CampaignBrief::new("BrewMate", "cold brew kit", "urban professionals 25-40")
//!         .with_channels([Channel::Instagram, Channel::Email])
//!         .with_tone(Tone::PlayfulWitty);
//!     brief.validate()?;
//!
//!     let generator = CampaignGenerator::new(std::env::var("GEMINI_API_KEY")?)?;
//!     let campaign = generator.generate(&brief).await?;
//!     println!("{campaign}");
//!     Ok(())
//! }
//! ```

pub mod brief;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod llm;
pub mod prompts;
pub mod ui;

pub use brief::{CampaignBrief, CampaignGoal, Channel, Tone};
pub use config::{CampaignerConfig, ConfigManager};
pub use error::CampaignError;
pub use export::{campaign_file_name, export_markdown};
pub use generator::{CampaignGenerator, GenerationSettings};
pub use llm::{GeminiProvider, LLMError, LLMProvider};
pub use prompts::{build_campaign_prompt, compose_generation_prompt};
