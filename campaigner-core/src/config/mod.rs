//! Configuration: constants, API key lookup, and campaigner.toml loading

pub mod api_keys;
pub mod constants;
pub mod loader;

pub use api_keys::{ApiKeySources, get_api_key, load_dotenv};
pub use loader::{CampaignerConfig, ConfigManager, GeminiConfig, LoggingConfig, OutputConfig};
