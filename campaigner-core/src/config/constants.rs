/// Model ID constants for the generation service
pub mod models {
    pub mod google {
        /// Fast tier of the current Gemini generation
        pub const DEFAULT_MODEL: &str = GEMINI_2_0_FLASH;
        pub const SUPPORTED_MODELS: &[&str] = &[GEMINI_2_0_FLASH];

        pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
    }

    pub const GEMINI_2_0_FLASH: &str = google::GEMINI_2_0_FLASH;
}

/// Fixed sampling parameters for every campaign request
pub mod generation {
    pub const TEMPERATURE: f32 = 0.8;
    pub const MAX_OUTPUT_TOKENS: u32 = 3_000;
}

pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Environment variables consulted for credentials and logging
pub mod env_vars {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Default configuration values
pub mod defaults {
    use super::env_vars;

    pub const DEFAULT_API_KEY_ENV: &str = env_vars::GEMINI_API_KEY;
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const DEFAULT_OUTPUT_DIR: &str = ".";
    pub const DEFAULT_SAVE_MARKDOWN: bool = true;
}

/// Configuration file locations
pub mod config_files {
    pub const FILE_NAME: &str = "campaigner.toml";
    pub const DOT_DIR: &str = ".campaigner";
}

pub mod export {
    /// Appended to the brand name to form the Markdown file name
    pub const FILE_SUFFIX: &str = "_campaign.md";
}

pub mod ui {
    pub const SPINNER_MESSAGE: &str = "Crafting your campaign... This takes about 30 seconds.";
    pub const RESULT_HEADING: &str = "Your Generated Campaign";
}
