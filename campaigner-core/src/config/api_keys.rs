//! API key retrieval from environment variables, .env files, and the
//! configuration file.
//!
//! Environment variables take precedence over the configuration file so that
//! a key never has to be written to disk.

use crate::config::constants::env_vars;
use anyhow::Result;
use std::env;

/// Where to look for the Gemini API key
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// Primary environment variable name
    pub gemini_env: String,
    /// Key from the configuration file
    pub gemini_config: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            gemini_env: env_vars::GEMINI_API_KEY.to_string(),
            gemini_config: None,
        }
    }
}

impl ApiKeySources {
    /// Sources using a custom environment variable name
    pub fn with_env(env_var: impl Into<String>, config_value: Option<String>) -> Self {
        Self {
            gemini_env: env_var.into(),
            gemini_config: config_value,
        }
    }
}

/// Load environment variables from a .env file in the current directory.
///
/// A missing file is not an error; an unreadable one is logged and skipped.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment from .env");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load .env file");
            Ok(())
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Get the Gemini API key.
///
/// Order: the configured environment variable, then `GOOGLE_API_KEY`, then
/// the configuration file value.
pub fn get_api_key(sources: &ApiKeySources) -> Result<String> {
    if let Some(key) = non_empty_var(&sources.gemini_env) {
        return Ok(key);
    }

    if let Some(key) = non_empty_var(env_vars::GOOGLE_API_KEY) {
        return Ok(key);
    }

    if let Some(key) = &sources.gemini_config {
        if !key.trim().is_empty() {
            return Ok(key.clone());
        }
    }

    Err(anyhow::anyhow!(
        "No API key found for Gemini. Set {} or {} (or add it to a .env file) or configure [gemini] api_key in campaigner.toml",
        sources.gemini_env,
        env_vars::GOOGLE_API_KEY
    ))
}
