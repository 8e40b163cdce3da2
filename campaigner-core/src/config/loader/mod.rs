use crate::config::constants::{config_files, defaults, urls};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Generation service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key used when no environment variable is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    urls::GEMINI_API_BASE.to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

/// Markdown export settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory campaign files are written to
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// Save every generated campaign as Markdown
    #[serde(default = "default_save_markdown")]
    pub save_markdown: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_OUTPUT_DIR)
}

fn default_save_markdown() -> bool {
    defaults::DEFAULT_SAVE_MARKDOWN
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_markdown: default_save_markdown(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// tracing filter directive (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    defaults::DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Contents of campaigner.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CampaignerConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CampaignerConfig {
    /// Write a default campaigner.toml into `workspace`.
    ///
    /// Returns the written path, or `None` when a file already exists and
    /// `force` is not set.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Option<PathBuf>> {
        let config_path = workspace.as_ref().join(config_files::FILE_NAME);
        if config_path.exists() && !force {
            return Ok(None);
        }
        Self::create_sample_config(&config_path)?;
        Ok(Some(config_path))
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let config_content = toml::to_string_pretty(&CampaignerConfig::default())
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Loads campaigner.toml from the usual locations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: CampaignerConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }
        dirs::home_dir()
    }

    /// Search the workspace, then its dot directory, then the home directory.
    /// Falls back to defaults when no file exists.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(config_files::FILE_NAME),
            workspace
                .join(config_files::DOT_DIR)
                .join(config_files::FILE_NAME),
        ];
        if let Some(home_dir) = Self::get_home_dir() {
            candidates.push(
                home_dir
                    .join(config_files::DOT_DIR)
                    .join(config_files::FILE_NAME),
            );
        }

        for path in candidates {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        tracing::debug!(workspace = %workspace.display(), "no campaigner.toml found; using defaults");
        Ok(Self {
            config: CampaignerConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CampaignerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> &CampaignerConfig {
        &self.config
    }

    /// Path of the loaded file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
