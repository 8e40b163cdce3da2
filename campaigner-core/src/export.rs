//! Markdown export of generated campaigns

use crate::config::constants::export;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name for a brand's campaign, e.g. `BrewMate_campaign.md`.
///
/// Characters that cannot appear in a file name on common platforms are
/// replaced with `_`.
pub fn campaign_file_name(brand_name: &str) -> String {
    let sanitized: String = brand_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        "campaign".to_string()
    } else {
        sanitized
    };
    format!("{stem}{}", export::FILE_SUFFIX)
}

/// Write `text` to `{directory}/{brand}_campaign.md`, creating the directory
/// when needed. Existing files are overwritten. Returns the written path.
pub fn export_markdown(directory: &Path, brand_name: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(directory).with_context(|| {
        format!("Failed to create output directory: {}", directory.display())
    })?;

    let path = directory.join(campaign_file_name(brand_name));
    fs::write(&path, text)
        .with_context(|| format!("Failed to write campaign file: {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = text.len(), "campaign exported");
    Ok(path)
}
