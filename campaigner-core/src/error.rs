//! Error types surfaced at the core boundary

use crate::llm::provider::LLMError;

/// Failure of a single campaign request.
///
/// Provider failures keep their category in [`LLMError`] for logging, but
/// callers only ever see the collapsed [`CampaignError::Generation`] variant.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Campaign generation failed: {0}")]
    Generation(String),
}

impl From<LLMError> for CampaignError {
    fn from(err: LLMError) -> Self {
        CampaignError::Generation(err.to_string())
    }
}

impl CampaignError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CampaignError::InvalidInput(_))
    }
}
