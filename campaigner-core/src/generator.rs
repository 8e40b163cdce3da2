//! Campaign generation: one brief in, one block of Markdown text out.

use crate::brief::CampaignBrief;
use crate::config::constants::{generation, models};
use crate::config::loader::GeminiConfig;
use crate::error::CampaignError;
use crate::llm::provider::{LLMProvider, LLMRequest};
use crate::llm::providers::GeminiProvider;
use crate::prompts::compose_generation_prompt;
use tracing::{info, warn};

/// Sampling parameters sent with every request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: models::google::DEFAULT_MODEL.to_string(),
            temperature: generation::TEMPERATURE,
            max_output_tokens: generation::MAX_OUTPUT_TOKENS,
        }
    }
}

/// Sends a campaign brief to the generation service.
///
/// Each call to [`CampaignGenerator::generate`] issues exactly one request
/// and returns the model text untouched. There is no retry, streaming, or
/// caching.
pub struct CampaignGenerator {
    provider: Box<dyn LLMProvider>,
    settings: GenerationSettings,
}

impl CampaignGenerator {
    /// Generator bound to Gemini's public endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, CampaignError> {
        Self::from_config(api_key, &GeminiConfig::default())
    }

    /// Generator bound to Gemini using the configured base URL
    pub fn from_config(
        api_key: impl Into<String>,
        config: &GeminiConfig,
    ) -> Result<Self, CampaignError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CampaignError::InvalidInput(
                "Please enter your Gemini API key.".to_string(),
            ));
        }

        let provider = GeminiProvider::from_config(Some(api_key), Some(config.base_url.clone()));
        Ok(Self::with_provider(Box::new(provider)))
    }

    /// Generator over any provider, using the fixed generation settings
    pub fn with_provider(provider: Box<dyn LLMProvider>) -> Self {
        Self {
            provider,
            settings: GenerationSettings::default(),
        }
    }

    /// Request the provider would receive for `brief`
    pub fn build_request(&self, brief: &CampaignBrief) -> LLMRequest {
        LLMRequest::single_prompt(&self.settings.model, compose_generation_prompt(brief))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_output_tokens)
    }

    /// Generate the campaign text for `brief`.
    ///
    /// The brief is not validated here; see [`CampaignBrief::validate`].
    /// Every provider failure collapses into [`CampaignError::Generation`].
    pub async fn generate(&self, brief: &CampaignBrief) -> Result<String, CampaignError> {
        let request = self.build_request(brief);

        if let Err(err) = self.provider.validate_request(&request) {
            warn!(kind = err.kind(), "generation request rejected before sending");
            return Err(err.into());
        }

        info!(
            provider = self.provider.name(),
            model = %self.settings.model,
            brand = %brief.brand_name,
            channels = brief.channels.len(),
            "generating campaign"
        );

        let response = match self.provider.generate(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(kind = err.kind(), "campaign generation failed");
                return Err(err.into());
            }
        };

        let text = response.content.unwrap_or_default();
        if text.is_empty() {
            return Err(CampaignError::Generation(
                "the model returned no text".to_string(),
            ));
        }

        info!(
            finish_reason = response.finish_reason.as_str(),
            chars = text.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "campaign generated"
        );

        Ok(text)
    }
}
