use crate::config::constants::{models, urls};
use crate::llm::provider::{
    FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Usage,
};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use std::fmt::Display;
use tracing::{debug, warn};

pub struct GeminiProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
}

impl GeminiProvider {
    /// Provider at `base_url`, or the public endpoint when `None`.
    /// The model comes with each request.
    pub fn from_config(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.unwrap_or_default(),
            http_client: HttpClient::new(),
            base_url: base_url
                .unwrap_or_else(|| urls::GEMINI_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

/// Plain error text tagged with the provider; styling is left to the caller
fn provider_error(message: impl Display) -> String {
    format!("Gemini: {message}")
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        let gemini_request = self.convert_to_gemini_format(&request)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, request.model, self.api_key
        );

        debug!(
            model = %request.model,
            prompt_chars = request.prompt_len(),
            "sending generateContent request"
        );

        let response = self
            .http_client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            // reqwest errors embed the URL, which carries the key
            .map_err(|e| LLMError::Network(provider_error(e.without_url())))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini request rejected");

            if status.as_u16() == 429
                || error_text.contains("RESOURCE_EXHAUSTED")
                || error_text.contains("quota")
            {
                return Err(LLMError::RateLimit);
            }

            if status.as_u16() == 401
                || status.as_u16() == 403
                || error_text.contains("API_KEY_INVALID")
            {
                return Err(LLMError::Authentication(provider_error(format!(
                    "HTTP {status}: {error_text}"
                ))));
            }

            return Err(LLMError::Provider(provider_error(format!(
                "HTTP {status}: {error_text}"
            ))));
        }

        let gemini_response: Value = response.json().await.map_err(|e| {
            LLMError::Provider(provider_error(format!(
                "Failed to parse response: {}",
                e.without_url()
            )))
        })?;

        self.convert_from_gemini_format(gemini_response)
    }

    fn supported_models(&self) -> Vec<String> {
        models::google::SUPPORTED_MODELS
            .iter()
            .map(|model| model.to_string())
            .collect()
    }

    fn validate_request(&self, request: &LLMRequest) -> Result<(), LLMError> {
        if !self.supported_models().contains(&request.model) {
            return Err(LLMError::InvalidRequest(provider_error(format!(
                "Unsupported model: {}",
                request.model
            ))));
        }
        if request.messages.is_empty() {
            return Err(LLMError::InvalidRequest(provider_error(
                "Request has no messages",
            )));
        }
        Ok(())
    }
}

impl GeminiProvider {
    pub(crate) fn convert_to_gemini_format(&self, request: &LLMRequest) -> Result<Value, LLMError> {
        let mut contents = Vec::new();

        for message in &request.messages {
            if message.content.is_empty() {
                continue;
            }

            contents.push(json!({
                "role": message.role.as_gemini_str(),
                "parts": [{"text": message.content}]
            }));
        }

        let mut gemini_request = json!({
            "contents": contents
        });

        let mut generation_config = serde_json::Map::new();
        if let Some(temperature) = request.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(max_tokens) = request.max_tokens {
            generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
        }
        if !generation_config.is_empty() {
            gemini_request["generationConfig"] = Value::Object(generation_config);
        }

        Ok(gemini_request)
    }

    /// Extract the candidate text.
    ///
    /// A blocked prompt, a missing candidate, or a candidate without any text
    /// is an error: callers never receive partial or empty output.
    pub(crate) fn convert_from_gemini_format(
        &self,
        response: Value,
    ) -> Result<LLMResponse, LLMError> {
        if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
            return Err(LLMError::Provider(provider_error(format!(
                "Prompt blocked: {reason}"
            ))));
        }

        let candidates = response["candidates"]
            .as_array()
            .ok_or_else(|| LLMError::Provider(provider_error("No candidates in response")))?;

        let candidate = candidates
            .first()
            .ok_or_else(|| LLMError::Provider(provider_error("No candidate in response")))?;

        let finish_reason = match candidate["finishReason"].as_str() {
            Some("STOP") => FinishReason::Stop,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST")
            | Some("PROHIBITED_CONTENT") => FinishReason::ContentFilter,
            Some(other) => FinishReason::Error(other.to_string()),
            None => FinishReason::Stop,
        };

        let mut text_content = String::new();
        if let Some(parts) = candidate["content"]["parts"].as_array() {
            for part in parts {
                if let Some(text) = part["text"].as_str() {
                    text_content.push_str(text);
                }
            }
        }

        if text_content.is_empty() {
            return Err(LLMError::Provider(provider_error(format!(
                "Response contained no text (finish reason: {})",
                finish_reason.as_str()
            ))));
        }

        let usage = response.get("usageMetadata").map(|meta| Usage {
            prompt_tokens: meta["promptTokenCount"].as_u64().unwrap_or(0) as u32,
            completion_tokens: meta["candidatesTokenCount"].as_u64().unwrap_or(0) as u32,
            total_tokens: meta["totalTokenCount"].as_u64().unwrap_or(0) as u32,
        });

        Ok(LLMResponse {
            content: Some(text_content),
            usage,
            finish_reason,
        })
    }
}
