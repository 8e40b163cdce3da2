//! # LLM Integration Layer
//!
//! A small provider abstraction over the hosted text-generation service.
//! [`LLMProvider`] is the seam the campaign generator talks to; the
//! [`GeminiProvider`] implements it against the Generative Language REST API.
//!
//! One call, one response: providers here never retry, stream, or cache.

pub mod provider;
pub mod providers;

pub use provider::{
    FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Message, MessageRole, Usage,
};
pub use providers::GeminiProvider;
