//! Prompt construction for campaign generation

pub mod campaign;

pub use campaign::{
    SECTION_HEADERS, SYSTEM_CONTEXT, build_campaign_prompt, compose_generation_prompt,
};
