//! Campaign prompt builder
//!
//! Renders a [`CampaignBrief`] into the instruction text sent to the model.
//! Only the brief-derived lines vary; the preamble and task instructions are
//! fixed, so identical briefs always produce byte-identical prompts.

use crate::brief::CampaignBrief;

/// Strategist persona prepended to every request
pub const SYSTEM_CONTEXT: &str = "You are a world-class marketing strategist who creates compelling, \
conversion-focused campaigns. You write copy that connects emotionally with audiences while driving action.";

const PREAMBLE: &str = "You are an expert marketing strategist and copywriter.\n\
Create a comprehensive marketing campaign based on the following brief:";

/// Headers of the five output sections the model is asked for
pub const SECTION_HEADERS: [&str; 5] = [
    "CAMPAIGN STRATEGY",
    "AD COPY",
    "HASHTAGS & KEYWORDS",
    "CREATIVE CONCEPTS",
    "CONTENT CALENDAR",
];

/// Build the campaign prompt for a brief.
///
/// Performs no validation: an empty channel list renders as an empty list.
pub fn build_campaign_prompt(brief: &CampaignBrief) -> String {
    let channels = brief.channel_list();
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n## BRAND & PRODUCT\n");
    prompt.push_str(&format!("- **Brand Name:** {}\n", brief.brand_name));
    prompt.push_str(&format!(
        "- **Product/Service:** {}\n",
        brief.product_description
    ));

    prompt.push_str("\n## TARGET AUDIENCE\n");
    prompt.push_str(&brief.target_audience);
    prompt.push('\n');

    prompt.push_str("\n## CAMPAIGN DETAILS\n");
    prompt.push_str(&format!("- **Goal:** {}\n", brief.campaign_goal.label()));
    prompt.push_str(&format!("- **Channels:** {channels}\n"));
    prompt.push_str(&format!("- **Tone/Voice:** {}\n", brief.tone.label()));

    if let Some(context) = brief.context() {
        prompt.push_str("\n## ADDITIONAL CONTEXT\n");
        prompt.push_str(context);
        prompt.push('\n');
    }

    prompt.push_str("\n---\n\n## YOUR TASK\n\n");
    prompt.push_str(
        "Generate a complete marketing campaign with the following sections:\n\n",
    );

    prompt.push_str(&format!("### 1. {}\n", SECTION_HEADERS[0]));
    prompt.push_str("- Campaign name/theme (something catchy)\n");
    prompt.push_str("- Core message (1-2 sentences)\n");
    prompt.push_str("- Key value propositions (3 bullet points)\n\n");

    prompt.push_str(&format!("### 2. {}\n", SECTION_HEADERS[1]));
    prompt.push_str(&format!("For each channel ({channels}), provide:\n"));
    prompt.push_str("- 3 different ad copy variations\n");
    prompt.push_str("- Each should have: Headline, Body, Call-to-Action\n");
    prompt.push_str("- Respect platform character limits and best practices\n\n");

    prompt.push_str(&format!("### 3. {}\n", SECTION_HEADERS[2]));
    prompt.push_str("- 10 relevant hashtags for social media\n");
    prompt.push_str("- 5 target keywords for search/SEO\n\n");

    prompt.push_str(&format!("### 4. {}\n", SECTION_HEADERS[3]));
    prompt.push_str("- Describe 3 visual/image concepts a designer could create\n");
    prompt.push_str("- Include mood, style, key elements to feature\n\n");

    prompt.push_str(&format!("### 5. {}\n", SECTION_HEADERS[4]));
    prompt.push_str("- Suggest a 1-week posting schedule\n");
    prompt.push_str("- Include which content goes on which channel and when\n\n");

    prompt.push_str(
        "Be specific, creative, and tailor everything to resonate with the target audience.\n",
    );
    prompt.push_str("Use the specified tone consistently throughout all copy.\n");

    prompt
}

/// Full text sent to the model: strategist context, a blank line, then the brief prompt
pub fn compose_generation_prompt(brief: &CampaignBrief) -> String {
    format!("{SYSTEM_CONTEXT}\n\n{}", build_campaign_prompt(brief))
}
