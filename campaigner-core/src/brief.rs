//! Campaign brief data model
//!
//! A [`CampaignBrief`] is the structured description of a brand and campaign
//! that the collector hands to the prompt builder. The enumerations carry two
//! spellings: a display label that is rendered verbatim into the prompt, and
//! a kebab-case identifier used on the command line and in configuration.

use crate::error::CampaignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn matches_spelling(value: &str, id: &str, label: &str) -> bool {
    let normalized = value.trim();
    normalized.eq_ignore_ascii_case(id) || normalized.eq_ignore_ascii_case(label)
}

/// What the campaign is meant to achieve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignGoal {
    ProductLaunch,
    BrandAwareness,
    LeadGeneration,
    SalesConversions,
    EventPromotion,
    CustomerRetention,
}

impl CampaignGoal {
    pub const ALL: [CampaignGoal; 6] = [
        Self::ProductLaunch,
        Self::BrandAwareness,
        Self::LeadGeneration,
        Self::SalesConversions,
        Self::EventPromotion,
        Self::CustomerRetention,
    ];

    /// Identifier accepted by the CLI and configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProductLaunch => "product-launch",
            Self::BrandAwareness => "brand-awareness",
            Self::LeadGeneration => "lead-generation",
            Self::SalesConversions => "sales-conversions",
            Self::EventPromotion => "event-promotion",
            Self::CustomerRetention => "customer-retention",
        }
    }

    /// Label rendered into the prompt
    pub fn label(self) -> &'static str {
        match self {
            Self::ProductLaunch => "Product Launch",
            Self::BrandAwareness => "Brand Awareness",
            Self::LeadGeneration => "Lead Generation",
            Self::SalesConversions => "Sales/Conversions",
            Self::EventPromotion => "Event Promotion",
            Self::CustomerRetention => "Customer Retention",
        }
    }

    /// Parse either the identifier or the display label, ignoring case
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|goal| matches_spelling(value, goal.as_str(), goal.label()))
    }
}

impl Default for CampaignGoal {
    fn default() -> Self {
        Self::ProductLaunch
    }
}

impl fmt::Display for CampaignGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CampaignGoal {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value).ok_or_else(|| {
            let allowed: Vec<&str> = Self::ALL.iter().map(|goal| goal.as_str()).collect();
            format!(
                "unknown campaign goal '{value}' (expected one of: {})",
                allowed.join(", ")
            )
        })
    }
}

/// Marketing channel the campaign will run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Instagram,
    Facebook,
    #[serde(rename = "linkedin")]
    LinkedIn,
    TwitterX,
    Email,
    GoogleAds,
    #[serde(rename = "tiktok")]
    TikTok,
}

impl Channel {
    pub const ALL: [Channel; 7] = [
        Self::Instagram,
        Self::Facebook,
        Self::LinkedIn,
        Self::TwitterX,
        Self::Email,
        Self::GoogleAds,
        Self::TikTok,
    ];

    /// Channels preselected by the interactive form
    pub const DEFAULT_SELECTION: [Channel; 2] = [Self::Instagram, Self::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::TwitterX => "twitter-x",
            Self::Email => "email",
            Self::GoogleAds => "google-ads",
            Self::TikTok => "tiktok",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::TwitterX => "Twitter/X",
            Self::Email => "Email",
            Self::GoogleAds => "Google Ads",
            Self::TikTok => "TikTok",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|channel| matches_spelling(value, channel.as_str(), channel.label()))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value).ok_or_else(|| {
            let allowed: Vec<&str> = Self::ALL.iter().map(|channel| channel.as_str()).collect();
            format!(
                "unknown channel '{value}' (expected one of: {})",
                allowed.join(", ")
            )
        })
    }
}

/// Voice of the generated copy, ordered from most formal to most edgy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    FormalProfessional,
    ProfessionalFriendly,
    CasualConversational,
    PlayfulWitty,
    BoldEdgy,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Self::FormalProfessional,
        Self::ProfessionalFriendly,
        Self::CasualConversational,
        Self::PlayfulWitty,
        Self::BoldEdgy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FormalProfessional => "formal-professional",
            Self::ProfessionalFriendly => "professional-friendly",
            Self::CasualConversational => "casual-conversational",
            Self::PlayfulWitty => "playful-witty",
            Self::BoldEdgy => "bold-edgy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FormalProfessional => "Formal & Professional",
            Self::ProfessionalFriendly => "Professional but Friendly",
            Self::CasualConversational => "Casual & Conversational",
            Self::PlayfulWitty => "Playful & Witty",
            Self::BoldEdgy => "Bold & Edgy",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tone| matches_spelling(value, tone.as_str(), tone.label()))
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::ProfessionalFriendly
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value).ok_or_else(|| {
            let allowed: Vec<&str> = Self::ALL.iter().map(|tone| tone.as_str()).collect();
            format!(
                "unknown tone '{value}' (expected one of: {})",
                allowed.join(", ")
            )
        })
    }
}

/// Structured description of a brand and the campaign to generate for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignBrief {
    pub brand_name: String,
    pub product_description: String,
    pub target_audience: String,
    #[serde(default)]
    pub campaign_goal: CampaignGoal,
    /// Selection order is kept; it is the order the prompt lists them in
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl CampaignBrief {
    /// Start a brief with the form defaults for goal, channels, and tone
    pub fn new(
        brand_name: impl Into<String>,
        product_description: impl Into<String>,
        target_audience: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            product_description: product_description.into(),
            target_audience: target_audience.into(),
            campaign_goal: CampaignGoal::default(),
            channels: Channel::DEFAULT_SELECTION.to_vec(),
            tone: Tone::default(),
            additional_context: None,
        }
    }

    pub fn with_goal(mut self, goal: CampaignGoal) -> Self {
        self.campaign_goal = goal;
        self
    }

    /// Replace the channel selection; repeated channels keep their first position
    pub fn with_channels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        let mut selected: Vec<Channel> = Vec::new();
        for channel in channels {
            if !selected.contains(&channel) {
                selected.push(channel);
            }
        }
        self.channels = selected;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Attach free-text context; an empty string is stored as absent
    pub fn with_additional_context(mut self, context: Option<String>) -> Self {
        self.additional_context = context.filter(|text| !text.is_empty());
        self
    }

    /// Channel labels joined the way the prompt lists them
    pub fn channel_list(&self) -> String {
        self.channels
            .iter()
            .map(|channel| channel.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Context text when present and non-empty
    pub fn context(&self) -> Option<&str> {
        self.additional_context
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Check the fields the collector must fill before generation.
    ///
    /// The first failing field is reported, in form order. The prompt builder
    /// never calls this; it renders whatever it is given.
    pub fn validate(&self) -> Result<(), CampaignError> {
        if self.brand_name.trim().is_empty() {
            return Err(CampaignError::InvalidInput(
                "Please enter a brand name.".to_string(),
            ));
        }
        if self.product_description.trim().is_empty() {
            return Err(CampaignError::InvalidInput(
                "Please describe your product/service.".to_string(),
            ));
        }
        if self.target_audience.trim().is_empty() {
            return Err(CampaignError::InvalidInput(
                "Please describe your target audience.".to_string(),
            ));
        }
        if self.channels.is_empty() {
            return Err(CampaignError::InvalidInput(
                "Please select at least one marketing channel.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CampaignBrief {
        CampaignBrief::new("BrewMate", "cold brew kit", "urban professionals 25-40")
    }

    #[test]
    fn test_new_brief_uses_form_defaults() {
        let brief = sample();
        assert_eq!(brief.campaign_goal, CampaignGoal::ProductLaunch);
        assert_eq!(brief.channels, vec![Channel::Instagram, Channel::Email]);
        assert_eq!(brief.tone, Tone::ProfessionalFriendly);
        assert!(brief.additional_context.is_none());
    }

    #[test]
    fn test_parse_accepts_identifier_and_label() {
        assert_eq!(
            "sales-conversions".parse::<CampaignGoal>(),
            Ok(CampaignGoal::SalesConversions)
        );
        assert_eq!(
            "Sales/Conversions".parse::<CampaignGoal>(),
            Ok(CampaignGoal::SalesConversions)
        );
        assert_eq!("twitter/x".parse::<Channel>(), Ok(Channel::TwitterX));
        assert_eq!("TIKTOK".parse::<Channel>(), Ok(Channel::TikTok));
        assert_eq!(
            " Playful & Witty ".parse::<Tone>(),
            Ok(Tone::PlayfulWitty)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "carrier-pigeon".parse::<Channel>().unwrap_err();
        assert!(err.contains("carrier-pigeon"));
        assert!(err.contains("google-ads"));
        assert!("whisper".parse::<Tone>().is_err());
    }

    #[test]
    fn test_tone_ordering_runs_formal_to_edgy() {
        assert!(Tone::FormalProfessional < Tone::ProfessionalFriendly);
        assert!(Tone::PlayfulWitty < Tone::BoldEdgy);
        assert_eq!(Tone::ALL.iter().max(), Some(&Tone::BoldEdgy));
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let brief = sample()
            .with_channels([Channel::LinkedIn, Channel::TikTok])
            .with_tone(Tone::BoldEdgy);
        let json = serde_json::to_value(&brief).unwrap();
        assert_eq!(json["channels"][0], "linkedin");
        assert_eq!(json["channels"][1], "tiktok");
        assert_eq!(json["tone"], "bold-edgy");
        assert_eq!(json["campaign_goal"], "product-launch");
        assert!(json.get("additional_context").is_none());

        let restored: CampaignBrief = serde_json::from_value(json).unwrap();
        assert_eq!(restored, brief);
    }

    #[test]
    fn test_with_channels_keeps_first_occurrence_order() {
        let brief = sample().with_channels([
            Channel::Email,
            Channel::Instagram,
            Channel::Email,
            Channel::GoogleAds,
        ]);
        assert_eq!(brief.channel_list(), "Email, Instagram, Google Ads");
    }

    #[test]
    fn test_empty_context_is_stored_as_absent() {
        let brief = sample().with_additional_context(Some(String::new()));
        assert!(brief.additional_context.is_none());
        assert!(brief.context().is_none());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert!(sample().validate().is_ok());

        let mut brief = sample();
        brief.brand_name = "  ".to_string();
        brief.target_audience = String::new();
        let err = brief.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Please enter a brand name.");

        let brief = CampaignBrief::new("BrewMate", "", "anyone");
        assert!(
            brief
                .validate()
                .unwrap_err()
                .to_string()
                .contains("product/service")
        );

        let brief = CampaignBrief::new("BrewMate", "kit", "");
        assert!(
            brief
                .validate()
                .unwrap_err()
                .to_string()
                .contains("target audience")
        );

        let brief = sample().with_channels(Vec::new());
        assert!(
            brief
                .validate()
                .unwrap_err()
                .to_string()
                .contains("at least one marketing channel")
        );
    }
}
