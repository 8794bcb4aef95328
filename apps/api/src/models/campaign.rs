//! Campaign profile — a business profile extended with an ordered,
//! dependency-chained content sequence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::business::BusinessContextProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    EmailSeries,
    ArticleSeries,
    ProductLaunch,
    SocialCampaign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    Email,
    Article,
    SocialPost,
    VideoScript,
    Infographic,
    CaseStudy,
    Webinar,
    Newsletter,
    LandingPage,
}

/// Funnel position, assigned by sequence quartile. Ordering of the variants
/// matches funnel order — `stage_rank` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceStage {
    Awareness,
    Consideration,
    Decision,
    Retention,
}

impl AudienceStage {
    pub fn rank(&self) -> u8 {
        match self {
            AudienceStage::Awareness => 0,
            AudienceStage::Consideration => 1,
            AudienceStage::Decision => 2,
            AudienceStage::Retention => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionPotential {
    Low,
    Medium,
    High,
}

/// One unit in the campaign sequence. `piece_number` is 1-based and unique
/// within the sequence; `dependencies` form a strict linear chain by
/// construction (piece 1 has none, piece N depends on N-1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPiece {
    pub piece_number: u32,
    pub piece_type: PieceType,
    pub title: String,
    pub purpose: String,
    pub key_message: String,
    pub cta_strategy: String,
    pub progression_role: String,
    pub audience_stage: AudienceStage,
    pub content_length: ContentLength,
    pub required_assets: Vec<String>,
    pub dependencies: Vec<u32>,
    pub estimated_engagement: String,
    pub conversion_potential: ConversionPotential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignOverview {
    pub name: String,
    pub campaign_type: CampaignType,
    pub total_pieces: u32,
    pub timeline: String,
    pub objective: String,
    pub success_criteria: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JourneyStage {
    pub pieces: Vec<u32>,
    pub key_messages: Vec<String>,
    pub goals: Vec<String>,
}

/// Four fixed funnel buckets collecting piece numbers, messages, and goals
/// in sequence order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudienceJourney {
    pub awareness: JourneyStage,
    pub consideration: JourneyStage,
    pub decision: JourneyStage,
    pub retention: JourneyStage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceMetrics {
    pub kpis: Vec<String>,
    pub engagement_targets: Vec<String>,
    pub conversion_goals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyFramework {
    pub voice: String,
    pub visual_style: String,
    pub messaging_themes: Vec<String>,
    pub branding_elements: Vec<String>,
}

/// Business profile extended with campaign planning output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveSwipeProfile {
    #[serde(flatten)]
    pub business: BusinessContextProfile,
    pub campaign_overview: CampaignOverview,
    pub content_sequence: Vec<ContentPiece>,
    pub audience_journey: AudienceJourney,
    /// Keyed by `piece_number.to_string()`.
    pub success_metrics_per_piece: BTreeMap<String, PieceMetrics>,
    pub consistency_framework: ConsistencyFramework,
    pub campaign_resources: Vec<String>,
    pub publishing_cadence: String,
}

/// A partial sequence carried by a campaign template. Template entries win
/// over position-based defaults for the piece numbers they cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePiece {
    pub piece_number: u32,
    pub piece_type: PieceType,
    pub title: String,
    pub purpose: String,
    pub audience_stage: AudienceStage,
    pub progression_role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignTemplate {
    pub name: String,
    pub campaign_type: CampaignType,
    pub description: String,
    pub template_structure: Vec<TemplatePiece>,
}

/// Request body for campaign generation.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignRequest {
    pub campaign_type: CampaignType,
    pub campaign_name: String,
    pub total_pieces: u32,
    pub business_profile: BusinessContextProfile,
    /// Shallow top-level override applied after generation, last-write-wins.
    pub custom_requirements: Option<serde_json::Map<String, serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_type_serde_snake_case() {
        let ct: CampaignType = serde_json::from_str(r#""email_series""#).unwrap();
        assert_eq!(ct, CampaignType::EmailSeries);
    }

    #[test]
    fn test_audience_stage_rank_is_funnel_order() {
        assert!(AudienceStage::Awareness.rank() < AudienceStage::Consideration.rank());
        assert!(AudienceStage::Consideration.rank() < AudienceStage::Decision.rank());
        assert!(AudienceStage::Decision.rank() < AudienceStage::Retention.rank());
    }

    #[test]
    fn test_piece_type_has_nine_variants() {
        let all = [
            PieceType::Email,
            PieceType::Article,
            PieceType::SocialPost,
            PieceType::VideoScript,
            PieceType::Infographic,
            PieceType::CaseStudy,
            PieceType::Webinar,
            PieceType::Newsletter,
            PieceType::LandingPage,
        ];
        assert_eq!(all.len(), 9);
    }
}
