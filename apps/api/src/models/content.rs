//! Per-request content profile — built fresh on every generate action,
//! never persisted as the canonical record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for a single content-generation action.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub content_type: String,
    pub prompt: String,
    pub platform: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub voice: String,
    pub personality: Vec<String>,
    pub visual_identity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    pub age_range: String,
    pub occupation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Psychographics {
    pub interests: Vec<String>,
    pub values: Vec<String>,
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorPatterns {
    pub content_consumption: String,
    pub engagement_style: String,
    pub purchase_drivers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceSegment {
    pub demographics: Demographics,
    pub psychographics: Psychographics,
    pub behavior: BehaviorPatterns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceProfile {
    pub primary: AudienceSegment,
    pub secondary: Option<AudienceSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStrategyProfile {
    pub objectives: Vec<String>,
    pub key_messages: Vec<String>,
    pub content_pillars: Vec<String>,
    pub competitor_gaps: Vec<String>,
    pub content_framework: String,
}

/// Hard platform constraints used when rendering content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSpecs {
    pub name: String,
    pub max_chars: u32,
    pub hashtag_limit: u32,
    pub recommended_length: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformContext {
    pub specs: PlatformSpecs,
    pub audience_behavior: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceProfile {
    pub regulations: Vec<String>,
    pub guidelines: Vec<String>,
    pub ethics: Vec<String>,
    pub accessibility: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmarks {
    pub engagement_rate: f64,
    pub reach_rate: f64,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsProfile {
    pub kpis: Vec<String>,
    pub benchmarks: Benchmarks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMetadata {
    pub content_type: String,
    /// Deterministic completeness measure in [0, 1] — see
    /// `profile::content::confidence_score`.
    pub confidence_score: f64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentContextProfile {
    pub brand: BrandIdentity,
    pub audience: AudienceProfile,
    pub strategy: ContentStrategyProfile,
    pub platform_context: PlatformContext,
    pub compliance: ComplianceProfile,
    pub metrics: MetricsProfile,
    pub metadata: ContentMetadata,
}
