//! Business profile document — the output of the onboarding wizards.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which onboarding wizard produced a profile. Drives every dispatch table
/// in the business generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardType {
    BrandBlueprint,
    ContentPillars,
    PlatformStrategy,
    CompetitorAnalysis,
}

impl WizardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardType::BrandBlueprint => "brand_blueprint",
            WizardType::ContentPillars => "content_pillars",
            WizardType::PlatformStrategy => "platform_strategy",
            WizardType::CompetitorAnalysis => "competitor_analysis",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub wizard_type: WizardType,
    /// Fixed constant — the generator is a template expander, not an analyzer.
    pub confidence_score: f64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerPersona {
    pub name: String,
    pub demographics: String,
    pub psychographics: String,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessModel {
    pub pricing_model: String,
    pub revenue_streams: Vec<String>,
    pub customer_acquisition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub market_size: String,
    pub growth_rate: String,
    pub target_segments: Vec<String>,
    pub trends: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeasibilityAssessment {
    pub technical: String,
    pub operational: String,
    pub financial: String,
    pub overall_rating: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyStack {
    pub platforms: Vec<String>,
    pub tools: Vec<String>,
    pub integrations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitiveAnalysisEntry {
    pub competitor: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub differentiation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProjection {
    pub year: u32,
    pub revenue: String,
    pub expenses: String,
    pub net_margin: String,
}

/// One named phase of the implementation timeline, in rollout order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationPhase {
    pub name: String,
    pub timeline: String,
    pub focus: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRequirement {
    pub resource: String,
    pub category: String,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk: String,
    pub likelihood: String,
    pub impact: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// Brand-voice layer embedded in a business profile when the wizard
/// collected content-strategy inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStrategy {
    pub brand_voice: String,
    pub content_pillars: Vec<String>,
    pub platform_mix: Vec<String>,
}

/// Full synthesized business profile. Created once per wizard completion and
/// never mutated in place — edits produce a new profile merged over the old
/// one by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessContextProfile {
    pub id: Uuid,
    pub business_name: String,
    pub summary: String,
    pub problem_statement: String,
    pub solution_statement: String,
    pub customer_personas: Vec<CustomerPersona>,
    pub business_model: BusinessModel,
    pub market_analysis: MarketAnalysis,
    pub feasibility: FeasibilityAssessment,
    pub technology_stack: TechnologyStack,
    pub competitive_analysis: Vec<CompetitiveAnalysisEntry>,
    pub financial_projections: Vec<FinancialProjection>,
    pub key_business_metrics: BTreeMap<String, String>,
    pub implementation_timeline: Vec<ImplementationPhase>,
    pub resource_requirements: Vec<ResourceRequirement>,
    pub risk_assessment: Vec<RiskAssessment>,
    pub go_to_market_strategy: Vec<String>,
    pub success_metrics_kpis: Vec<String>,
    pub swot: SwotAnalysis,
    pub content_strategy: Option<ContentStrategy>,
    pub created_at: DateTime<Utc>,
    pub profile_metadata: ProfileMetadata,
}

/// Free-text wizard inputs. Every field is optional — absent values fall
/// back to literal defaults inside the generator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WizardInputs {
    pub business_name: Option<String>,
    pub product: Option<String>,
    pub target_audience: Option<String>,
    pub tone: Option<String>,
    pub content_pillars: Option<Vec<String>>,
    pub competitors: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_type_serde_snake_case() {
        let wt: WizardType = serde_json::from_str(r#""brand_blueprint""#).unwrap();
        assert_eq!(wt, WizardType::BrandBlueprint);
        let json = serde_json::to_string(&WizardType::CompetitorAnalysis).unwrap();
        assert_eq!(json, r#""competitor_analysis""#);
    }

    #[test]
    fn test_wizard_type_as_str_matches_serde() {
        for wt in [
            WizardType::BrandBlueprint,
            WizardType::ContentPillars,
            WizardType::PlatformStrategy,
            WizardType::CompetitorAnalysis,
        ] {
            let json = serde_json::to_string(&wt).unwrap();
            assert_eq!(json, format!("\"{}\"", wt.as_str()));
        }
    }

    #[test]
    fn test_wizard_inputs_all_optional() {
        let inputs: WizardInputs = serde_json::from_str("{}").unwrap();
        assert!(inputs.business_name.is_none());
        assert!(inputs.content_pillars.is_none());
    }
}
