//! Business Context Generator — expands sparse wizard inputs into a full
//! business profile via fixed per-wizard dispatch tables.
//!
//! This is deliberately template expansion, not analysis: every sub-field is
//! a canned table keyed by [`WizardType`], with user inputs substituting only
//! a handful of leaf values. The fixed 0.85 confidence score is part of the
//! contract — a stand-in for a real AI call.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::models::business::{
    BusinessContextProfile, BusinessModel, CompetitiveAnalysisEntry, ContentStrategy,
    CustomerPersona, FeasibilityAssessment, FinancialProjection, ImplementationPhase,
    MarketAnalysis, ProfileMetadata, ResourceRequirement, RiskAssessment, SwotAnalysis,
    TechnologyStack, WizardInputs, WizardType,
};

/// Fixed confidence constant for wizard-generated profiles.
pub const BUSINESS_CONFIDENCE_SCORE: f64 = 0.85;

const DEFAULT_BUSINESS_NAME: &str = "Your Business";
const DEFAULT_PRODUCT: &str = "Business Product";
const DEFAULT_AUDIENCE: &str = "growing businesses";
const DEFAULT_PRICING: &str = "Subscription-based";

/// Generates a full business profile for the completed wizard.
///
/// Pure apart from `Utc::now()`, which feeds only `id`/`created_at` and the
/// financial projection years — never branching logic.
pub fn generate_business_profile(
    wizard_type: WizardType,
    inputs: &WizardInputs,
) -> BusinessContextProfile {
    let name = leaf(&inputs.business_name, DEFAULT_BUSINESS_NAME);
    let product = leaf(&inputs.product, DEFAULT_PRODUCT);
    let audience = leaf(&inputs.target_audience, DEFAULT_AUDIENCE);
    let now = Utc::now();

    BusinessContextProfile {
        id: Uuid::new_v4(),
        business_name: name.clone(),
        summary: summary_for(wizard_type, &name, &product),
        problem_statement: problem_for(wizard_type, &audience),
        solution_statement: solution_for(wizard_type, &product),
        customer_personas: personas_for(wizard_type, &audience),
        business_model: business_model_for(wizard_type),
        market_analysis: market_analysis_for(wizard_type, &audience),
        feasibility: feasibility_for(wizard_type),
        technology_stack: technology_stack_for(wizard_type, inputs),
        competitive_analysis: competitive_analysis_for(wizard_type, inputs),
        financial_projections: financial_projections(now.year() as u32),
        key_business_metrics: key_metrics_for(wizard_type),
        implementation_timeline: timeline_for(wizard_type),
        resource_requirements: resources_for(wizard_type),
        risk_assessment: risks_for(wizard_type),
        go_to_market_strategy: go_to_market_for(wizard_type, &audience),
        success_metrics_kpis: kpis_for(wizard_type),
        swot: swot_for(wizard_type, &name),
        content_strategy: content_strategy_for(wizard_type, inputs),
        created_at: now,
        profile_metadata: ProfileMetadata {
            wizard_type,
            confidence_score: BUSINESS_CONFIDENCE_SCORE,
            generated_at: now,
        },
    }
}

fn leaf(input: &Option<String>, default: &str) -> String {
    match input {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn summary_for(wizard: WizardType, name: &str, product: &str) -> String {
    match wizard {
        WizardType::BrandBlueprint => format!(
            "{name} delivers {product} with a distinct brand identity built around clarity, \
             consistency, and audience trust."
        ),
        WizardType::ContentPillars => format!(
            "{name} builds authority through a structured editorial program centered on \
             {product} and recurring content themes."
        ),
        WizardType::PlatformStrategy => format!(
            "{name} reaches its market through a deliberate multi-channel distribution \
             strategy for {product}."
        ),
        WizardType::CompetitorAnalysis => format!(
            "{name} positions {product} against established competitors by owning an \
             underserved niche and a sharper message."
        ),
    }
}

fn problem_for(wizard: WizardType, audience: &str) -> String {
    match wizard {
        WizardType::BrandBlueprint => format!(
            "{audience} struggle to recognize and remember brands that communicate \
             inconsistently across touchpoints."
        ),
        WizardType::ContentPillars => format!(
            "{audience} are overwhelmed by unfocused content and disengage from brands \
             without a clear editorial identity."
        ),
        WizardType::PlatformStrategy => format!(
            "{audience} spread attention across many platforms, and brands that post \
             everywhere without a plan reach almost no one."
        ),
        WizardType::CompetitorAnalysis => format!(
            "{audience} default to the loudest incumbent because challengers rarely \
             articulate a differentiated position."
        ),
    }
}

fn solution_for(wizard: WizardType, product: &str) -> String {
    match wizard {
        WizardType::BrandBlueprint => format!(
            "A codified brand blueprint for {product}: voice, values, and visual rules \
             applied uniformly across every channel."
        ),
        WizardType::ContentPillars => format!(
            "Three to five content pillars that anchor every piece published about \
             {product} to a theme the audience already cares about."
        ),
        WizardType::PlatformStrategy => format!(
            "A ranked platform mix for {product} with per-channel formats, cadence, and \
             repurposing rules."
        ),
        WizardType::CompetitorAnalysis => format!(
            "A competitive map for {product} that exposes messaging gaps and converts \
             them into ownable positioning."
        ),
    }
}

fn personas_for(wizard: WizardType, audience: &str) -> Vec<CustomerPersona> {
    let primary = CustomerPersona {
        name: "Primary Decision Maker".to_string(),
        demographics: format!("30-50, budget owner within {audience}"),
        psychographics: "Outcome-driven, time-poor, skeptical of generic marketing".to_string(),
        pain_points: vec![
            "Inconsistent results from past marketing spend".to_string(),
            "No internal bandwidth for content production".to_string(),
        ],
        goals: vec![
            "Predictable pipeline of qualified interest".to_string(),
            "A brand that compounds rather than resets".to_string(),
        ],
    };
    let secondary = match wizard {
        WizardType::BrandBlueprint => CustomerPersona {
            name: "Brand Champion".to_string(),
            demographics: "25-40, marketing lead or founder-operator".to_string(),
            psychographics: "Identity-conscious, values craft and coherence".to_string(),
            pain_points: vec!["Off-brand content produced under deadline pressure".to_string()],
            goals: vec!["A reusable brand system the whole team can apply".to_string()],
        },
        WizardType::ContentPillars => CustomerPersona {
            name: "Content Operator".to_string(),
            demographics: "22-35, owns the publishing calendar".to_string(),
            psychographics: "Process-oriented, hates blank-page starts".to_string(),
            pain_points: vec!["Ideation from scratch every single week".to_string()],
            goals: vec!["A pillar backlog that makes planning mechanical".to_string()],
        },
        WizardType::PlatformStrategy => CustomerPersona {
            name: "Channel Owner".to_string(),
            demographics: "25-40, runs one or more social accounts".to_string(),
            psychographics: "Metrics-driven, allergic to vanity numbers".to_string(),
            pain_points: vec!["Same asset pushed to every channel unchanged".to_string()],
            goals: vec!["Per-platform formats that actually fit the feed".to_string()],
        },
        WizardType::CompetitorAnalysis => CustomerPersona {
            name: "Positioning Strategist".to_string(),
            demographics: "30-50, owns messaging and pricing".to_string(),
            psychographics: "Analytical, wants evidence before commitment".to_string(),
            pain_points: vec!["Competitor moves discovered months too late".to_string()],
            goals: vec!["A standing view of where rivals are weak".to_string()],
        },
    };
    vec![primary, secondary]
}

fn business_model_for(wizard: WizardType) -> BusinessModel {
    let revenue_streams = match wizard {
        WizardType::BrandBlueprint => vec![
            "Core subscription".to_string(),
            "Brand audit add-on".to_string(),
        ],
        WizardType::ContentPillars => vec![
            "Core subscription".to_string(),
            "Editorial calendar upgrade".to_string(),
        ],
        WizardType::PlatformStrategy => vec![
            "Core subscription".to_string(),
            "Per-channel analytics add-on".to_string(),
        ],
        WizardType::CompetitorAnalysis => vec![
            "Core subscription".to_string(),
            "Quarterly competitive report".to_string(),
        ],
    };
    BusinessModel {
        pricing_model: DEFAULT_PRICING.to_string(),
        revenue_streams,
        customer_acquisition: "Content-led inbound with referral loops".to_string(),
    }
}

fn market_analysis_for(wizard: WizardType, audience: &str) -> MarketAnalysis {
    MarketAnalysis {
        market_size: "Growing SMB marketing software segment".to_string(),
        growth_rate: "Double-digit annual growth".to_string(),
        target_segments: vec![
            audience.to_string(),
            "Independent creators professionalizing their output".to_string(),
        ],
        trends: match wizard {
            WizardType::BrandBlueprint => vec![
                "Brand consistency as a trust signal".to_string(),
                "Design systems moving down-market".to_string(),
            ],
            WizardType::ContentPillars => vec![
                "Topical authority over posting volume".to_string(),
                "Serialized content outperforming one-offs".to_string(),
            ],
            WizardType::PlatformStrategy => vec![
                "Short-form video share of attention rising".to_string(),
                "Native-format content beating cross-posts".to_string(),
            ],
            WizardType::CompetitorAnalysis => vec![
                "Category noise rewarding sharp positioning".to_string(),
                "Buyers comparison-shopping before first contact".to_string(),
            ],
        },
    }
}

fn feasibility_for(wizard: WizardType) -> FeasibilityAssessment {
    FeasibilityAssessment {
        technical: "Standard web stack, no novel technical risk".to_string(),
        operational: "Lean team viable through first two phases".to_string(),
        financial: "Low fixed cost, subscription revenue from month one".to_string(),
        overall_rating: match wizard {
            WizardType::CompetitorAnalysis => "Favorable with positioning risk".to_string(),
            _ => "Favorable".to_string(),
        },
    }
}

fn technology_stack_for(wizard: WizardType, inputs: &WizardInputs) -> TechnologyStack {
    let platforms = inputs.platforms.clone().unwrap_or_else(|| match wizard {
        WizardType::PlatformStrategy => vec![
            "LinkedIn".to_string(),
            "Instagram".to_string(),
            "X/Twitter".to_string(),
        ],
        _ => vec!["LinkedIn".to_string(), "Instagram".to_string()],
    });
    TechnologyStack {
        platforms,
        tools: vec![
            "Content calendar".to_string(),
            "Scheduling automation".to_string(),
            "Analytics dashboard".to_string(),
        ],
        integrations: vec!["Email service provider".to_string(), "CRM".to_string()],
    }
}

fn competitive_analysis_for(
    wizard: WizardType,
    inputs: &WizardInputs,
) -> Vec<CompetitiveAnalysisEntry> {
    let named: Vec<String> = inputs.competitors.clone().unwrap_or_default();
    if named.is_empty() {
        return vec![CompetitiveAnalysisEntry {
            competitor: "Established category incumbent".to_string(),
            strengths: vec!["Brand recognition".to_string(), "Distribution reach".to_string()],
            weaknesses: vec![
                "Generic messaging".to_string(),
                "Slow to adopt new formats".to_string(),
            ],
            differentiation: match wizard {
                WizardType::CompetitorAnalysis => {
                    "Win on focus: own the niche the incumbent treats as an afterthought"
                        .to_string()
                }
                _ => "Sharper voice and faster publishing cadence".to_string(),
            },
        }];
    }
    named
        .into_iter()
        .map(|competitor| CompetitiveAnalysisEntry {
            competitor,
            strengths: vec!["Established audience".to_string()],
            weaknesses: vec!["Undifferentiated content".to_string()],
            differentiation: "Consistent brand system and pillar-driven publishing".to_string(),
        })
        .collect()
}

fn financial_projections(start_year: u32) -> Vec<FinancialProjection> {
    let tiers = [
        ("$120K", "$90K", "25%"),
        ("$360K", "$220K", "39%"),
        ("$840K", "$450K", "46%"),
    ];
    tiers
        .iter()
        .enumerate()
        .map(|(i, (revenue, expenses, net_margin))| FinancialProjection {
            year: start_year + i as u32,
            revenue: revenue.to_string(),
            expenses: expenses.to_string(),
            net_margin: net_margin.to_string(),
        })
        .collect()
}

fn key_metrics_for(wizard: WizardType) -> BTreeMap<String, String> {
    let mut metrics = BTreeMap::new();
    metrics.insert("monthly_recurring_revenue".to_string(), "Track from launch".to_string());
    metrics.insert("customer_acquisition_cost".to_string(), "Under $200".to_string());
    metrics.insert("churn_rate".to_string(), "Below 5% monthly".to_string());
    let extra = match wizard {
        WizardType::BrandBlueprint => ("brand_recall", "Survey quarterly"),
        WizardType::ContentPillars => ("pillar_engagement_rate", "Per-pillar monthly"),
        WizardType::PlatformStrategy => ("per_channel_reach", "Weekly by platform"),
        WizardType::CompetitorAnalysis => ("share_of_voice", "Monthly vs named rivals"),
    };
    metrics.insert(extra.0.to_string(), extra.1.to_string());
    metrics
}

fn timeline_for(wizard: WizardType) -> Vec<ImplementationPhase> {
    let focus_phase_two = match wizard {
        WizardType::BrandBlueprint => "Roll the blueprint out across all active channels",
        WizardType::ContentPillars => "Publish against every pillar on a fixed cadence",
        WizardType::PlatformStrategy => "Tune per-platform formats from early engagement data",
        WizardType::CompetitorAnalysis => "Ship positioning updates against mapped gaps",
    };
    vec![
        ImplementationPhase {
            name: "Foundation".to_string(),
            timeline: "Weeks 1-4".to_string(),
            focus: "Complete profile, baseline metrics, first content batch".to_string(),
        },
        ImplementationPhase {
            name: "Execution".to_string(),
            timeline: "Months 2-3".to_string(),
            focus: focus_phase_two.to_string(),
        },
        ImplementationPhase {
            name: "Scale".to_string(),
            timeline: "Months 4-6".to_string(),
            focus: "Double down on formats with proven engagement".to_string(),
        },
    ]
}

fn resources_for(wizard: WizardType) -> Vec<ResourceRequirement> {
    let mut resources = vec![
        ResourceRequirement {
            resource: "Content production time (4-6 hrs/week)".to_string(),
            category: "time".to_string(),
            priority: "high".to_string(),
        },
        ResourceRequirement {
            resource: "Scheduling tool subscription".to_string(),
            category: "tooling".to_string(),
            priority: "medium".to_string(),
        },
    ];
    resources.push(match wizard {
        WizardType::BrandBlueprint => ResourceRequirement {
            resource: "Design templates for brand assets".to_string(),
            category: "creative".to_string(),
            priority: "high".to_string(),
        },
        WizardType::ContentPillars => ResourceRequirement {
            resource: "Editorial backlog of pillar topics".to_string(),
            category: "planning".to_string(),
            priority: "high".to_string(),
        },
        WizardType::PlatformStrategy => ResourceRequirement {
            resource: "Per-platform analytics access".to_string(),
            category: "tooling".to_string(),
            priority: "medium".to_string(),
        },
        WizardType::CompetitorAnalysis => ResourceRequirement {
            resource: "Competitor monitoring routine".to_string(),
            category: "research".to_string(),
            priority: "medium".to_string(),
        },
    });
    resources
}

fn risks_for(wizard: WizardType) -> Vec<RiskAssessment> {
    let mut risks = vec![RiskAssessment {
        risk: "Publishing cadence slips under operational load".to_string(),
        likelihood: "medium".to_string(),
        impact: "high".to_string(),
        mitigation: "Batch production and a four-week scheduled buffer".to_string(),
    }];
    risks.push(match wizard {
        WizardType::BrandBlueprint => RiskAssessment {
            risk: "Brand rules ignored once novelty wears off".to_string(),
            likelihood: "medium".to_string(),
            impact: "medium".to_string(),
            mitigation: "Templates that make on-brand the default path".to_string(),
        },
        WizardType::ContentPillars => RiskAssessment {
            risk: "Pillars chosen by taste rather than audience demand".to_string(),
            likelihood: "medium".to_string(),
            impact: "high".to_string(),
            mitigation: "Review pillar engagement monthly and rotate the weakest".to_string(),
        },
        WizardType::PlatformStrategy => RiskAssessment {
            risk: "Algorithm changes invalidate a primary channel".to_string(),
            likelihood: "high".to_string(),
            impact: "medium".to_string(),
            mitigation: "Owned email list as the distribution floor".to_string(),
        },
        WizardType::CompetitorAnalysis => RiskAssessment {
            risk: "Positioning copied by a better-funded rival".to_string(),
            likelihood: "low".to_string(),
            impact: "high".to_string(),
            mitigation: "Compound proof via case studies rivals cannot fake".to_string(),
        },
    });
    risks
}

fn go_to_market_for(wizard: WizardType, audience: &str) -> Vec<String> {
    let mut steps = vec![
        format!("Lead with free, high-signal content aimed at {audience}"),
        "Convert engaged readers through a low-friction email capture".to_string(),
    ];
    steps.push(match wizard {
        WizardType::BrandBlueprint => {
            "Showcase before/after brand transformations as social proof".to_string()
        }
        WizardType::ContentPillars => {
            "Serialize pillar content so each piece markets the next".to_string()
        }
        WizardType::PlatformStrategy => {
            "Concentrate launch effort on the single best-fit platform first".to_string()
        }
        WizardType::CompetitorAnalysis => {
            "Publish comparison content targeting competitor-brand searches".to_string()
        }
    });
    steps
}

fn kpis_for(wizard: WizardType) -> Vec<String> {
    let mut kpis = vec![
        "Qualified leads per month".to_string(),
        "Email list growth rate".to_string(),
        "Content engagement rate".to_string(),
    ];
    kpis.push(match wizard {
        WizardType::BrandBlueprint => "Unaided brand recall".to_string(),
        WizardType::ContentPillars => "Returning-reader share".to_string(),
        WizardType::PlatformStrategy => "Follower-to-subscriber conversion".to_string(),
        WizardType::CompetitorAnalysis => "Win rate in competitive deals".to_string(),
    });
    kpis
}

fn swot_for(wizard: WizardType, name: &str) -> SwotAnalysis {
    SwotAnalysis {
        strengths: vec![
            format!("{name} can move faster than incumbent competitors"),
            "Founder proximity to the customer".to_string(),
        ],
        weaknesses: vec![
            "Limited production bandwidth".to_string(),
            "No existing audience to seed distribution".to_string(),
        ],
        opportunities: match wizard {
            WizardType::BrandBlueprint => {
                vec!["Category rivals communicate inconsistently".to_string()]
            }
            WizardType::ContentPillars => {
                vec!["Few rivals publish serialized, themed content".to_string()]
            }
            WizardType::PlatformStrategy => {
                vec!["Underpriced attention on emerging formats".to_string()]
            }
            WizardType::CompetitorAnalysis => {
                vec!["Documented gaps in competitor messaging".to_string()]
            }
        },
        threats: vec![
            "Platform algorithm volatility".to_string(),
            "Larger competitors copying what works".to_string(),
        ],
    }
}

fn content_strategy_for(wizard: WizardType, inputs: &WizardInputs) -> Option<ContentStrategy> {
    // Only wizards that collect voice/pillar inputs embed a content strategy.
    match wizard {
        WizardType::BrandBlueprint | WizardType::ContentPillars => Some(ContentStrategy {
            brand_voice: leaf(&inputs.tone, "Confident, plain-spoken, practical"),
            content_pillars: inputs.content_pillars.clone().unwrap_or_else(|| {
                vec![
                    "Education".to_string(),
                    "Proof".to_string(),
                    "Behind the scenes".to_string(),
                ]
            }),
            platform_mix: inputs
                .platforms
                .clone()
                .unwrap_or_else(|| vec!["LinkedIn".to_string(), "Instagram".to_string()]),
        }),
        WizardType::PlatformStrategy | WizardType::CompetitorAnalysis => None,
    }
}
