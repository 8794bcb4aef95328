//! Campaign template catalog — built-in presets plus session-registered
//! user templates.
//!
//! The catalog is an explicit registry owned by `AppState`, not module-level
//! mutable state. Runtime additions live for the process lifetime only.

use crate::models::campaign::{AudienceStage, CampaignTemplate, CampaignType, PieceType, TemplatePiece};

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<CampaignTemplate>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self {
            templates: built_in_templates(),
        }
    }
}

impl TemplateCatalog {
    pub fn new(templates: Vec<CampaignTemplate>) -> Self {
        Self { templates }
    }

    /// Returns the template for a campaign type. When several match (a user
    /// template registered over a built-in), the most recently added wins.
    pub fn find(&self, campaign_type: CampaignType) -> Option<&CampaignTemplate> {
        self.templates
            .iter()
            .rev()
            .find(|t| t.campaign_type == campaign_type)
    }

    /// Registers a user-created template for the rest of the session.
    pub fn add_template(&mut self, template: CampaignTemplate) {
        self.templates.push(template);
    }

    pub fn all(&self) -> &[CampaignTemplate] {
        &self.templates
    }
}

fn piece(
    piece_number: u32,
    piece_type: PieceType,
    title: &str,
    purpose: &str,
    audience_stage: AudienceStage,
    progression_role: &str,
) -> TemplatePiece {
    TemplatePiece {
        piece_number,
        piece_type,
        title: title.to_string(),
        purpose: purpose.to_string(),
        audience_stage,
        progression_role: progression_role.to_string(),
    }
}

fn built_in_templates() -> Vec<CampaignTemplate> {
    vec![
        CampaignTemplate {
            name: "Welcome Email Series".to_string(),
            campaign_type: CampaignType::EmailSeries,
            description: "Five-email onboarding sequence from first hello to soft ask"
                .to_string(),
            template_structure: vec![
                piece(
                    1,
                    PieceType::Email,
                    "Welcome & Set Expectations",
                    "Greet the subscriber and tell them exactly what they will receive",
                    AudienceStage::Awareness,
                    "opening_hook",
                ),
                piece(
                    2,
                    PieceType::Email,
                    "Our Story & Mission",
                    "Build connection by sharing why the brand exists",
                    AudienceStage::Awareness,
                    "foundation_building",
                ),
                piece(
                    3,
                    PieceType::Email,
                    "Core Value Delivery",
                    "Deliver one genuinely useful thing with no ask attached",
                    AudienceStage::Consideration,
                    "trust_development",
                ),
                piece(
                    4,
                    PieceType::Email,
                    "Social Proof & Success Stories",
                    "Show outcomes from people like the subscriber",
                    AudienceStage::Decision,
                    "value_demonstration",
                ),
                piece(
                    5,
                    PieceType::Email,
                    "Soft CTA & Next Steps",
                    "Invite a low-commitment next step now that trust is established",
                    AudienceStage::Retention,
                    "conversion_preparation",
                ),
            ],
        },
        CampaignTemplate {
            name: "Educational Article Series".to_string(),
            campaign_type: CampaignType::ArticleSeries,
            description: "Sequenced long-form series that builds topical authority".to_string(),
            template_structure: vec![
                piece(
                    1,
                    PieceType::Article,
                    "Foundations: Why This Matters",
                    "Frame the problem and establish the stakes",
                    AudienceStage::Awareness,
                    "opening_hook",
                ),
                piece(
                    2,
                    PieceType::Article,
                    "Core Concepts Explained",
                    "Teach the fundamentals with concrete examples",
                    AudienceStage::Consideration,
                    "foundation_building",
                ),
                piece(
                    3,
                    PieceType::Article,
                    "Advanced Applications",
                    "Show what mastery looks like in practice",
                    AudienceStage::Decision,
                    "value_demonstration",
                ),
                piece(
                    4,
                    PieceType::Article,
                    "Putting It All Together",
                    "Consolidate the series into an actionable playbook",
                    AudienceStage::Retention,
                    "conversion_preparation",
                ),
            ],
        },
        CampaignTemplate {
            name: "Product Launch Campaign".to_string(),
            campaign_type: CampaignType::ProductLaunch,
            description: "Teaser-to-launch arc across formats".to_string(),
            template_structure: vec![
                piece(
                    1,
                    PieceType::SocialPost,
                    "Something Is Coming",
                    "Tease the launch without revealing the product",
                    AudienceStage::Awareness,
                    "opening_hook",
                ),
                piece(
                    2,
                    PieceType::Article,
                    "The Problem We Kept Hearing",
                    "Name the pain the product was built to solve",
                    AudienceStage::Awareness,
                    "foundation_building",
                ),
                piece(
                    3,
                    PieceType::VideoScript,
                    "First Look",
                    "Demonstrate the product solving the problem",
                    AudienceStage::Consideration,
                    "trust_development",
                ),
                piece(
                    4,
                    PieceType::CaseStudy,
                    "Early Access Results",
                    "Prove the outcome with a beta customer story",
                    AudienceStage::Decision,
                    "value_demonstration",
                ),
                piece(
                    5,
                    PieceType::LandingPage,
                    "Launch Day",
                    "Convert accumulated interest into signups",
                    AudienceStage::Decision,
                    "decision_facilitation",
                ),
                piece(
                    6,
                    PieceType::Email,
                    "Thank You & What's Next",
                    "Close the launch and set up the ongoing relationship",
                    AudienceStage::Retention,
                    "relationship_extension",
                ),
            ],
        },
        CampaignTemplate {
            name: "Social Media Content Campaign".to_string(),
            campaign_type: CampaignType::SocialCampaign,
            description: "Feed-native sequence mixing reach and depth".to_string(),
            template_structure: vec![
                piece(
                    1,
                    PieceType::SocialPost,
                    "Scroll-Stopping Opener",
                    "Earn attention with a contrarian or surprising claim",
                    AudienceStage::Awareness,
                    "opening_hook",
                ),
                piece(
                    2,
                    PieceType::Infographic,
                    "The Numbers Behind It",
                    "Back the opener with shareable data",
                    AudienceStage::Awareness,
                    "foundation_building",
                ),
                piece(
                    3,
                    PieceType::SocialPost,
                    "How It Works",
                    "Walk through the method in carousel form",
                    AudienceStage::Consideration,
                    "trust_development",
                ),
                piece(
                    4,
                    PieceType::VideoScript,
                    "Proof In Motion",
                    "Short-form video showing the result live",
                    AudienceStage::Decision,
                    "value_demonstration",
                ),
                piece(
                    5,
                    PieceType::SocialPost,
                    "Join The Conversation",
                    "Convert viewers into followers and subscribers",
                    AudienceStage::Retention,
                    "relationship_extension",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_seeds_four_built_ins() {
        let catalog = TemplateCatalog::default();
        assert_eq!(catalog.all().len(), 4);
    }

    #[test]
    fn test_welcome_email_series_has_five_named_pieces() {
        let catalog = TemplateCatalog::default();
        let template = catalog.find(CampaignType::EmailSeries).unwrap();
        assert_eq!(template.name, "Welcome Email Series");
        assert_eq!(template.template_structure.len(), 5);
        assert_eq!(
            template.template_structure[0].title,
            "Welcome & Set Expectations"
        );
        assert_eq!(
            template.template_structure[4].title,
            "Soft CTA & Next Steps"
        );
    }

    #[test]
    fn test_template_piece_numbers_are_contiguous() {
        let catalog = TemplateCatalog::default();
        for template in catalog.all() {
            for (i, p) in template.template_structure.iter().enumerate() {
                assert_eq!(p.piece_number, i as u32 + 1, "{}", template.name);
            }
        }
    }

    #[test]
    fn test_added_template_wins_over_built_in() {
        let mut catalog = TemplateCatalog::default();
        catalog.add_template(CampaignTemplate {
            name: "Custom Welcome".to_string(),
            campaign_type: CampaignType::EmailSeries,
            description: String::new(),
            template_structure: vec![],
        });
        assert_eq!(catalog.all().len(), 5);
        assert_eq!(
            catalog.find(CampaignType::EmailSeries).unwrap().name,
            "Custom Welcome"
        );
    }
}
