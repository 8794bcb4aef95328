//! Campaign profile generation — expands a business profile plus a campaign
//! template into an ordered, dependency-chained content sequence.
//!
//! Template entries win for the piece numbers they cover; every other piece
//! is synthesized from position-based rules (stage by quartile, purpose/CTA/
//! conversion by tertile, role from a fixed clamped list). There are no
//! failure modes: a missing template simply routes every piece through the
//! synthesized-default branch.

use crate::campaign::metrics::build_success_metrics;
use crate::errors::AppError;
use crate::models::campaign::{
    AudienceJourney, AudienceStage, CampaignOverview, CampaignRequest, CampaignTemplate,
    CampaignType, ComprehensiveSwipeProfile, ConsistencyFramework, ContentLength, ContentPiece,
    ConversionPotential, PieceType,
};

/// Fixed progression roles, indexed by piece position and clamped at the
/// last entry for longer sequences.
const PROGRESSION_ROLES: [&str; 8] = [
    "opening_hook",
    "foundation_building",
    "trust_development",
    "value_demonstration",
    "engagement_deepening",
    "conversion_preparation",
    "decision_facilitation",
    "relationship_extension",
];

pub fn generate_campaign_profile(
    req: &CampaignRequest,
    template: Option<&CampaignTemplate>,
) -> ComprehensiveSwipeProfile {
    let total = req.total_pieces.max(1);

    let content_sequence: Vec<ContentPiece> = (1..=total)
        .map(|i| build_piece(i, total, req, template))
        .collect();

    let audience_journey = partition_journey(&content_sequence);
    let success_metrics_per_piece = build_success_metrics(&content_sequence);

    ComprehensiveSwipeProfile {
        business: req.business_profile.clone(),
        campaign_overview: campaign_overview(req, total),
        content_sequence,
        audience_journey,
        success_metrics_per_piece,
        consistency_framework: consistency_framework(req),
        campaign_resources: campaign_resources(req.campaign_type),
        publishing_cadence: publishing_cadence(req.campaign_type),
    }
}

/// Shallow-merges `custom_requirements` over the assembled profile:
/// top-level JSON keys only, last-write-wins. `content_sequence` and every
/// other key absent from the override keep their generated values.
pub fn apply_custom_requirements(
    profile: ComprehensiveSwipeProfile,
    overrides: &serde_json::Map<String, serde_json::Value>,
) -> Result<ComprehensiveSwipeProfile, AppError> {
    if overrides.is_empty() {
        return Ok(profile);
    }
    let mut value = serde_json::to_value(&profile)
        .map_err(|e| AppError::Validation(format!("profile serialization failed: {e}")))?;
    let obj = value
        .as_object_mut()
        .ok_or_else(|| AppError::Validation("profile is not a JSON object".to_string()))?;
    for (key, val) in overrides {
        obj.insert(key.clone(), val.clone());
    }
    serde_json::from_value(value).map_err(|e| {
        AppError::Validation(format!("custom_requirements broke the profile shape: {e}"))
    })
}

fn build_piece(
    i: u32,
    total: u32,
    req: &CampaignRequest,
    template: Option<&CampaignTemplate>,
) -> ContentPiece {
    let from_template = template.and_then(|t| {
        t.template_structure
            .iter()
            .find(|p| p.piece_number == i)
    });

    let piece_type = from_template
        .map(|p| p.piece_type)
        .unwrap_or_else(|| default_piece_type(req.campaign_type));
    let audience_stage = from_template
        .map(|p| p.audience_stage)
        .unwrap_or_else(|| stage_for_position(i, total));
    let title = from_template
        .map(|p| p.title.clone())
        .unwrap_or_else(|| format!("{} — Part {}", req.campaign_name, i));
    let purpose = from_template
        .map(|p| p.purpose.clone())
        .unwrap_or_else(|| purpose_for_position(i, total));
    let progression_role = from_template
        .map(|p| p.progression_role.clone())
        .unwrap_or_else(|| progression_role_for(i));

    let conversion_potential = conversion_for_position(i, total);

    ContentPiece {
        piece_number: i,
        piece_type,
        title,
        purpose,
        key_message: key_message_for_stage(audience_stage, &req.business_profile.business_name),
        cta_strategy: cta_for_position(i, total),
        progression_role,
        audience_stage,
        content_length: content_length_for(piece_type),
        required_assets: required_assets_for(piece_type),
        dependencies: if i == 1 { vec![] } else { vec![i - 1] },
        estimated_engagement: engagement_for_stage(audience_stage),
        conversion_potential,
    }
}

/// Quartile mapping of sequence position to funnel stage. Monotonic in `i`
/// for a fixed `total`.
pub fn stage_for_position(i: u32, total: u32) -> AudienceStage {
    let ratio = i as f64 / total as f64;
    if ratio <= 0.25 {
        AudienceStage::Awareness
    } else if ratio <= 0.50 {
        AudienceStage::Consideration
    } else if ratio <= 0.75 {
        AudienceStage::Decision
    } else {
        AudienceStage::Retention
    }
}

fn tertile(i: u32, total: u32) -> u8 {
    let ratio = i as f64 / total as f64;
    if ratio <= 1.0 / 3.0 {
        0
    } else if ratio <= 2.0 / 3.0 {
        1
    } else {
        2
    }
}

fn purpose_for_position(i: u32, total: u32) -> String {
    match tertile(i, total) {
        0 => "Set the foundation: introduce the theme and earn attention".to_string(),
        1 => "Deepen the relationship: build understanding and trust".to_string(),
        _ => "Consolidate and drive action: convert accumulated trust".to_string(),
    }
}

fn cta_for_position(i: u32, total: u32) -> String {
    match tertile(i, total) {
        0 => "Soft engagement: invite a follow, reply, or save".to_string(),
        1 => "Medium commitment: invite a subscribe or share".to_string(),
        _ => "Strong ask: invite a signup, booking, or purchase".to_string(),
    }
}

fn conversion_for_position(i: u32, total: u32) -> ConversionPotential {
    match tertile(i, total) {
        0 => ConversionPotential::Low,
        1 => ConversionPotential::Medium,
        _ => ConversionPotential::High,
    }
}

fn progression_role_for(i: u32) -> String {
    let idx = (i as usize - 1).min(PROGRESSION_ROLES.len() - 1);
    PROGRESSION_ROLES[idx].to_string()
}

fn default_piece_type(campaign_type: CampaignType) -> PieceType {
    match campaign_type {
        CampaignType::EmailSeries => PieceType::Email,
        CampaignType::ArticleSeries => PieceType::Article,
        CampaignType::ProductLaunch => PieceType::SocialPost,
        CampaignType::SocialCampaign => PieceType::SocialPost,
    }
}

pub fn content_length_for(piece_type: PieceType) -> ContentLength {
    match piece_type {
        PieceType::SocialPost | PieceType::Infographic => ContentLength::Short,
        PieceType::Email | PieceType::VideoScript | PieceType::Newsletter
        | PieceType::LandingPage => ContentLength::Medium,
        PieceType::Article | PieceType::CaseStudy | PieceType::Webinar => ContentLength::Long,
    }
}

pub fn required_assets_for(piece_type: PieceType) -> Vec<String> {
    let assets: &[&str] = match piece_type {
        PieceType::Email => &["Subject line variants", "Header image"],
        PieceType::Article => &["Hero image", "Inline diagrams"],
        PieceType::SocialPost => &["Feed graphic", "Hashtag set"],
        PieceType::VideoScript => &["Storyboard", "Caption file"],
        PieceType::Infographic => &["Data source", "Brand color palette"],
        PieceType::CaseStudy => &["Customer quote", "Outcome metrics"],
        PieceType::Webinar => &["Slide deck", "Registration page"],
        PieceType::Newsletter => &["Section templates", "Feature image"],
        PieceType::LandingPage => &["Hero copy", "Conversion form"],
    };
    assets.iter().map(|a| a.to_string()).collect()
}

fn key_message_for_stage(stage: AudienceStage, business_name: &str) -> String {
    match stage {
        AudienceStage::Awareness => {
            format!("Meet {business_name} and the problem it exists to solve")
        }
        AudienceStage::Consideration => {
            format!("Why {business_name}'s approach works where alternatives fall short")
        }
        AudienceStage::Decision => {
            format!("The concrete outcome of choosing {business_name}")
        }
        AudienceStage::Retention => {
            format!("Staying connected with {business_name} pays off over time")
        }
    }
}

fn engagement_for_stage(stage: AudienceStage) -> String {
    match stage {
        AudienceStage::Awareness => "Broad reach, lighter interaction".to_string(),
        AudienceStage::Consideration => "Fewer impressions, deeper engagement".to_string(),
        AudienceStage::Decision => "High intent, click-focused".to_string(),
        AudienceStage::Retention => "Smaller audience, strongest loyalty signals".to_string(),
    }
}

fn campaign_overview(req: &CampaignRequest, total: u32) -> CampaignOverview {
    let objective = match req.campaign_type {
        CampaignType::EmailSeries => "Turn new subscribers into engaged readers",
        CampaignType::ArticleSeries => "Build topical authority over the series arc",
        CampaignType::ProductLaunch => "Convert accumulated anticipation into launch-day action",
        CampaignType::SocialCampaign => "Grow reach and convert attention into followers",
    };
    CampaignOverview {
        name: req.campaign_name.clone(),
        campaign_type: req.campaign_type,
        total_pieces: total,
        timeline: format!("{total} weeks, one piece per week"),
        objective: objective.to_string(),
        success_criteria: success_criteria(req.campaign_type),
    }
}

fn success_criteria(campaign_type: CampaignType) -> Vec<String> {
    let criteria: &[&str] = match campaign_type {
        CampaignType::EmailSeries => &[
            "Above-benchmark open rate across the sequence",
            "Under 1% unsubscribe rate",
        ],
        CampaignType::ArticleSeries => &[
            "Rising read-through rate piece over piece",
            "Organic search impressions for series topics",
        ],
        CampaignType::ProductLaunch => &[
            "Waitlist growth before launch day",
            "Launch-week conversion target hit",
        ],
        CampaignType::SocialCampaign => &[
            "Net follower growth over the campaign",
            "Engagement rate above account baseline",
        ],
    };
    criteria.iter().map(|c| c.to_string()).collect()
}

fn consistency_framework(req: &CampaignRequest) -> ConsistencyFramework {
    let voice = req
        .business_profile
        .content_strategy
        .as_ref()
        .map(|s| s.brand_voice.clone())
        .unwrap_or_else(|| "Consistent with the brand profile voice".to_string());
    ConsistencyFramework {
        voice,
        visual_style: "Shared palette, typography, and layout across all pieces".to_string(),
        messaging_themes: vec![
            "One campaign promise repeated piece to piece".to_string(),
            "Each piece references the previous one".to_string(),
        ],
        branding_elements: vec!["Logo placement".to_string(), "Campaign tagline".to_string()],
    }
}

fn campaign_resources(campaign_type: CampaignType) -> Vec<String> {
    let resources: &[&str] = match campaign_type {
        CampaignType::EmailSeries => &["Email service provider", "Copywriting time"],
        CampaignType::ArticleSeries => &["Long-form writing time", "Editorial review"],
        CampaignType::ProductLaunch => &["Cross-format production", "Launch-day coordination"],
        CampaignType::SocialCampaign => &["Design support", "Daily community management"],
    };
    resources.iter().map(|r| r.to_string()).collect()
}

fn publishing_cadence(campaign_type: CampaignType) -> String {
    match campaign_type {
        CampaignType::EmailSeries => "One email every 2-3 days".to_string(),
        CampaignType::ArticleSeries => "Weekly, same day and time".to_string(),
        CampaignType::ProductLaunch => "Accelerating toward launch day".to_string(),
        CampaignType::SocialCampaign => "Every weekday at peak hours".to_string(),
    }
}

/// Partitions pieces into the four fixed journey buckets, preserving
/// sequence order within each bucket.
fn partition_journey(pieces: &[ContentPiece]) -> AudienceJourney {
    let mut journey = AudienceJourney::default();
    for piece in pieces {
        let bucket = match piece.audience_stage {
            AudienceStage::Awareness => &mut journey.awareness,
            AudienceStage::Consideration => &mut journey.consideration,
            AudienceStage::Decision => &mut journey.decision,
            AudienceStage::Retention => &mut journey.retention,
        };
        bucket.pieces.push(piece.piece_number);
        bucket.key_messages.push(piece.key_message.clone());
        bucket.goals.push(piece.purpose.clone());
    }
    journey
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::templates::TemplateCatalog;
    use crate::models::business::{WizardInputs, WizardType};
    use crate::profile::business::generate_business_profile;
    use serde_json::json;

    fn make_request(campaign_type: CampaignType, total_pieces: u32) -> CampaignRequest {
        CampaignRequest {
            campaign_type,
            campaign_name: "Test".to_string(),
            total_pieces,
            business_profile: generate_business_profile(
                WizardType::BrandBlueprint,
                &WizardInputs {
                    business_name: Some("Acme".to_string()),
                    ..Default::default()
                },
            ),
            custom_requirements: None,
        }
    }

    #[test]
    fn test_sequence_length_matches_total_pieces() {
        for total in [1, 3, 5, 12] {
            let req = make_request(CampaignType::SocialCampaign, total);
            let profile = generate_campaign_profile(&req, None);
            assert_eq!(profile.content_sequence.len(), total as usize);
        }
    }

    #[test]
    fn test_piece_numbers_are_contiguous_from_one() {
        let req = make_request(CampaignType::ArticleSeries, 7);
        let profile = generate_campaign_profile(&req, None);
        for (idx, piece) in profile.content_sequence.iter().enumerate() {
            assert_eq!(piece.piece_number, idx as u32 + 1);
        }
    }

    #[test]
    fn test_dependencies_form_strict_linear_chain() {
        let req = make_request(CampaignType::EmailSeries, 6);
        let profile = generate_campaign_profile(&req, None);
        assert!(profile.content_sequence[0].dependencies.is_empty());
        for piece in &profile.content_sequence[1..] {
            assert_eq!(piece.dependencies, vec![piece.piece_number - 1]);
        }
    }

    #[test]
    fn test_audience_stage_never_regresses() {
        for total in [1, 4, 5, 9, 20] {
            let req = make_request(CampaignType::SocialCampaign, total);
            let profile = generate_campaign_profile(&req, None);
            let mut last_rank = 0;
            for piece in &profile.content_sequence {
                let rank = piece.audience_stage.rank();
                assert!(
                    rank >= last_rank,
                    "stage regressed at piece {} of {total}",
                    piece.piece_number
                );
                last_rank = rank;
            }
        }
    }

    #[test]
    fn test_quartile_boundaries_for_four_pieces() {
        assert_eq!(stage_for_position(1, 4), AudienceStage::Awareness);
        assert_eq!(stage_for_position(2, 4), AudienceStage::Consideration);
        assert_eq!(stage_for_position(3, 4), AudienceStage::Decision);
        assert_eq!(stage_for_position(4, 4), AudienceStage::Retention);
    }

    #[test]
    fn test_single_piece_campaign_lands_in_final_quartile() {
        // ratio 1.0 falls past every quartile boundary.
        assert_eq!(stage_for_position(1, 1), AudienceStage::Retention);
        let req = make_request(CampaignType::EmailSeries, 1);
        let profile = generate_campaign_profile(&req, None);
        assert_eq!(profile.content_sequence.len(), 1);
    }

    #[test]
    fn test_welcome_email_template_pieces_reproduced_verbatim() {
        let catalog = TemplateCatalog::default();
        let template = catalog.find(CampaignType::EmailSeries);
        let req = make_request(CampaignType::EmailSeries, 5);
        let profile = generate_campaign_profile(&req, template);

        let titles: Vec<&str> = profile
            .content_sequence
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Welcome & Set Expectations",
                "Our Story & Mission",
                "Core Value Delivery",
                "Social Proof & Success Stories",
                "Soft CTA & Next Steps",
            ]
        );
        let stages: Vec<AudienceStage> = profile
            .content_sequence
            .iter()
            .map(|p| p.audience_stage)
            .collect();
        assert_eq!(
            stages,
            vec![
                AudienceStage::Awareness,
                AudienceStage::Awareness,
                AudienceStage::Consideration,
                AudienceStage::Decision,
                AudienceStage::Retention,
            ]
        );
    }

    #[test]
    fn test_pieces_beyond_template_length_are_synthesized() {
        let catalog = TemplateCatalog::default();
        let template = catalog.find(CampaignType::EmailSeries);
        let req = make_request(CampaignType::EmailSeries, 8);
        let profile = generate_campaign_profile(&req, template);

        assert_eq!(profile.content_sequence[4].title, "Soft CTA & Next Steps");
        assert_eq!(profile.content_sequence[5].title, "Test — Part 6");
        assert_eq!(profile.content_sequence[5].piece_type, PieceType::Email);
    }

    #[test]
    fn test_no_template_routes_every_piece_through_defaults() {
        let req = make_request(CampaignType::ProductLaunch, 4);
        let profile = generate_campaign_profile(&req, None);
        for piece in &profile.content_sequence {
            assert!(piece.title.starts_with("Test — Part "));
            assert_eq!(piece.piece_type, PieceType::SocialPost);
        }
    }

    #[test]
    fn test_progression_role_clamps_at_last_entry() {
        let req = make_request(CampaignType::SocialCampaign, 12);
        let profile = generate_campaign_profile(&req, None);
        assert_eq!(profile.content_sequence[0].progression_role, "opening_hook");
        assert_eq!(
            profile.content_sequence[11].progression_role,
            "relationship_extension"
        );
        // Everything past the 8th entry holds the final role.
        assert_eq!(
            profile.content_sequence[8].progression_role,
            "relationship_extension"
        );
    }

    #[test]
    fn test_conversion_potential_rises_by_tertile() {
        let req = make_request(CampaignType::EmailSeries, 9);
        let profile = generate_campaign_profile(&req, None);
        assert_eq!(
            profile.content_sequence[0].conversion_potential,
            ConversionPotential::Low
        );
        assert_eq!(
            profile.content_sequence[4].conversion_potential,
            ConversionPotential::Medium
        );
        assert_eq!(
            profile.content_sequence[8].conversion_potential,
            ConversionPotential::High
        );
    }

    #[test]
    fn test_journey_buckets_preserve_sequence_order() {
        let req = make_request(CampaignType::SocialCampaign, 8);
        let profile = generate_campaign_profile(&req, None);
        let journey = &profile.audience_journey;
        let all_buckets = [
            &journey.awareness,
            &journey.consideration,
            &journey.decision,
            &journey.retention,
        ];
        let mut collected: Vec<u32> = Vec::new();
        for bucket in all_buckets {
            assert!(bucket.pieces.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(bucket.pieces.len(), bucket.key_messages.len());
            assert_eq!(bucket.pieces.len(), bucket.goals.len());
            collected.extend(&bucket.pieces);
        }
        assert_eq!(collected.len(), 8);
    }

    #[test]
    fn test_success_metrics_keyed_by_every_piece_number() {
        let req = make_request(CampaignType::ArticleSeries, 5);
        let profile = generate_campaign_profile(&req, None);
        for piece in &profile.content_sequence {
            assert!(profile
                .success_metrics_per_piece
                .contains_key(&piece.piece_number.to_string()));
        }
    }

    #[test]
    fn test_custom_requirements_shallow_merge_overrides_top_level_only() {
        let req = make_request(CampaignType::EmailSeries, 5);
        let catalog = TemplateCatalog::default();
        let profile =
            generate_campaign_profile(&req, catalog.find(CampaignType::EmailSeries));
        let generated_sequence = profile.content_sequence.clone();

        let overrides = json!({
            "campaign_overview": {
                "name": "Overridden",
                "campaign_type": "email_series",
                "total_pieces": 5,
                "timeline": "2 weeks",
                "objective": "Custom objective",
                "success_criteria": []
            }
        });
        let merged = apply_custom_requirements(
            profile,
            overrides.as_object().unwrap(),
        )
        .unwrap();

        assert_eq!(merged.campaign_overview.name, "Overridden");
        assert_eq!(merged.campaign_overview.objective, "Custom objective");
        // Keys absent from the override keep their generated values.
        assert_eq!(merged.content_sequence.len(), generated_sequence.len());
        assert_eq!(
            merged.content_sequence[0].title,
            generated_sequence[0].title
        );
    }

    #[test]
    fn test_malformed_override_is_a_validation_error() {
        let req = make_request(CampaignType::EmailSeries, 3);
        let profile = generate_campaign_profile(&req, None);
        let overrides = json!({ "content_sequence": "not an array" });
        let result = apply_custom_requirements(profile, overrides.as_object().unwrap());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_content_length_and_assets_derive_from_piece_type() {
        assert_eq!(content_length_for(PieceType::SocialPost), ContentLength::Short);
        assert_eq!(content_length_for(PieceType::Article), ContentLength::Long);
        assert!(required_assets_for(PieceType::Webinar)
            .contains(&"Slide deck".to_string()));
    }
}
