//! Profile Analyzer — scores how complete a content profile is and emits
//! recommendations for the inputs that would sharpen generation.

use serde::{Deserialize, Serialize};

use crate::models::content::ContentContextProfile;
use crate::profile::content::{DEFAULT_AGE_RANGE, DEFAULT_PLATFORM, DEFAULT_TONE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub score: f64,
    pub missing_fields: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Unconditional base added before the per-check weights.
const BASE_SCORE: f64 = 0.10;

/// Walks the fixed checklist in order. Weights sum to 1.10 with the base, so
/// the final `min(score, 1.0)` cap is load-bearing: a fully specified profile
/// still reports exactly 1.0.
///
/// Failed checks append their field label and recommendation in checklist
/// order — callers rely on that ordering.
pub fn analyze_profile_completeness(profile: &ContentContextProfile) -> ProfileAnalysis {
    let mut score = BASE_SCORE;
    let mut missing_fields = Vec::new();
    let mut recommendations = Vec::new();

    let checks: [(bool, f64, &str, &str); 6] = [
        (
            profile.audience.primary.demographics.age_range != DEFAULT_AGE_RANGE,
            0.15,
            "age_range",
            "Describe your audience with an age range (e.g. 25-34) for tighter targeting",
        ),
        (
            !profile.audience.primary.psychographics.interests.is_empty(),
            0.15,
            "interests",
            "Mention what your audience cares about so content can speak to their interests",
        ),
        (
            !profile.strategy.objectives.is_empty(),
            0.20,
            "objectives",
            "State a goal (awareness, engagement, leads, education) to focus the content",
        ),
        (
            profile.platform_context.specs.name != DEFAULT_PLATFORM,
            0.15,
            "platform",
            "Pick a specific platform to unlock format and length optimizations",
        ),
        (
            profile.brand.voice != DEFAULT_TONE,
            0.10,
            "tone",
            "Set a custom tone of voice so content sounds like your brand",
        ),
        (
            !profile.audience.primary.psychographics.pain_points.is_empty(),
            0.15,
            "pain_points",
            "Describe audience pain points so content can lead with their problems",
        ),
    ];

    for (passed, weight, field, recommendation) in checks {
        if passed {
            score += weight;
        } else {
            missing_fields.push(field.to_string());
            recommendations.push(recommendation.to_string());
        }
    }

    ProfileAnalysis {
        score: score.min(1.0),
        missing_fields,
        recommendations,
    }
}

/// Appends content recommendations from independent, non-exclusive checks.
/// More than one condition may fire; none firing yields an empty list.
pub fn generate_content_recommendations(profile: &ContentContextProfile) -> Vec<String> {
    let mut recs = Vec::new();

    if profile.platform_context.specs.name == "LinkedIn" {
        recs.push(
            "Open with a professional insight or a number — LinkedIn rewards expertise signals"
                .to_string(),
        );
    }
    if profile.platform_context.specs.name == "Instagram" {
        recs.push("Plan the visual first; the caption supports the image, not the reverse".to_string());
    }
    if profile
        .audience
        .primary
        .psychographics
        .interests
        .iter()
        .any(|i| i == "technology")
    {
        recs.push("Use concrete technical detail — this audience discounts vague claims".to_string());
    }
    if profile
        .audience
        .primary
        .behavior
        .content_consumption
        .to_lowercase()
        .contains("mobile")
    {
        recs.push("Front-load the message; assume the first two lines are all that gets read".to_string());
    }
    if profile
        .strategy
        .objectives
        .iter()
        .any(|o| o.to_lowercase().contains("lead"))
    {
        recs.push("Pair the piece with a single, specific call to action".to_string());
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::ContentRequest;
    use crate::profile::content::generate_content_profile;

    fn profile_from(
        prompt: &str,
        platform: Option<&str>,
        tone: Option<&str>,
        audience: Option<&str>,
    ) -> ContentContextProfile {
        generate_content_profile(&ContentRequest {
            content_type: "social_post".to_string(),
            prompt: prompt.to_string(),
            platform: platform.map(str::to_string),
            tone: tone.map(str::to_string),
            audience: audience.map(str::to_string),
            brand: None,
        })
    }

    #[test]
    fn test_fully_specified_profile_caps_at_one() {
        // All six checks pass: raw sum would be 1.10, cap must hold it at 1.0.
        let profile = profile_from(
            "drive awareness for the launch",
            Some("linkedin"),
            Some("bold and direct"),
            Some("tech founders aged 28-40"),
        );
        let analysis = analyze_profile_completeness(&profile);
        assert_eq!(analysis.score, 1.0);
        assert!(analysis.missing_fields.is_empty());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_score_always_within_unit_interval() {
        let sparse = profile_from("x", None, None, None);
        let analysis = analyze_profile_completeness(&sparse);
        assert!((0.0..=1.0).contains(&analysis.score));
    }

    #[test]
    fn test_bare_profile_fails_audience_checks_in_order() {
        // Objectives always resolve via the content-type fallback, so a bare
        // profile fails exactly: age_range, interests, platform, tone, pain_points.
        let analysis = analyze_profile_completeness(&profile_from("x", None, None, None));
        assert_eq!(
            analysis.missing_fields,
            vec!["age_range", "interests", "platform", "tone", "pain_points"]
        );
        assert_eq!(analysis.recommendations.len(), 5);
    }

    #[test]
    fn test_bare_profile_score_is_base_plus_objectives() {
        let analysis = analyze_profile_completeness(&profile_from("x", None, None, None));
        // 0.10 base + 0.20 objectives
        assert!((analysis.score - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_each_recommendation_pairs_with_its_field() {
        let analysis = analyze_profile_completeness(&profile_from("x", None, None, None));
        assert_eq!(analysis.missing_fields.len(), analysis.recommendations.len());
    }

    #[test]
    fn test_platform_check_rejects_multi_platform_literal() {
        let multi = profile_from("x", None, None, Some("founders 25-34"));
        let analysis = analyze_profile_completeness(&multi);
        assert!(analysis.missing_fields.contains(&"platform".to_string()));

        let specific = profile_from("x", Some("twitter"), None, Some("founders 25-34"));
        let analysis = analyze_profile_completeness(&specific);
        assert!(!analysis.missing_fields.contains(&"platform".to_string()));
    }

    #[test]
    fn test_content_recommendations_multiple_conditions_fire() {
        let profile = profile_from(
            "lead generation push",
            Some("linkedin"),
            None,
            Some("tech founders"),
        );
        let recs = generate_content_recommendations(&profile);
        assert!(recs.iter().any(|r| r.contains("LinkedIn")));
        assert!(recs.iter().any(|r| r.contains("technical")));
        assert!(recs.iter().any(|r| r.contains("call to action")));
    }

    #[test]
    fn test_content_recommendations_conditions_are_independent() {
        let profile = profile_from("plain update", Some("instagram"), None, None);
        let recs = generate_content_recommendations(&profile);
        assert!(recs.iter().any(|r| r.contains("visual")));
        assert!(!recs.iter().any(|r| r.contains("LinkedIn")));
    }
}
