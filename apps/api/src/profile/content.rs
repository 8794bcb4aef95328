//! Content Context Profile Generator — expands a single generation request
//! into an audience/brand/platform/strategy profile.
//!
//! Extraction is deliberate keyword matching, not NLP: if the input text
//! contains any member of a keyword set (case-insensitive substring), the
//! set's associated tag lists are union'd into the output. Multiple sets can
//! match and contribute.

use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;

use crate::models::content::{
    AudienceProfile, AudienceSegment, BehaviorPatterns, Benchmarks, BrandIdentity,
    ComplianceProfile, ContentContextProfile, ContentMetadata, ContentRequest,
    ContentStrategyProfile, Demographics, MetricsProfile, PlatformContext, PlatformSpecs,
    Psychographics,
};

/// Literal defaults — the analyzer compares against these exact strings.
pub const DEFAULT_AGE_RANGE: &str = "25-45";
pub const DEFAULT_TONE: &str = "Professional and approachable";
pub const DEFAULT_PLATFORM: &str = "Multi-platform";
pub const DEFAULT_OCCUPATION: &str = "Professionals";

/// Prompt length threshold for the confidence bonus.
const DETAILED_PROMPT_CHARS: usize = 50;

const BUSINESS_KEYWORDS: &[&str] = &[
    "business",
    "entrepreneur",
    "founder",
    "startup",
    "executive",
    "manager",
    "b2b",
];
const BUSINESS_INTERESTS: &[&str] = &["entrepreneurship", "productivity", "growth strategy"];
const BUSINESS_PAIN_POINTS: &[&str] = &[
    "Limited time for content creation",
    "Difficulty standing out in a crowded market",
];

const TECH_KEYWORDS: &[&str] = &[
    "tech",
    "developer",
    "engineer",
    "software",
    "saas",
    "digital",
    "ai",
];
const TECH_INTERESTS: &[&str] = &["technology", "innovation", "automation"];
const TECH_PAIN_POINTS: &[&str] = &[
    "Keeping up with a fast-moving field",
    "Translating technical value for non-technical buyers",
];

fn age_range_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\s*[-\u{2013}]\s*\d+").expect("valid age range regex"))
}

/// Builds a fresh content profile from a generation request.
pub fn generate_content_profile(req: &ContentRequest) -> ContentContextProfile {
    let platform = req.platform.as_deref();
    let specs = platform_specs(platform);
    let audience_behavior = platform_behavior(platform);

    ContentContextProfile {
        brand: brand_identity(req),
        audience: AudienceProfile {
            primary: extract_audience(req.audience.as_deref()),
            secondary: None,
        },
        strategy: ContentStrategyProfile {
            objectives: infer_objectives(&req.prompt, &req.content_type),
            key_messages: key_messages(req),
            content_pillars: vec![
                "Education".to_string(),
                "Engagement".to_string(),
                "Conversion".to_string(),
            ],
            competitor_gaps: vec![
                "Consistent publishing cadence".to_string(),
                "Platform-native formats".to_string(),
            ],
            content_framework: "Hook, value, call to action".to_string(),
        },
        platform_context: PlatformContext {
            specs,
            audience_behavior,
        },
        compliance: compliance_profile(),
        metrics: MetricsProfile {
            kpis: vec![
                "Engagement rate".to_string(),
                "Reach".to_string(),
                "Click-through rate".to_string(),
            ],
            benchmarks: benchmarks(platform, &req.content_type),
        },
        metadata: ContentMetadata {
            content_type: req.content_type.clone(),
            confidence_score: confidence_score(req),
            generated_at: Utc::now(),
        },
    }
}

fn brand_identity(req: &ContentRequest) -> BrandIdentity {
    BrandIdentity {
        voice: req
            .tone
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TONE)
            .to_string(),
        personality: vec![
            "Credible".to_string(),
            "Helpful".to_string(),
            "Direct".to_string(),
        ],
        visual_identity: req
            .brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or("Clean, consistent, recognizable at a glance")
            .to_string(),
    }
}

/// Scans free audience text for an age range and the fixed keyword sets.
/// Unmatched fields fall back to the literal defaults.
pub fn extract_audience(audience: Option<&str>) -> AudienceSegment {
    let text = audience.unwrap_or("");
    let lower = text.to_lowercase();

    let age_range = age_range_pattern()
        .find(text)
        .map(|m| m.as_str().split_whitespace().collect::<String>())
        .unwrap_or_else(|| DEFAULT_AGE_RANGE.to_string());

    let mut interests: Vec<String> = Vec::new();
    let mut pain_points: Vec<String> = Vec::new();
    if BUSINESS_KEYWORDS.iter().any(|k| lower.contains(k)) {
        interests.extend(BUSINESS_INTERESTS.iter().map(|s| s.to_string()));
        pain_points.extend(BUSINESS_PAIN_POINTS.iter().map(|s| s.to_string()));
    }
    if TECH_KEYWORDS.iter().any(|k| lower.contains(k)) {
        interests.extend(TECH_INTERESTS.iter().map(|s| s.to_string()));
        pain_points.extend(TECH_PAIN_POINTS.iter().map(|s| s.to_string()));
    }

    AudienceSegment {
        demographics: Demographics {
            age_range,
            occupation: DEFAULT_OCCUPATION.to_string(),
        },
        psychographics: Psychographics {
            interests,
            values: vec!["Authenticity".to_string(), "Practical value".to_string()],
            pain_points,
        },
        behavior: BehaviorPatterns {
            content_consumption: "Mobile-first, short sessions".to_string(),
            engagement_style: "Skims first, engages with clear value".to_string(),
            purchase_drivers: vec![
                "Social proof".to_string(),
                "Clear outcome framing".to_string(),
            ],
        },
    }
}

/// Static platform spec table keyed by lower-cased platform name.
pub fn platform_specs(platform: Option<&str>) -> PlatformSpecs {
    let lower = platform.map(|p| p.trim().to_lowercase());
    match lower.as_deref() {
        Some("twitter") | Some("x") => PlatformSpecs {
            name: "Twitter".to_string(),
            max_chars: 280,
            hashtag_limit: 2,
            recommended_length: "70-100 characters for peak engagement".to_string(),
        },
        Some("linkedin") => PlatformSpecs {
            name: "LinkedIn".to_string(),
            max_chars: 3000,
            hashtag_limit: 5,
            recommended_length: "150-300 words with a strong opening line".to_string(),
        },
        Some("instagram") => PlatformSpecs {
            name: "Instagram".to_string(),
            max_chars: 2200,
            hashtag_limit: 30,
            recommended_length: "125-150 characters before the fold".to_string(),
        },
        Some("facebook") => PlatformSpecs {
            name: "Facebook".to_string(),
            max_chars: 63206,
            hashtag_limit: 3,
            recommended_length: "40-80 characters for link posts".to_string(),
        },
        _ => PlatformSpecs {
            name: DEFAULT_PLATFORM.to_string(),
            max_chars: 2000,
            hashtag_limit: 5,
            recommended_length: "Adapt length to each channel".to_string(),
        },
    }
}

/// Static per-platform audience behavior descriptions.
pub fn platform_behavior(platform: Option<&str>) -> String {
    let lower = platform.map(|p| p.trim().to_lowercase());
    match lower.as_deref() {
        Some("twitter") | Some("x") => {
            "Fast-scrolling, reply-driven; rewards sharp takes and threads"
        }
        Some("linkedin") => "Professional browsing during work hours; rewards insight and story",
        Some("instagram") => "Visual-first discovery; rewards strong imagery and carousels",
        Some("facebook") => "Community-oriented; rewards discussion prompts and shares",
        _ => "Mixed browsing habits; lead with the strongest single message",
    }
    .to_string()
}

/// Scans the prompt for objective keyword groups; appends one label per
/// matching group. Falls back to a per-content-type default when none match.
pub fn infer_objectives(prompt: &str, content_type: &str) -> Vec<String> {
    let lower = prompt.to_lowercase();
    let mut objectives = Vec::new();
    if lower.contains("awareness") {
        objectives.push("Build brand awareness".to_string());
    }
    if lower.contains("engagement") {
        objectives.push("Drive audience engagement".to_string());
    }
    if lower.contains("lead") || lower.contains("conversion") {
        objectives.push("Generate qualified leads".to_string());
    }
    if lower.contains("education") || lower.contains("learn") {
        objectives.push("Educate the audience".to_string());
    }
    if objectives.is_empty() {
        objectives.push(default_objective(content_type));
    }
    objectives
}

fn default_objective(content_type: &str) -> String {
    match content_type.to_lowercase().as_str() {
        "email" | "newsletter" => "Nurture subscriber relationships".to_string(),
        "article" | "blog" => "Establish topical authority".to_string(),
        "video" => "Capture attention with visual storytelling".to_string(),
        _ => "Grow audience engagement".to_string(),
    }
}

fn key_messages(req: &ContentRequest) -> Vec<String> {
    let mut messages = vec!["Lead with the audience's problem, not the product".to_string()];
    if !req.prompt.trim().is_empty() {
        messages.push(format!("Anchor the piece on: {}", req.prompt.trim()));
    }
    messages
}

fn compliance_profile() -> ComplianceProfile {
    ComplianceProfile {
        regulations: vec!["Disclose sponsored or affiliate content".to_string()],
        guidelines: vec!["Follow per-platform community guidelines".to_string()],
        ethics: vec!["No fabricated claims or manufactured urgency".to_string()],
        accessibility: vec![
            "Alt text on images".to_string(),
            "Captions on video".to_string(),
        ],
    }
}

/// Static benchmark tables: engagement/reach per platform, conversion per
/// content type.
pub fn benchmarks(platform: Option<&str>, content_type: &str) -> Benchmarks {
    let lower = platform.map(|p| p.trim().to_lowercase());
    let (engagement_rate, reach_rate) = match lower.as_deref() {
        Some("twitter") | Some("x") => (0.015, 0.10),
        Some("linkedin") => (0.024, 0.08),
        Some("instagram") => (0.047, 0.12),
        Some("facebook") => (0.009, 0.05),
        _ => (0.020, 0.08),
    };
    let conversion_rate = match content_type.to_lowercase().as_str() {
        "email" | "newsletter" => 0.030,
        "article" | "blog" => 0.012,
        "video" => 0.018,
        _ => 0.010,
    };
    Benchmarks {
        engagement_rate,
        reach_rate,
        conversion_rate,
    }
}

/// Confidence contract: base 0.5, plus 0.15 (audience), 0.10 (platform),
/// 0.10 (tone), 0.15 (prompt longer than 50 chars); hard cap at 1.0.
pub fn confidence_score(req: &ContentRequest) -> f64 {
    let mut score: f64 = 0.5;
    if req.audience.as_deref().is_some_and(|a| !a.trim().is_empty()) {
        score += 0.15;
    }
    if req.platform.as_deref().is_some_and(|p| !p.trim().is_empty()) {
        score += 0.10;
    }
    if req.tone.as_deref().is_some_and(|t| !t.trim().is_empty()) {
        score += 0.10;
    }
    if req.prompt.chars().count() > DETAILED_PROMPT_CHARS {
        score += 0.15;
    }
    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(
        prompt: &str,
        platform: Option<&str>,
        tone: Option<&str>,
        audience: Option<&str>,
    ) -> ContentRequest {
        ContentRequest {
            content_type: "social_post".to_string(),
            prompt: prompt.to_string(),
            platform: platform.map(str::to_string),
            tone: tone.map(str::to_string),
            audience: audience.map(str::to_string),
            brand: None,
        }
    }

    #[test]
    fn test_confidence_all_inputs_present_is_exactly_one() {
        let req = make_request(&"a".repeat(60), Some("p"), Some("t"), Some("a"));
        assert_eq!(confidence_score(&req), 1.0);
    }

    #[test]
    fn test_confidence_without_audience_is_0_85() {
        let req = make_request(&"a".repeat(60), Some("p"), Some("t"), None);
        assert!((confidence_score(&req) - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_bare_prompt_is_base_0_5() {
        let req = make_request("short", None, None, None);
        assert_eq!(confidence_score(&req), 0.5);
    }

    #[test]
    fn test_confidence_prompt_exactly_50_chars_gets_no_bonus() {
        let req = make_request(&"a".repeat(50), None, None, None);
        assert_eq!(confidence_score(&req), 0.5);
    }

    #[test]
    fn test_age_range_extracted_from_audience_text() {
        let segment = extract_audience(Some("marketing managers aged 28-40 in SaaS"));
        assert_eq!(segment.demographics.age_range, "28-40");
    }

    #[test]
    fn test_age_range_with_en_dash_and_spaces() {
        let segment = extract_audience(Some("founders 30 \u{2013} 45"));
        assert_eq!(segment.demographics.age_range, "30\u{2013}45");
    }

    #[test]
    fn test_age_range_falls_back_to_default() {
        let segment = extract_audience(Some("creative freelancers"));
        assert_eq!(segment.demographics.age_range, DEFAULT_AGE_RANGE);
    }

    #[test]
    fn test_business_keywords_union_business_interests() {
        let segment = extract_audience(Some("Startup founders scaling to series A"));
        assert!(segment
            .psychographics
            .interests
            .contains(&"entrepreneurship".to_string()));
        assert!(!segment.psychographics.pain_points.is_empty());
    }

    #[test]
    fn test_both_keyword_sets_can_contribute() {
        let segment = extract_audience(Some("tech startup founders"));
        let interests = &segment.psychographics.interests;
        assert!(interests.contains(&"entrepreneurship".to_string()));
        assert!(interests.contains(&"technology".to_string()));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let segment = extract_audience(Some("SAAS EXECUTIVES"));
        assert!(!segment.psychographics.interests.is_empty());
    }

    #[test]
    fn test_unmatched_audience_yields_empty_interests() {
        let segment = extract_audience(Some("gardeners who love roses"));
        assert!(segment.psychographics.interests.is_empty());
        assert!(segment.psychographics.pain_points.is_empty());
    }

    #[test]
    fn test_platform_specs_twitter_limits() {
        let specs = platform_specs(Some("Twitter"));
        assert_eq!(specs.max_chars, 280);
        assert_eq!(specs.hashtag_limit, 2);
    }

    #[test]
    fn test_platform_specs_lookup_is_case_insensitive() {
        let specs = platform_specs(Some("LinkedIn"));
        assert_eq!(specs.name, "LinkedIn");
        assert_eq!(specs.max_chars, 3000);
    }

    #[test]
    fn test_unknown_platform_falls_back_to_multi_platform() {
        let specs = platform_specs(Some("myspace"));
        assert_eq!(specs.name, DEFAULT_PLATFORM);
    }

    #[test]
    fn test_no_platform_falls_back_to_multi_platform() {
        let specs = platform_specs(None);
        assert_eq!(specs.name, DEFAULT_PLATFORM);
    }

    #[test]
    fn test_objectives_one_label_per_matching_group() {
        let objectives =
            infer_objectives("drive awareness and engagement for the launch", "social_post");
        assert_eq!(
            objectives,
            vec!["Build brand awareness", "Drive audience engagement"]
        );
    }

    #[test]
    fn test_objectives_lead_and_conversion_share_a_group() {
        let objectives = infer_objectives("lead magnet with conversion focus", "social_post");
        assert_eq!(objectives, vec!["Generate qualified leads"]);
    }

    #[test]
    fn test_objectives_fall_back_by_content_type() {
        let objectives = infer_objectives("spring update", "email");
        assert_eq!(objectives, vec!["Nurture subscriber relationships"]);
    }

    #[test]
    fn test_default_tone_used_when_absent() {
        let profile = generate_content_profile(&make_request("x", None, None, None));
        assert_eq!(profile.brand.voice, DEFAULT_TONE);
    }

    #[test]
    fn test_full_profile_carries_confidence_in_metadata() {
        let req = make_request(&"a".repeat(60), Some("linkedin"), Some("bold"), Some("devs"));
        let profile = generate_content_profile(&req);
        assert_eq!(profile.metadata.confidence_score, 1.0);
        assert_eq!(profile.platform_context.specs.name, "LinkedIn");
    }

    #[test]
    fn test_benchmarks_static_tables() {
        let b = benchmarks(Some("instagram"), "email");
        assert!((b.engagement_rate - 0.047).abs() < f64::EPSILON);
        assert!((b.conversion_rate - 0.030).abs() < f64::EPSILON);
    }
}
