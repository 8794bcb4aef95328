//! Per-piece success metric tables, keyed by piece type, audience stage, and
//! conversion potential.

use std::collections::BTreeMap;

use crate::models::campaign::{
    AudienceStage, ContentPiece, ConversionPotential, PieceMetrics, PieceType,
};

pub fn kpis_for_piece_type(piece_type: PieceType) -> Vec<String> {
    let kpis: &[&str] = match piece_type {
        PieceType::Email => &["Open rate", "Click-through rate"],
        PieceType::Article => &["Read-through rate", "Time on page"],
        PieceType::SocialPost => &["Engagement rate", "Shares"],
        PieceType::VideoScript => &["View-through rate", "Watch time"],
        PieceType::Infographic => &["Saves", "Shares"],
        PieceType::CaseStudy => &["Downloads", "Sales-assisted conversions"],
        PieceType::Webinar => &["Registrations", "Live attendance rate"],
        PieceType::Newsletter => &["Open rate", "Reply rate"],
        PieceType::LandingPage => &["Conversion rate", "Bounce rate"],
    };
    kpis.iter().map(|k| k.to_string()).collect()
}

pub fn engagement_targets_for_stage(stage: AudienceStage) -> Vec<String> {
    let targets: &[&str] = match stage {
        AudienceStage::Awareness => &["Reach new audience members", "Earn the first impression"],
        AudienceStage::Consideration => &["Hold attention through the full piece", "Prompt saves and revisits"],
        AudienceStage::Decision => &["Drive clicks to the offer", "Surface objections in replies"],
        AudienceStage::Retention => &["Bring the audience back", "Convert readers into advocates"],
    };
    targets.iter().map(|t| t.to_string()).collect()
}

pub fn conversion_goals_for_potential(potential: ConversionPotential) -> Vec<String> {
    let goals: &[&str] = match potential {
        ConversionPotential::Low => &["Grow the audience pool"],
        ConversionPotential::Medium => &["Capture emails or follows"],
        ConversionPotential::High => &["Drive signups or purchases", "Book conversations"],
    };
    goals.iter().map(|g| g.to_string()).collect()
}

pub fn piece_metrics(piece: &ContentPiece) -> PieceMetrics {
    PieceMetrics {
        kpis: kpis_for_piece_type(piece.piece_type),
        engagement_targets: engagement_targets_for_stage(piece.audience_stage),
        conversion_goals: conversion_goals_for_potential(piece.conversion_potential),
    }
}

/// Builds the per-piece metrics map, keyed by `piece_number.to_string()`.
pub fn build_success_metrics(pieces: &[ContentPiece]) -> BTreeMap<String, PieceMetrics> {
    pieces
        .iter()
        .map(|p| (p.piece_number.to_string(), piece_metrics(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_piece_type_has_kpis() {
        for pt in [
            PieceType::Email,
            PieceType::Article,
            PieceType::SocialPost,
            PieceType::VideoScript,
            PieceType::Infographic,
            PieceType::CaseStudy,
            PieceType::Webinar,
            PieceType::Newsletter,
            PieceType::LandingPage,
        ] {
            assert!(!kpis_for_piece_type(pt).is_empty(), "{pt:?}");
        }
    }

    #[test]
    fn test_high_potential_includes_purchase_goal() {
        let goals = conversion_goals_for_potential(ConversionPotential::High);
        assert!(goals.iter().any(|g| g.contains("signups")));
    }

    #[test]
    fn test_metrics_map_keys_are_stringified_piece_numbers() {
        use crate::models::campaign::ContentLength;
        let piece = ContentPiece {
            piece_number: 3,
            piece_type: PieceType::Email,
            title: "t".to_string(),
            purpose: "p".to_string(),
            key_message: "k".to_string(),
            cta_strategy: "c".to_string(),
            progression_role: "r".to_string(),
            audience_stage: AudienceStage::Decision,
            content_length: ContentLength::Medium,
            required_assets: vec![],
            dependencies: vec![2],
            estimated_engagement: "e".to_string(),
            conversion_potential: ConversionPotential::High,
        };
        let map = build_success_metrics(&[piece]);
        assert!(map.contains_key("3"));
    }
}
