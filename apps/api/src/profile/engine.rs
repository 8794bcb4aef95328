#![allow(dead_code)]

//! Profile engine — pluggable, trait-based backend for profile synthesis.
//!
//! Default: `TemplateProfileEngine` (pure-Rust, deterministic, fully testable
//! template expansion). Future: `LlmProfileEngine` (real model-backed
//! synthesis once the product replaces the template stand-in).
//!
//! `AppState` holds an `Arc<dyn ProfileEngine>`, swapped at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::business::{BusinessContextProfile, WizardInputs, WizardType};
use crate::models::content::{ContentContextProfile, ContentRequest};
use crate::profile::business::generate_business_profile;
use crate::profile::content::generate_content_profile;

/// The profile engine trait. Implement this to swap backends without touching
/// handlers or callers.
#[async_trait]
pub trait ProfileEngine: Send + Sync {
    async fn business_profile(
        &self,
        wizard_type: WizardType,
        inputs: &WizardInputs,
    ) -> Result<BusinessContextProfile, AppError>;

    async fn content_profile(
        &self,
        request: &ContentRequest,
    ) -> Result<ContentContextProfile, AppError>;
}

/// Deterministic template-expansion engine — the shipping default.
pub struct TemplateProfileEngine;

#[async_trait]
impl ProfileEngine for TemplateProfileEngine {
    async fn business_profile(
        &self,
        wizard_type: WizardType,
        inputs: &WizardInputs,
    ) -> Result<BusinessContextProfile, AppError> {
        Ok(generate_business_profile(wizard_type, inputs))
    }

    async fn content_profile(
        &self,
        request: &ContentRequest,
    ) -> Result<ContentContextProfile, AppError> {
        Ok(generate_content_profile(request))
    }
}

/// Model-backed engine. Compiles but is not wired in yet.
pub struct LlmProfileEngine;

#[async_trait]
impl ProfileEngine for LlmProfileEngine {
    async fn business_profile(
        &self,
        _wizard_type: WizardType,
        _inputs: &WizardInputs,
    ) -> Result<BusinessContextProfile, AppError> {
        // TODO: replace template expansion with a real model call once the
        // product moves past mock generation.
        todo!("LLM profile engine")
    }

    async fn content_profile(
        &self,
        _request: &ContentRequest,
    ) -> Result<ContentContextProfile, AppError> {
        todo!("LLM profile engine")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_template_engine_delegates_to_pure_generators() {
        let engine = TemplateProfileEngine;
        let profile = engine
            .business_profile(WizardType::BrandBlueprint, &WizardInputs::default())
            .await
            .unwrap();
        assert_eq!(profile.profile_metadata.confidence_score, 0.85);
    }

    #[tokio::test]
    async fn test_template_engine_content_profile_matches_request() {
        let engine = TemplateProfileEngine;
        let req = ContentRequest {
            content_type: "article".to_string(),
            prompt: "quarterly roundup".to_string(),
            platform: None,
            tone: None,
            audience: None,
            brand: None,
        };
        let profile = engine.content_profile(&req).await.unwrap();
        assert_eq!(profile.metadata.content_type, "article");
    }
}
