use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::business::{BusinessContextProfile, WizardInputs, WizardType};
use crate::models::content::{ContentContextProfile, ContentRequest};
use crate::profile::analyzer::{
    analyze_profile_completeness, generate_content_recommendations, ProfileAnalysis,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BusinessProfileRequest {
    pub wizard_type: WizardType,
    #[serde(default)]
    pub inputs: WizardInputs,
}

/// POST /api/v1/profiles/business
pub async fn handle_generate_business_profile(
    State(state): State<AppState>,
    Json(req): Json<BusinessProfileRequest>,
) -> Result<Json<BusinessContextProfile>, AppError> {
    let profile = state
        .engine
        .business_profile(req.wizard_type, &req.inputs)
        .await?;
    info!(
        "Generated business profile {} for wizard {:?}",
        profile.id, req.wizard_type
    );
    Ok(Json(profile))
}

#[derive(Debug, Serialize)]
pub struct ContentProfileResponse {
    pub profile: ContentContextProfile,
    pub analysis: ProfileAnalysis,
    pub content_recommendations: Vec<String>,
}

/// POST /api/v1/profiles/content
pub async fn handle_generate_content_profile(
    State(state): State<AppState>,
    Json(req): Json<ContentRequest>,
) -> Result<Json<ContentProfileResponse>, AppError> {
    if req.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt must not be empty".to_string()));
    }
    let profile = state.engine.content_profile(&req).await?;
    let analysis = analyze_profile_completeness(&profile);
    let content_recommendations = generate_content_recommendations(&profile);
    Ok(Json(ContentProfileResponse {
        profile,
        analysis,
        content_recommendations,
    }))
}
