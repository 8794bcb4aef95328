use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::campaign::generator::{apply_custom_requirements, generate_campaign_profile};
use crate::errors::AppError;
use crate::models::campaign::{CampaignRequest, CampaignTemplate, ComprehensiveSwipeProfile};
use crate::state::AppState;

/// POST /api/v1/campaigns
pub async fn handle_generate_campaign(
    State(state): State<AppState>,
    Json(req): Json<CampaignRequest>,
) -> Result<Json<ComprehensiveSwipeProfile>, AppError> {
    if req.total_pieces < 1 {
        return Err(AppError::Validation(
            "total_pieces must be at least 1".to_string(),
        ));
    }

    let profile = {
        let catalog = state.templates.read().await;
        let template = catalog.find(req.campaign_type);
        generate_campaign_profile(&req, template)
    };

    let profile = match &req.custom_requirements {
        Some(overrides) => apply_custom_requirements(profile, overrides)?,
        None => profile,
    };

    info!(
        "Generated {}-piece {:?} campaign '{}'",
        profile.campaign_overview.total_pieces, req.campaign_type, req.campaign_name
    );
    Ok(Json(profile))
}

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<CampaignTemplate>,
}

/// GET /api/v1/campaigns/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
) -> Result<Json<TemplateListResponse>, AppError> {
    let catalog = state.templates.read().await;
    Ok(Json(TemplateListResponse {
        templates: catalog.all().to_vec(),
    }))
}

/// POST /api/v1/campaigns/templates
///
/// Registers a user template for the rest of the session. Nothing is
/// persisted — the catalog resets to built-ins on restart.
pub async fn handle_add_template(
    State(state): State<AppState>,
    Json(template): Json<CampaignTemplate>,
) -> Result<StatusCode, AppError> {
    if template.name.trim().is_empty() {
        return Err(AppError::Validation(
            "template name must not be empty".to_string(),
        ));
    }
    let mut catalog = state.templates.write().await;
    info!("Registering session template '{}'", template.name);
    catalog.add_template(template);
    Ok(StatusCode::CREATED)
}
