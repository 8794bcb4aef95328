use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::business::BusinessContextProfile;
use crate::models::strategy::{StrategyRow, StrategyVersionRow};
use crate::state::AppState;
use crate::strategy::store::{
    get_current_strategy, get_roadmap, get_strategy_history, get_user, save_strategy, RoadmapView,
};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SaveStrategyRequest {
    pub user_id: Uuid,
    pub profile: BusinessContextProfile,
}

#[derive(Debug, Serialize)]
pub struct SaveStrategyResponse {
    pub strategy_id: Uuid,
    pub version: i32,
}

/// POST /api/v1/strategy
pub async fn handle_save_strategy(
    State(state): State<AppState>,
    Json(req): Json<SaveStrategyRequest>,
) -> Result<Json<SaveStrategyResponse>, AppError> {
    get_user(&state.db, req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", req.user_id)))?;
    let saved = save_strategy(&state.db, req.user_id, &req.profile).await?;
    Ok(Json(SaveStrategyResponse {
        strategy_id: saved.strategy_id,
        version: saved.version,
    }))
}

/// GET /api/v1/strategy
pub async fn handle_get_strategy(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StrategyRow>, AppError> {
    let strategy = get_current_strategy(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No strategy saved for user {}", params.user_id))
        })?;
    Ok(Json(strategy))
}

/// GET /api/v1/strategy/history
pub async fn handle_strategy_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<StrategyVersionRow>>, AppError> {
    let history = get_strategy_history(&state.db, params.user_id).await?;
    Ok(Json(history))
}

/// GET /api/v1/roadmap
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RoadmapView>, AppError> {
    let roadmap = get_roadmap(&state.db, params.user_id).await?;
    Ok(Json(roadmap))
}
