use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One saved strategy version. Append-only — saving a strategy INSERTs the
/// next version, never UPDATEs an existing row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StrategyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub version: i32,
    pub strategy_data: Value,
    pub created_at: DateTime<Utc>,
}

/// Version metadata without the blob, for history listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StrategyVersionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapPhaseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub timeline: String,
    pub focus: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KpiRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RiskRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub risk: String,
    pub likelihood: String,
    pub impact: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResourceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resource: String,
    pub category: String,
    pub priority: String,
}

/// One SWOT item; `category` is strengths | weaknesses | opportunities | threats.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SwotItemRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub item: String,
}
