#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub strategy_completed: bool,
    /// Opaque JSON mirror of the user's current strategy profile.
    pub strategy_data: Option<Value>,
    pub created_at: DateTime<Utc>,
}
