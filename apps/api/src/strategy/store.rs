//! Strategy persistence — versioned strategy blobs plus the normalized rows
//! the roadmap view reads.
//!
//! Saving a strategy is append-only: each save INSERTs the next version into
//! `strategies` and never UPDATEs an existing row. The `users` mirror columns
//! and the normalized roadmap tables always reflect the latest version.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::business::BusinessContextProfile;
use crate::models::strategy::{
    KpiRow, ResourceRow, RiskRow, RoadmapPhaseRow, StrategyRow, StrategyVersionRow, SwotItemRow,
};
use crate::models::user::User;

pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<Option<User>> {
    Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?)
}

pub struct SavedStrategy {
    pub strategy_id: Uuid,
    pub version: i32,
}

/// Commits a new strategy version and refreshes the normalized roadmap rows
/// inside one transaction.
pub async fn save_strategy(
    pool: &PgPool,
    user_id: Uuid,
    profile: &BusinessContextProfile,
) -> Result<SavedStrategy> {
    let strategy_data = serde_json::to_value(profile)?;

    let mut tx = pool.begin().await?;

    // 1. Next version — append-only.
    let current_max: Option<i32> =
        sqlx::query_scalar("SELECT MAX(version) FROM strategies WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;
    let version = current_max.unwrap_or(0) + 1;

    let strategy_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO strategies (id, user_id, version, strategy_data) VALUES ($1, $2, $3, $4)",
    )
    .bind(strategy_id)
    .bind(user_id)
    .bind(version)
    .bind(&strategy_data)
    .execute(&mut *tx)
    .await?;

    // 2. Mirror onto the user row.
    sqlx::query(
        "UPDATE users SET strategy_completed = TRUE, strategy_data = $1 WHERE id = $2",
    )
    .bind(&strategy_data)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    // 3. Replace the normalized roadmap rows with the new version's content.
    for table in ["roadmap_phases", "kpis", "risks", "resources", "swot_items"] {
        sqlx::query(&format!("DELETE FROM {table} WHERE user_id = $1"))
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
    }

    for (position, phase) in profile.implementation_timeline.iter().enumerate() {
        sqlx::query(
            "INSERT INTO roadmap_phases (id, user_id, name, timeline, focus, position)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&phase.name)
        .bind(&phase.timeline)
        .bind(&phase.focus)
        .bind(position as i32)
        .execute(&mut *tx)
        .await?;
    }

    for kpi in &profile.success_metrics_kpis {
        sqlx::query("INSERT INTO kpis (id, user_id, name) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(kpi)
            .execute(&mut *tx)
            .await?;
    }

    for risk in &profile.risk_assessment {
        sqlx::query(
            "INSERT INTO risks (id, user_id, risk, likelihood, impact, mitigation)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&risk.risk)
        .bind(&risk.likelihood)
        .bind(&risk.impact)
        .bind(&risk.mitigation)
        .execute(&mut *tx)
        .await?;
    }

    for resource in &profile.resource_requirements {
        sqlx::query(
            "INSERT INTO resources (id, user_id, resource, category, priority)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&resource.resource)
        .bind(&resource.category)
        .bind(&resource.priority)
        .execute(&mut *tx)
        .await?;
    }

    let swot_groups: [(&str, &Vec<String>); 4] = [
        ("strengths", &profile.swot.strengths),
        ("weaknesses", &profile.swot.weaknesses),
        ("opportunities", &profile.swot.opportunities),
        ("threats", &profile.swot.threats),
    ];
    for (category, items) in swot_groups {
        for item in items {
            sqlx::query(
                "INSERT INTO swot_items (id, user_id, category, item) VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(category)
            .bind(item)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    info!("Saved strategy version {version} for user {user_id}");

    Ok(SavedStrategy {
        strategy_id,
        version,
    })
}

/// Returns the latest strategy version for a user, if any.
pub async fn get_current_strategy(pool: &PgPool, user_id: Uuid) -> Result<Option<StrategyRow>> {
    Ok(sqlx::query_as::<_, StrategyRow>(
        "SELECT * FROM strategies WHERE user_id = $1 ORDER BY version DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

/// Returns all strategy versions for a user, oldest first, without blobs.
pub async fn get_strategy_history(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<StrategyVersionRow>> {
    Ok(sqlx::query_as::<_, StrategyVersionRow>(
        "SELECT id, user_id, version, created_at FROM strategies
         WHERE user_id = $1 ORDER BY version ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Everything the roadmap view renders for one user.
#[derive(Debug, serde::Serialize)]
pub struct RoadmapView {
    pub phases: Vec<RoadmapPhaseRow>,
    pub kpis: Vec<KpiRow>,
    pub risks: Vec<RiskRow>,
    pub resources: Vec<ResourceRow>,
    pub swot: Vec<SwotItemRow>,
}

pub async fn get_roadmap(pool: &PgPool, user_id: Uuid) -> Result<RoadmapView> {
    let phases = sqlx::query_as::<_, RoadmapPhaseRow>(
        "SELECT * FROM roadmap_phases WHERE user_id = $1 ORDER BY position ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let kpis = sqlx::query_as::<_, KpiRow>("SELECT * FROM kpis WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    let risks = sqlx::query_as::<_, RiskRow>("SELECT * FROM risks WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    let resources =
        sqlx::query_as::<_, ResourceRow>("SELECT * FROM resources WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    let swot = sqlx::query_as::<_, SwotItemRow>(
        "SELECT * FROM swot_items WHERE user_id = $1 ORDER BY category ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(RoadmapView {
        phases,
        kpis,
        risks,
        resources,
        swot,
    })
}
