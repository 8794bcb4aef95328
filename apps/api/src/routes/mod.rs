pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::campaign::handlers as campaign_handlers;
use crate::profile::handlers as profile_handlers;
use crate::review;
use crate::state::AppState;
use crate::strategy::handlers as strategy_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile generation
        .route(
            "/api/v1/profiles/business",
            post(profile_handlers::handle_generate_business_profile),
        )
        .route(
            "/api/v1/profiles/content",
            post(profile_handlers::handle_generate_content_profile),
        )
        // Campaign planning
        .route(
            "/api/v1/campaigns",
            post(campaign_handlers::handle_generate_campaign),
        )
        .route(
            "/api/v1/campaigns/templates",
            get(campaign_handlers::handle_list_templates)
                .post(campaign_handlers::handle_add_template),
        )
        // Strategy persistence and roadmap reads
        .route(
            "/api/v1/strategy",
            post(strategy_handlers::handle_save_strategy)
                .get(strategy_handlers::handle_get_strategy),
        )
        .route(
            "/api/v1/strategy/history",
            get(strategy_handlers::handle_strategy_history),
        )
        .route(
            "/api/v1/roadmap",
            get(strategy_handlers::handle_get_roadmap),
        )
        // Mock bias/alignment review — labeled stub, not analysis
        .route("/api/v1/content/review", post(review::handle_review))
        .with_state(state)
}
