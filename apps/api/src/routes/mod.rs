pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::assist;
use crate::roadmap;
use crate::state::AppState;
use crate::users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Identity provisioning
        .route("/api/v1/users", post(users::handlers::handle_create_user))
        .route("/api/v1/users/:id", get(users::handlers::handle_get_user))
        // Roadmap API
        .route(
            "/api/v1/roadmaps",
            post(roadmap::handlers::handle_generate_roadmap)
                .get(roadmap::handlers::handle_get_roadmaps),
        )
        .route(
            "/api/v1/roadmaps/:roadmap_id/weeks/:week",
            patch(roadmap::handlers::handle_update_week_completion),
        )
        .route(
            "/api/v1/roadmaps/:roadmap_id/analytics",
            get(roadmap::handlers::handle_roadmap_analytics),
        )
        // Resume assistance
        .route(
            "/api/v1/resume-assist",
            post(assist::handlers::handle_resume_assist),
        )
        .with_state(state)
}
