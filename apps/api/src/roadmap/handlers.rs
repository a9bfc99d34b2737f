//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::roadmap::{ExperienceLevel, Roadmap, WeekEntry};
use crate::roadmap::analytics::{compute_roadmap_metrics, next_incomplete_week, RoadmapMetrics};
use crate::roadmap::{builder, store, tracker};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    pub user_id: Uuid,
    pub goal: String,
    pub experience: ExperienceLevel,
}

#[derive(Debug, Serialize)]
pub struct GenerateRoadmapResponse {
    pub roadmap_id: Uuid,
    pub weeks: Vec<WeekEntry>,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct RoadmapListResponse {
    pub roadmaps: Vec<Roadmap>,
}

#[derive(Debug, Deserialize)]
pub struct WeekCompletionUpdate {
    pub user_id: Uuid,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct AnalyticsResponse {
    pub metrics: RoadmapMetrics,
    /// The lowest-numbered incomplete week — what the dashboard shows next.
    pub next_week: Option<WeekEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmaps
///
/// Full generation pipeline: validate → prompt → AI call → normalize →
/// persist. No partial roadmap survives a failed step.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoadmapRequest>,
) -> Result<(StatusCode, Json<GenerateRoadmapResponse>), AppError> {
    let new_roadmap = builder::generate_roadmap(
        &state.db,
        state.llm.as_ref(),
        request.user_id,
        &request.goal,
        request.experience,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(GenerateRoadmapResponse {
            roadmap_id: new_roadmap.roadmap_id,
            weeks: new_roadmap.weeks,
        }),
    ))
}

/// GET /api/v1/roadmaps?user_id=...
pub async fn handle_get_roadmaps(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RoadmapListResponse>, AppError> {
    let roadmaps = store::load_user_roadmaps(&state.db, params.user_id).await?;
    Ok(Json(RoadmapListResponse { roadmaps }))
}

/// PATCH /api/v1/roadmaps/:roadmap_id/weeks/:week
pub async fn handle_update_week_completion(
    State(state): State<AppState>,
    Path((roadmap_id, week)): Path<(Uuid, i32)>,
    Json(request): Json<WeekCompletionUpdate>,
) -> Result<StatusCode, AppError> {
    tracker::set_week_completion(
        &state.db,
        request.user_id,
        roadmap_id,
        week,
        request.completed,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/roadmaps/:roadmap_id/analytics?user_id=...
pub async fn handle_roadmap_analytics(
    State(state): State<AppState>,
    Path(roadmap_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let weeks = store::load_week_entries(&state.db, params.user_id, roadmap_id).await?;
    let metrics = compute_roadmap_metrics(&weeks);
    let next_week = next_incomplete_week(&weeks).cloned();
    Ok(Json(AnalyticsResponse { metrics, next_week }))
}
