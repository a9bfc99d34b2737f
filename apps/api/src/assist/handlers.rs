//! Axum route handlers for the Resume Assist API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assist::recommender;
use crate::errors::AppError;
use crate::models::recommendation::{ProjectIdea, SkillRecommendation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeAssistRequest {
    pub goal: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeAssistResponse {
    pub skills: Vec<String>,
    pub projects: Vec<ProjectIdea>,
}

impl From<SkillRecommendation> for ResumeAssistResponse {
    fn from(recommendation: SkillRecommendation) -> Self {
        ResumeAssistResponse {
            skills: recommendation.skills,
            projects: recommendation.projects,
        }
    }
}

/// POST /api/v1/resume-assist
///
/// Returns skill and project recommendations for a career goal. Never
/// fails on unparseable AI output — the fixed fallback stands in.
pub async fn handle_resume_assist(
    State(state): State<AppState>,
    Json(request): Json<ResumeAssistRequest>,
) -> Result<Json<ResumeAssistResponse>, AppError> {
    let recommendation = recommender::recommend(
        state.llm.as_ref(),
        state.recommendation_cache.as_ref(),
        &request.goal,
    )
    .await?;

    Ok(Json(recommendation.into()))
}
