//! Roadmap Builder — orchestrates the generation pipeline.
//!
//! Flow: validate → build prompt → TextGenerator → normalize →
//! transactional persist → return the parsed week list.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::roadmap::{ExperienceLevel, WeekEntry};
use crate::normalize;
use crate::roadmap::prompts::{build_week_plan_prompt, ROADMAP_SYSTEM};
use crate::roadmap::store::ensure_user_exists;

/// A freshly generated and persisted roadmap.
#[derive(Debug)]
pub struct NewRoadmap {
    pub roadmap_id: Uuid,
    pub weeks: Vec<WeekEntry>,
}

/// Generates a week plan for (goal, experience), persists it as a new
/// roadmap appended to the user's list, and returns the parsed weeks.
///
/// Persistence happens only after successful normalization: a roadmap
/// exists with complete content or does not exist at all.
pub async fn generate_roadmap(
    pool: &PgPool,
    llm: &dyn TextGenerator,
    user_id: Uuid,
    goal: &str,
    experience: ExperienceLevel,
) -> Result<NewRoadmap, AppError> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation("goal cannot be empty".to_string()));
    }

    ensure_user_exists(pool, user_id).await?;

    let prompt = build_week_plan_prompt(goal, experience);
    info!("Generating roadmap for user {user_id}");
    let raw = llm.generate(&prompt, ROADMAP_SYSTEM).await?;

    let weeks = normalize::parse_week_plan(&raw)
        .map_err(|e| AppError::MalformedAiResponse(e.to_string()))?;

    let roadmap_id = Uuid::new_v4();
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO roadmaps (id, user_id, goal, experience) VALUES ($1, $2, $3, $4)")
        .bind(roadmap_id)
        .bind(user_id)
        .bind(goal)
        .bind(experience.as_str())
        .execute(&mut *tx)
        .await?;

    for (position, entry) in weeks.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO roadmap_weeks (id, roadmap_id, position, week, goal, tasks, completed)
            VALUES ($1, $2, $3, $4, $5, $6, false)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(roadmap_id)
        .bind(position as i32)
        .bind(entry.week)
        .bind(&entry.goal)
        .bind(&entry.tasks)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!("Roadmap {roadmap_id} created with {} weeks", weeks.len());
    Ok(NewRoadmap { roadmap_id, weeks })
}
