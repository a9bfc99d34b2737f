//! Read-side accessors for persisted users and roadmaps.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::roadmap::{Roadmap, RoadmapRow, RoadmapWeekRow, WeekEntry};

/// Confirms `user_id` resolves to an existing user.
pub async fn ensure_user_exists(pool: &PgPool, user_id: Uuid) -> Result<(), AppError> {
    let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    exists.map(|_| ()).ok_or(AppError::UserNotFound(user_id))
}

/// Loads all of a user's roadmaps with their week content, oldest first —
/// the same order the embedded list grew in.
pub async fn load_user_roadmaps(pool: &PgPool, user_id: Uuid) -> Result<Vec<Roadmap>, AppError> {
    ensure_user_exists(pool, user_id).await?;

    let rows: Vec<RoadmapRow> =
        sqlx::query_as("SELECT * FROM roadmaps WHERE user_id = $1 ORDER BY created_at, id")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    let mut roadmaps = Vec::with_capacity(rows.len());
    for row in rows {
        let content = load_week_rows(pool, row.id).await?;
        roadmaps.push(Roadmap {
            id: row.id,
            goal: row.goal,
            experience: row.experience,
            created_at: row.created_at,
            content,
        });
    }
    Ok(roadmaps)
}

/// Loads the week entries of one roadmap, verifying it belongs to `user_id`.
pub async fn load_week_entries(
    pool: &PgPool,
    user_id: Uuid,
    roadmap_id: Uuid,
) -> Result<Vec<WeekEntry>, AppError> {
    ensure_user_exists(pool, user_id).await?;

    let owned: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM roadmaps WHERE id = $1 AND user_id = $2")
            .bind(roadmap_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    if owned.is_none() {
        return Err(AppError::RoadmapNotFound(roadmap_id));
    }

    load_week_rows(pool, roadmap_id).await
}

/// Week rows in `position` order — the AI response order, not week-number order.
async fn load_week_rows(pool: &PgPool, roadmap_id: Uuid) -> Result<Vec<WeekEntry>, AppError> {
    let weeks: Vec<RoadmapWeekRow> =
        sqlx::query_as("SELECT * FROM roadmap_weeks WHERE roadmap_id = $1 ORDER BY position")
            .bind(roadmap_id)
            .fetch_all(pool)
            .await?;
    Ok(weeks.into_iter().map(WeekEntry::from).collect())
}
